//! HTTP layer — thin collaborator around the pipeline.
//!
//! Endpoints mirror the service contract:
//! - `POST /classify` — JSON body
//! - `POST /classify/upload` — multipart file (.txt/.pdf) + form fields
//! - `GET /`, `GET /health` — liveness

pub mod extract;

use std::sync::Arc;

use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::pipeline::processor::ClassificationPipeline;
use crate::pipeline::types::{InboundMessage, PipelineResult};

/// Default subject for uploaded files without one.
const DEFAULT_UPLOAD_SUBJECT: &str = "Email importado";

/// Preview cap for extracted file text in the upload response.
const EXTRACTED_PREVIEW_CHARS: usize = 500;

/// Shared state for all routes.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ClassificationPipeline>,
}

/// Classification request over JSON.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub sender: String,
    pub subject: String,
    pub body: String,
}

/// Upload response: file info plus the flattened pipeline result.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub file_type: String,
    pub extracted_text_preview: String,
    #[serde(flatten)]
    pub result: PipelineResult,
}

fn bad_request(detail: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "detail": detail.into() })),
    )
        .into_response()
}

/// POST /classify
async fn classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Response {
    if !request.sender.contains('@') {
        return bad_request("Email do remetente inválido");
    }

    let message = InboundMessage::new(request.sender, request.subject, request.body);
    let result = state.pipeline.process(&message).await;
    Json(result).into_response()
}

/// POST /classify/upload
///
/// Multipart fields: `file` (required), `sender` (required), `subject`
/// (optional, defaults to "Email importado").
async fn classify_upload(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut sender = String::new();
    let mut subject = DEFAULT_UPLOAD_SUBJECT.to_string();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return bad_request(format!("Multipart inválido: {e}")),
        };
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                match field.bytes().await {
                    Ok(bytes) => file = Some((filename, bytes.to_vec())),
                    Err(e) => return bad_request(format!("Falha ao ler arquivo: {e}")),
                }
            }
            "sender" => {
                sender = field.text().await.unwrap_or_default();
            }
            "subject" => {
                let text = field.text().await.unwrap_or_default();
                if !text.trim().is_empty() {
                    subject = text;
                }
            }
            _ => {}
        }
    }

    let Some((filename, content)) = file else {
        return bad_request("Campo 'file' ausente");
    };
    if !sender.contains('@') {
        return bad_request("Email do remetente inválido");
    }

    info!(filename = %filename, size = content.len(), "Upload received");

    let extracted = match extract::extract_text(&content, &filename) {
        Ok(text) => text,
        Err(e) => {
            error!(filename = %filename, error = %e, "Extraction failed");
            return bad_request(e.to_string());
        }
    };

    let message = InboundMessage::new(sender, subject, extracted.clone());
    let result = state.pipeline.process(&message).await;

    Json(UploadResponse {
        file_type: extract::file_extension(&filename),
        filename,
        extracted_text_preview: truncate_chars(&extracted, EXTRACTED_PREVIEW_CHARS),
        result,
    })
    .into_response()
}

/// GET /
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Email Triage está funcionando!" }))
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "supported_formats": extract::SUPPORTED_FORMATS,
        "max_file_size_mb": extract::MAX_FILE_SIZE / 1024 / 1024,
    }))
}

/// Build the HTTP router.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/classify", post(classify))
        .route("/classify/upload", post(classify_upload))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("reunião", 100), "reunião");
        assert_eq!(truncate_chars("reunião", 6), "reuniã...");
    }

    #[test]
    fn classify_request_deserializes() {
        let req: ClassifyRequest = serde_json::from_str(
            r#"{"sender":"a@b.com","subject":"Oi","body":"Tudo bem?"}"#,
        )
        .unwrap();
        assert_eq!(req.sender, "a@b.com");
        assert_eq!(req.subject, "Oi");
    }
}
