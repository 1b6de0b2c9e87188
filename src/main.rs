use std::sync::Arc;

use email_triage::config::TriageConfig;
use email_triage::llm::create_ports;
use email_triage::nlp::NlpBundle;
use email_triage::pipeline::processor::ClassificationPipeline;
use email_triage::server::{AppState, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = TriageConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export ANTHROPIC_API_KEY=sk-ant-... (or OPENAI_API_KEY with EMAIL_TRIAGE_BACKEND=openai)");
        std::process::exit(1);
    });

    eprintln!("📧 Email Triage v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!("   API:   http://{}/classify", config.bind_addr);

    // Primary ports (rig-core transport)
    let (classifier, responder) = create_ports(&config)?;

    // Read-only NLP resources, built once and shared by every request
    let nlp = NlpBundle::initialize();

    let pipeline = Arc::new(ClassificationPipeline::new(
        nlp,
        classifier,
        responder,
        config.top_keywords,
    ));

    let app = routes(AppState { pipeline });
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
