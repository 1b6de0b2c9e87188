//! Text extraction for uploaded email files (.txt / .pdf).

use crate::error::ExtractError;

/// Accepted file extensions.
pub const SUPPORTED_FORMATS: &[&str] = &[".txt", ".pdf"];

/// Upload size cap: 5 MB.
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Extract the text content of an uploaded file.
pub fn extract_text(content: &[u8], filename: &str) -> Result<String, ExtractError> {
    if content.len() > MAX_FILE_SIZE {
        return Err(ExtractError::TooLarge {
            size: content.len(),
            max: MAX_FILE_SIZE,
        });
    }

    match file_extension(filename).as_str() {
        ".txt" => extract_txt(content),
        ".pdf" => extract_pdf(content),
        other => Err(ExtractError::UnsupportedFormat {
            extension: other.to_string(),
        }),
    }
}

/// Lowercased extension including the dot; empty when there is none.
pub fn file_extension(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, ext)) => format!(".{}", ext.to_lowercase()),
        None => String::new(),
    }
}

/// UTF-8 first, Latin-1 as fallback — legacy mail exports are common.
fn extract_txt(content: &[u8]) -> Result<String, ExtractError> {
    let text = match std::str::from_utf8(content) {
        Ok(text) => text.to_string(),
        Err(_) => content.iter().map(|&b| b as char).collect(),
    };
    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(text)
}

fn extract_pdf(content: &[u8]) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(content)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_utf8_txt() {
        let text = extract_text("Reunião amanhã às 10h".as_bytes(), "email.txt").unwrap();
        assert_eq!(text, "Reunião amanhã às 10h");
    }

    #[test]
    fn falls_back_to_latin1() {
        // "Reunião" encoded as Latin-1 — invalid UTF-8.
        let bytes = [0x52, 0x65, 0x75, 0x6e, 0x69, 0xe3, 0x6f];
        let text = extract_text(&bytes, "legacy.TXT").unwrap();
        assert_eq!(text, "Reunião");
    }

    #[test]
    fn rejects_unsupported_format() {
        let err = extract_text(b"data", "email.docx").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat { .. }));
        let err = extract_text(b"data", "no-extension").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat { .. }));
    }

    #[test]
    fn rejects_oversized_file() {
        let big = vec![b'a'; MAX_FILE_SIZE + 1];
        let err = extract_text(&big, "big.txt").unwrap_err();
        assert!(matches!(err, ExtractError::TooLarge { .. }));
    }

    #[test]
    fn rejects_empty_txt() {
        let err = extract_text(b"   \n ", "empty.txt").unwrap_err();
        assert!(matches!(err, ExtractError::Empty));
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file_extension("Email.PDF"), ".pdf");
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
        assert_eq!(file_extension("noext"), "");
    }
}
