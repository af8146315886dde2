//! Text extraction for uploaded resume files.

use crate::errors::AppError;

/// Extracts plain text from an uploaded resume. PDF and plain-text uploads
/// are supported; anything else is rejected before analysis.
pub fn extract_resume_text(file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
    match extension(file_name).as_str() {
        "pdf" => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Analysis(format!("PDF text extraction failed: {e}"))),
        "txt" | "text" | "md" => String::from_utf8(bytes.to_vec())
            .map_err(|_| AppError::Validation("Resume text is not valid UTF-8".to_string())),
        other => Err(AppError::Validation(format!(
            "Unsupported resume format '{other}'; upload a .pdf or .txt file"
        ))),
    }
}

fn extension(file_name: &str) -> String {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}
