//! PDF text extraction. The engine only ever sees the UTF-8 text produced
//! here; raw file bytes stop at this boundary.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::errors::AppError;

/// Writes the uploaded bytes to a tempfile and extracts their text.
/// The tempfile is removed when the handle drops, success or not.
pub fn extract_pdf_text(data: &[u8]) -> Result<String, AppError> {
    let mut file = NamedTempFile::new()
        .map_err(|e| AppError::Extraction(format!("tempfile creation failed: {e}")))?;
    file.write_all(data)
        .map_err(|e| AppError::Extraction(format!("tempfile write failed: {e}")))?;

    pdf_extract::extract_text(file.path())
        .map_err(|e| AppError::Extraction(format!("PDF parsing failed: {e}")))
}
