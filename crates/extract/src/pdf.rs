//! PDF text extraction.
//!
//! Best-effort plain text via `pdf-extract`. No layout or structure
//! awareness — page text is concatenated as the library yields it.

use studyweave_core::error::ExtractError;

/// Check whether a byte buffer starts with the PDF magic header.
pub fn is_pdf(data: &[u8]) -> bool {
    data.len() >= 4 && &data[..4] == b"%PDF"
}

/// Extract text from a PDF file on disk, truncating to `char_limit`
/// characters at a word boundary.
pub fn extract_text_from_path(
    path: &std::path::Path,
    char_limit: usize,
) -> Result<String, ExtractError> {
    let data = std::fs::read(path).map_err(|e| ExtractError::Store(e.to_string()))?;
    extract_text(&data, char_limit)
}

/// Extract text from PDF bytes, truncating to `char_limit` characters at a
/// word boundary.
///
/// Returns `Ok` with an empty string for a readable document that simply
/// contains no text; returns `Err` only when the document cannot be parsed.
pub fn extract_text(data: &[u8], char_limit: usize) -> Result<String, ExtractError> {
    if !is_pdf(data) {
        return Err(ExtractError::NotPdf(
            "missing %PDF magic header".into(),
        ));
    }

    let text = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| ExtractError::Unreadable(e.to_string()))?;
    let text = text.trim().to_string();

    if text.chars().count() <= char_limit {
        return Ok(text);
    }

    tracing::debug!(limit = char_limit, "Truncating extracted text");
    let mut truncated: String = text.chars().take(char_limit).collect();
    // Drop the incomplete last word rather than cutting mid-token.
    if let Some(last_space) = truncated.rfind(' ') {
        truncated.truncate(last_space);
    }
    Ok(truncated)
}
