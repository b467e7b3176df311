//! Input acquisition helpers: trimming, JSON decoding and variable-list splitting.

use serde_json::Value;
use tracing::debug;

use crate::error::ExtractError;

/// Raw JSON text together with its decoded document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput {
    /// Trimmed raw text.
    pub raw: String,
    /// `None` when the raw text is empty.
    pub document: Option<Value>,
}

impl ParsedInput {
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Trim and decode raw JSON text. Blank input is not an error.
pub fn parse_input(text: &str) -> Result<ParsedInput, ExtractError> {
    let raw = text.trim();
    if raw.is_empty() {
        return Ok(ParsedInput { raw: String::new(), document: None });
    }
    let document = serde_json::from_str(raw).map_err(|e| {
        debug!(target = "pathlight::input", error = %e, "input is not valid JSON");
        ExtractError::MalformedInput(e)
    })?;
    Ok(ParsedInput { raw: raw.to_string(), document: Some(document) })
}

/// `null`, `false`, zero and `""`: documents that count as no data to extract from.
pub fn is_blank_document(document: &Value) -> bool {
    match document {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Split comma-separated variable paths, trimming each entry.
///
/// Like `str::split`, this always yields at least one entry (`""` → `[""]`).
pub fn split_variables(text: &str) -> Vec<String> {
    text.split(',').map(|v| v.trim().to_string()).collect()
}

/// Trimmed list path, or `None` when blank.
pub fn list_path(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
