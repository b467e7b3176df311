//! Value extraction along dot-paths.
//!
//! Two modes:
//! - **direct**: every path is walked from the document root (root segment normalized first)
//! - **list**: a list path selects an array, and each item path `"<alias>.<property>"`
//!   reads `<property>` from every element of that array
//!
//! Both modes abort on the first path that does not resolve.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::error::ExtractError;
use crate::path::DotPath;

/// One resolved path and the value it points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The path exactly as the user wrote it (before normalization).
    pub path: String,
    pub value: Value,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.path, format_value(&self.value))
    }
}

/// Structured form of an extraction. `Display` renders the text report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "entries", rename_all = "snake_case")]
pub enum Report {
    /// One entry per variable path, in input order.
    Direct(Vec<Entry>),
    /// One block per array element, each holding one entry per item path.
    List(Vec<Vec<Entry>>),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Direct(entries) => {
                for entry in entries {
                    write!(f, "{}", entry)?;
                }
            }
            Report::List(blocks) => {
                for block in blocks {
                    for entry in block {
                        write!(f, "{}", entry)?;
                    }
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}

/// Render a value for the report: structured values as 2-space indented JSON,
/// strings as their raw contents, everything else as its JSON literal.
/// Whole floats drop their fraction (`1e2` renders as `100`).
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => format!("{:#}", value),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
                // -0.0 prints as 0
                if f == 0.0 {
                    "0".to_string()
                } else {
                    format!("{:.0}", f)
                }
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Look up `key` directly under `value`. Arrays accept canonical decimal indices.
fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => array_index(key).and_then(|i| items.get(i)),
        _ => None,
    }
}

fn array_index(key: &str) -> Option<usize> {
    let index: usize = key.parse().ok()?;
    (index.to_string() == key).then_some(index)
}

/// Walk every segment of `path` from `document`. `None` if a step hits `null` or a missing key.
fn resolve<'a>(document: &'a Value, path: &DotPath) -> Option<&'a Value> {
    let mut current = document;
    for segment in path.segments() {
        if current.is_null() {
            return None;
        }
        current = child(current, segment)?;
    }
    Some(current)
}

/// Resolve each path from the document root and collect the results.
#[instrument(target = "pathlight::extract", skip_all, fields(paths = paths.len()))]
pub fn collect_direct<S: AsRef<str>>(document: &Value, paths: &[S]) -> Result<Report, ExtractError> {
    let mut entries = Vec::with_capacity(paths.len());
    for raw in paths {
        let raw = raw.as_ref();
        let path = DotPath::parse(raw).normalized();
        let value = resolve(document, &path).ok_or_else(|| {
            debug!(target = "pathlight::extract", path = raw, normalized = %path, "path did not resolve");
            ExtractError::InvalidPath(raw.to_string())
        })?;
        trace!(target = "pathlight::extract", path = raw, "resolved");
        entries.push(Entry { path: raw.to_string(), value: value.clone() });
    }
    Ok(Report::Direct(entries))
}

/// Direct mode as a text report: one `"<path>: <value>"` line per path.
pub fn extract_direct<S: AsRef<str>>(document: &Value, paths: &[S]) -> Result<String, ExtractError> {
    Ok(collect_direct(document, paths)?.to_string())
}

/// Find the array named by `list_path`.
fn resolve_list<'a>(document: &'a Value, list_path: &str) -> Result<&'a [Value], ExtractError> {
    let path = DotPath::parse(list_path).normalized();
    let mut current = document;
    for segment in path.segments() {
        if current.is_null() {
            return Err(ExtractError::ListNotFound(list_path.to_string()));
        }
        current = child(current, segment)
            .ok_or_else(|| ExtractError::ListNotFound(list_path.to_string()))?;
    }
    current
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ExtractError::NotAnArray(list_path.to_string()))
}

/// Resolve the list, then read each item path's property from every element.
#[instrument(target = "pathlight::extract", skip(document, item_paths), fields(item_paths = item_paths.len()))]
pub fn collect_from_list<S: AsRef<str>>(
    document: &Value,
    list_path: &str,
    item_paths: &[S],
) -> Result<Report, ExtractError> {
    let items = resolve_list(document, list_path)?;
    debug!(target = "pathlight::extract", len = items.len(), "list resolved");

    let paths: Vec<(&str, DotPath)> = item_paths
        .iter()
        .map(|raw| (raw.as_ref(), DotPath::parse(raw.as_ref())))
        .collect();

    let mut blocks = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let mut block = Vec::with_capacity(paths.len());
        for (raw, path) in &paths {
            // The alias segment is never checked; only the property matters.
            let value = path
                .property()
                .and_then(|property| child(item, property))
                .ok_or_else(|| {
                    debug!(target = "pathlight::extract", path = *raw, index, "property missing on list item");
                    ExtractError::InvalidPath(raw.to_string())
                })?;
            block.push(Entry { path: raw.to_string(), value: value.clone() });
        }
        blocks.push(block);
    }
    Ok(Report::List(blocks))
}

/// List mode as a text report: one block of lines per element, each followed by a blank line.
pub fn extract_from_list<S: AsRef<str>>(
    document: &Value,
    list_path: &str,
    item_paths: &[S],
) -> Result<String, ExtractError> {
    Ok(collect_from_list(document, list_path, item_paths)?.to_string())
}
