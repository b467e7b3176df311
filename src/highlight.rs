//! Pattern-based key highlighting over JSON text.
//!
//! The text is HTML-escaped first, then every `"<key>":` that matches a
//! variable path is wrapped in a marker span. Matching is purely textual: it
//! does not track nesting, so same-named keys elsewhere can be marked and
//! unusual layouts can be missed.

use regex::{Captures, Regex};
use tracing::{debug, instrument, trace, warn};

use crate::config::HighlightConfig;
use crate::path::DotPath;

pub const DEFAULT_CLASS: &str = "highlight";

const CLOSE_TAG: &str = "</span>";

/// Escape text so it can be embedded as markup. Quotes are kept literal so
/// key patterns still match.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps matching keys in `<span class="...">` markers.
#[derive(Debug, Clone)]
pub struct Highlighter {
    open_tag: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::with_class(DEFAULT_CLASS)
    }
}

impl Highlighter {
    pub fn new(config: &HighlightConfig) -> Self {
        Self::with_class(&config.class_name)
    }

    pub fn with_class(class_name: &str) -> Self {
        Self { open_tag: format!(r#"<span class="{}">"#, class_name) }
    }

    /// Escape `raw_text` and mark every key named by `variable_paths`.
    ///
    /// With a list path, a key is only marked when it follows the list path's
    /// key chain, an opening `[` and an opening `{` (the whole stretch is wrapped).
    /// Without one, the key is marked wherever it appears.
    #[instrument(target = "pathlight::highlight", skip(self, raw_text, variable_paths), fields(len = raw_text.len()))]
    pub fn highlight<S: AsRef<str>>(
        &self,
        raw_text: &str,
        list_path: Option<&str>,
        variable_paths: &[S],
    ) -> String {
        let mut html = escape_html(raw_text);
        let anchor = match list_path.filter(|p| !p.is_empty()) {
            Some(list_path) => match list_anchor(list_path) {
                Some(anchor) => Some(anchor),
                None => return html,
            },
            None => None,
        };

        for variable in variable_paths {
            let path = DotPath::parse(variable.as_ref()).normalized();
            for property in path.tail() {
                if is_unmatchable(property) {
                    trace!(target = "pathlight::highlight", property = %property, "skipping name that cannot occur in escaped text");
                    continue;
                }
                let pattern = match &anchor {
                    Some(anchor) => format!(r"{}\[\s*\{{[^}}]*{}", anchor, key_pattern(property)),
                    None => key_pattern(property),
                };
                let regex = match Regex::new(&pattern) {
                    Ok(regex) => regex,
                    Err(e) => {
                        warn!(target = "pathlight::highlight", error = %e, property = %property, "pattern rejected");
                        continue;
                    }
                };
                html = regex
                    .replace_all(&html, |caps: &Captures| format!("{}{}{}", self.open_tag, &caps[0], CLOSE_TAG))
                    .into_owned();
            }
        }

        debug!(target = "pathlight::highlight", out_len = html.len(), "highlight done");
        html
    }
}

/// Highlight with the default marker class.
pub fn highlight<S: AsRef<str>>(raw_text: &str, list_path: Option<&str>, variable_paths: &[S]) -> String {
    Highlighter::default().highlight(raw_text, list_path, variable_paths)
}

fn key_pattern(name: &str) -> String {
    format!(r#""{}"\s*:"#, regex::escape(name))
}

// Escaped text has no literal angle brackets; a name containing one could only match marker tags.
fn is_unmatchable(name: &str) -> bool {
    name.contains(['<', '>'])
}

/// `"seg"\s*:\s*` for every segment of the normalized list path, back to back.
fn list_anchor(list_path: &str) -> Option<String> {
    let path = DotPath::parse(list_path).normalized();
    if path.segments().iter().any(|s| is_unmatchable(s)) {
        return None;
    }
    Some(
        path.segments()
            .iter()
            .map(|s| format!(r#""{}"\s*:\s*"#, regex::escape(s)))
            .collect(),
    )
}

/// A run of plain text inside highlight markup, with the marker nesting depth it sits at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub depth: usize,
}

/// Split markup into unescaped text runs, tracking how many markers enclose each run.
pub fn segments(markup: &str) -> Vec<Segment> {
    const ENTITIES: [(&str, char); 3] = [("&amp;", '&'), ("&lt;", '<'), ("&gt;", '>')];

    let mut out = Vec::new();
    let mut text = String::new();
    let mut depth = 0usize;
    let mut rest = markup;

    while let Some(c) = rest.chars().next() {
        match c {
            '<' => {
                if !text.is_empty() {
                    out.push(Segment { text: std::mem::take(&mut text), depth });
                }
                if let Some(after) = rest.strip_prefix(CLOSE_TAG) {
                    depth = depth.saturating_sub(1);
                    rest = after;
                } else if let Some(end) = rest.find('>') {
                    depth += 1;
                    rest = &rest[end + 1..];
                } else {
                    text.push_str(rest);
                    break;
                }
            }
            '&' => match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
                Some((entity, decoded)) => {
                    text.push(*decoded);
                    rest = &rest[entity.len()..];
                }
                None => {
                    text.push('&');
                    rest = &rest[1..];
                }
            },
            _ => {
                text.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    if !text.is_empty() {
        out.push(Segment { text, depth });
    }
    out
}

/// Remove marker tags and undo the escaping, recovering the original text.
pub fn strip_markers(markup: &str) -> String {
    segments(markup).into_iter().map(|s| s.text).collect()
}
