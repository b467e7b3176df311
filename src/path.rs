//! Dot-path splitting and first-segment normalization.
//!
//! A dot-path such as `params.address.city` is split on `.` into segments.
//! The two conventional root names `params` and `data` are treated as the same
//! root, canonicalized to `data`.

use std::fmt;

/// Canonical root segment.
pub const CANONICAL_ROOT: &str = "data";

/// Root alias rewritten to [`CANONICAL_ROOT`].
pub const PARAMS_ROOT: &str = "params";

/// Rewrite the first segment to `data` when it is `params` or `data`.
/// Other segments, and any other first segment, are left alone.
pub fn normalize(mut segments: Vec<String>) -> Vec<String> {
    if let Some(first) = segments.first_mut() {
        if first == PARAMS_ROOT || first == CANONICAL_ROOT {
            *first = CANONICAL_ROOT.to_string();
        }
    }
    segments
}

/// A `.`-separated path, split into its segments.
///
/// Never empty: splitting `""` yields a single empty segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotPath {
    segments: Vec<String>,
}

impl DotPath {
    pub fn parse(raw: &str) -> Self {
        Self { segments: raw.split('.').map(str::to_string).collect() }
    }

    /// Same path with its root normalized.
    pub fn normalized(self) -> Self {
        Self { segments: normalize(self.segments) }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments after the root; the candidate property names for highlighting.
    pub fn tail(&self) -> &[String] {
        &self.segments[1..]
    }

    /// The second segment, used as the per-item property in list mode.
    pub fn property(&self) -> Option<&str> {
        self.segments.get(1).map(String::as_str)
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
