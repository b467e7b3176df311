//! Caller-side orchestration: takes the user's three input strings and runs
//! extraction or display on them.
//!
//! Nothing is cached between calls; every operation re-reads the inputs.
//! Results that are safe to show literally come back as [`Rendered::Text`],
//! highlight markup as [`Rendered::Markup`].

use tracing::{debug, instrument};

use crate::error::ExtractError;
use crate::extract::{collect_direct, collect_from_list, Report};
use crate::highlight::Highlighter;
use crate::input::{is_blank_document, list_path, parse_input, split_variables};

/// How the input document is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Raw,
    Pretty,
    HighlightRaw,
    HighlightPretty,
}

impl DisplayMode {
    pub fn new(prettify: bool, highlight: bool) -> Self {
        match (prettify, highlight) {
            (false, false) => Self::Raw,
            (true, false) => Self::Pretty,
            (false, true) => Self::HighlightRaw,
            (true, true) => Self::HighlightPretty,
        }
    }

    pub fn prettify(self) -> bool {
        matches!(self, Self::Pretty | Self::HighlightPretty)
    }

    pub fn highlight(self) -> bool {
        matches!(self, Self::HighlightRaw | Self::HighlightPretty)
    }
}

/// Output for the display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Must be shown literally, never interpreted as markup.
    Text(String),
    /// Escaped text with marker spans; meant to be interpreted.
    Markup(String),
}

impl Rendered {
    pub fn as_str(&self) -> &str {
        match self {
            Rendered::Text(s) | Rendered::Markup(s) => s,
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, Rendered::Markup(_))
    }
}

/// User-visible error text. Extraction failures carry a retry hint.
pub fn error_text(err: &ExtractError, retry_hint: bool) -> String {
    if retry_hint {
        format!("Error: {} Try again.", err)
    } else {
        format!("Error: {}", err)
    }
}

/// The four input strings, as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub raw: String,
    /// Dot-path to a list; blank for direct mode.
    pub list_path: String,
    /// Comma-separated variable paths.
    pub variables: String,
}

/// Result of [`Workbench::run_extract`], mirroring both output panes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOutcome {
    /// The report, or the error text.
    pub values: Rendered,
    /// Highlighted raw view after a successful extraction; `None` leaves the view untouched.
    pub view: Option<Rendered>,
}

#[derive(Debug, Clone)]
pub struct Workbench {
    inputs: Inputs,
    highlighter: Highlighter,
}

impl Workbench {
    pub fn new(inputs: Inputs) -> Self {
        Self { inputs, highlighter: Highlighter::default() }
    }

    #[must_use]
    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Structured extraction. `Ok(None)` when there is no input to extract from.
    #[instrument(target = "pathlight::workbench", skip(self))]
    pub fn report(&self) -> Result<Option<Report>, ExtractError> {
        let parsed = parse_input(&self.inputs.raw)?;
        let Some(document) = parsed.document else {
            debug!(target = "pathlight::workbench", "empty input, nothing to extract");
            return Ok(None);
        };
        if is_blank_document(&document) {
            debug!(target = "pathlight::workbench", "document is null, false, zero or empty");
            return Err(ExtractError::MissingInput);
        }

        let variables = self.inputs.variables.trim();
        if variables.is_empty() {
            return Err(ExtractError::MissingVariableSpec);
        }
        let variables = split_variables(variables);

        let report = match list_path(&self.inputs.list_path) {
            Some(list) => collect_from_list(&document, list, &variables)?,
            None => collect_direct(&document, &variables)?,
        };
        Ok(Some(report))
    }

    /// Text report of the requested values; empty when there is no input.
    pub fn extract(&self) -> Result<String, ExtractError> {
        Ok(self.report()?.map(|r| r.to_string()).unwrap_or_default())
    }

    /// Show the input raw or pretty-printed, optionally with keys highlighted.
    #[instrument(target = "pathlight::workbench", skip(self))]
    pub fn display(&self, mode: DisplayMode) -> Result<Rendered, ExtractError> {
        let parsed = parse_input(&self.inputs.raw)?;
        let Some(document) = parsed.document else {
            return Ok(Rendered::Text(String::new()));
        };

        let text = if mode.prettify() { format!("{:#}", document) } else { parsed.raw };
        if !mode.highlight() {
            return Ok(Rendered::Text(text));
        }

        let variables = split_variables(&self.inputs.variables);
        let list = list_path(&self.inputs.list_path);
        Ok(Rendered::Markup(self.highlighter.highlight(&text, list, &variables)))
    }

    /// Display, with failures turned into error text.
    pub fn run_display(&self, mode: DisplayMode) -> Rendered {
        self.display(mode)
            .unwrap_or_else(|e| Rendered::Text(error_text(&e, false)))
    }

    /// Extract, then show the highlighted raw view. On failure only the values pane changes.
    pub fn run_extract(&self) -> ExtractOutcome {
        match self.extract() {
            Ok(values) => ExtractOutcome {
                values: Rendered::Text(values),
                view: Some(self.run_display(DisplayMode::HighlightRaw)),
            },
            Err(e) => ExtractOutcome { values: Rendered::Text(error_text(&e, true)), view: None },
        }
    }
}
