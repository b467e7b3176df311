use std::env;

use crossterm::style::Color;

use crate::highlight::DEFAULT_CLASS;

/// Trait for settings that are read from a single environment variable.
pub trait VarFromEnv {
    /// The environment variable holding this setting
    const VAR_NAME: &'static str;

    /// Look the variable up, loading a `.env` file first if one exists
    fn find_var() -> Option<String> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        env::var(Self::VAR_NAME)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Marker settings for highlight markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightConfig {
    /// CSS class on the marker span. Restricted to `[A-Za-z0-9_- ]`.
    pub class_name: String,
}

impl VarFromEnv for HighlightConfig {
    const VAR_NAME: &'static str = "PATHLIGHT_HIGHLIGHT_CLASS";
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self { class_name: DEFAULT_CLASS.to_string() }
    }
}

impl HighlightConfig {
    #[must_use]
    pub fn new(class_name: &str) -> Self {
        let class_name: String = class_name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' '))
            .collect();
        if class_name.trim().is_empty() {
            return Self::default();
        }
        Self { class_name }
    }

    /// Default settings, overridden by `PATHLIGHT_HIGHLIGHT_CLASS` when set.
    pub fn from_env() -> Self {
        Self::find_var().map(|v| Self::new(&v)).unwrap_or_default()
    }
}

/// Styling for highlighted keys when markup is rendered to a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalConfig {
    pub color: Color,
    pub bold: bool,
}

impl VarFromEnv for TerminalConfig {
    const VAR_NAME: &'static str = "PATHLIGHT_HIGHLIGHT_COLOR";
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self { color: Color::Yellow, bold: true }
    }
}

impl TerminalConfig {
    /// Default settings, with the color taken from `PATHLIGHT_HIGHLIGHT_COLOR`
    /// when it names a known color (`red`, `dark_green`, ...).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(name) = Self::find_var() {
            match Color::try_from(name.as_str()) {
                Ok(color) => config.color = color,
                Err(()) => tracing::warn!(target = "pathlight::config", color = %name, "unknown color, using default"),
            }
        }
        config
    }
}
