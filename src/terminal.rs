//! Render highlight markup to a terminal: marked keys get the configured
//! color, everything else is printed as plain unescaped text.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};

use crate::config::TerminalConfig;
use crate::highlight::segments;
use crate::workbench::Rendered;

/// Write `markup` to `out`, styling every run that sits inside a marker.
pub fn write_markup<W: Write>(out: &mut W, markup: &str, config: &TerminalConfig) -> io::Result<()> {
    for segment in segments(markup) {
        if segment.depth == 0 {
            queue!(out, Print(segment.text))?;
            continue;
        }
        queue!(out, SetForegroundColor(config.color))?;
        if config.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(out, Print(segment.text), SetAttribute(Attribute::Reset), ResetColor)?;
    }
    out.flush()
}

/// Write any rendered output: text verbatim, markup styled.
pub fn write_rendered<W: Write>(out: &mut W, rendered: &Rendered, config: &TerminalConfig) -> io::Result<()> {
    match rendered {
        Rendered::Text(text) => {
            out.write_all(text.as_bytes())?;
            out.flush()
        }
        Rendered::Markup(markup) => write_markup(out, markup, config),
    }
}
