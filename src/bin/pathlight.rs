use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pathlight::config::{HighlightConfig, TerminalConfig};
use pathlight::terminal::write_rendered;
use pathlight::workbench::error_text;
use pathlight::{DisplayMode, Highlighter, Inputs, Rendered, Workbench};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::exit;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Extract,
    Raw,
    Pretty,
    HighlightRaw,
    HighlightPretty,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Extract => write!(f, "extract"),
            Mode::Raw => write!(f, "raw"),
            Mode::Pretty => write!(f, "pretty"),
            Mode::HighlightRaw => write!(f, "highlight-raw"),
            Mode::HighlightPretty => write!(f, "highlight-pretty"),
        }
    }
}

impl Mode {
    fn display_mode(self) -> Option<DisplayMode> {
        match self {
            Mode::Extract => None,
            Mode::Raw => Some(DisplayMode::Raw),
            Mode::Pretty => Some(DisplayMode::Pretty),
            Mode::HighlightRaw => Some(DisplayMode::HighlightRaw),
            Mode::HighlightPretty => Some(DisplayMode::HighlightPretty),
        }
    }
}

#[derive(Parser)]
#[command(author, version, about = "Extract values and highlight keys in JSON documents", long_about = None)]
#[command(after_help = "ENVIRONMENT VARIABLES:
    PATHLIGHT_HIGHLIGHT_CLASS  CSS class of highlight markers [default: highlight]
    PATHLIGHT_HIGHLIGHT_COLOR  Terminal color used with --color [default: yellow]
    RUST_LOG                   Log filter, e.g. pathlight=debug

EXAMPLES:
    pathlight order.json --vars params.id,params.affiliation
    pathlight order.json --list data.items --vars item.name,item.price
    pathlight order.json --vars params.id --mode highlight-pretty --color
    cat order.json | pathlight --vars data.id --json")]
struct Args {
    /// JSON file to read; stdin when omitted or `-`
    file: Option<PathBuf>,

    /// Dot-path to a list whose items are extracted one by one
    #[arg(short, long, default_value = "")]
    list: String,

    /// Comma-separated variable paths
    #[arg(short = 'v', long, default_value = "")]
    vars: String,

    /// What to produce
    #[arg(short, long, value_enum, default_value_t = Mode::Extract)]
    mode: Mode,

    /// Print the extraction report as JSON
    #[arg(long)]
    json: bool,

    /// Render highlight markup with terminal colors instead of HTML
    #[arg(long)]
    color: bool,

    /// After extracting, also print the highlighted raw input
    #[arg(long)]
    show_highlight: bool,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit(2);
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn emit(out: &mut impl Write, rendered: &Rendered, color: bool, terminal: &TerminalConfig) -> Result<()> {
    if color {
        write_rendered(out, rendered, terminal)?;
    } else {
        out.write_all(rendered.as_str().as_bytes())?;
    }
    if !rendered.as_str().is_empty() && !rendered.as_str().ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

/// Returns the process exit code.
fn run(args: &Args) -> Result<i32> {
    let raw = read_input(args.file.as_deref())?;
    let workbench = Workbench::new(Inputs {
        raw,
        list_path: args.list.clone(),
        variables: args.vars.clone(),
    })
    .with_highlighter(Highlighter::new(&HighlightConfig::from_env()));
    let terminal = TerminalConfig::from_env();

    tracing::debug!(target = "pathlight::cli", mode = %args.mode, "running");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(mode) = args.mode.display_mode() else {
        if args.json {
            return match workbench.report() {
                Ok(report) => {
                    serde_json::to_writer_pretty(&mut out, &report)?;
                    writeln!(out)?;
                    Ok(0)
                }
                Err(e) => {
                    eprintln!("{}", error_text(&e, true));
                    Ok(1)
                }
            };
        }
        return match workbench.extract() {
            Ok(values) => {
                out.write_all(values.as_bytes())?;
                if args.show_highlight {
                    let view = workbench.run_display(DisplayMode::HighlightRaw);
                    emit(&mut out, &view, args.color, &terminal)?;
                }
                Ok(0)
            }
            Err(e) => {
                eprintln!("{}", error_text(&e, true));
                Ok(1)
            }
        };
    };

    match workbench.display(mode) {
        Ok(rendered) => {
            emit(&mut out, &rendered, args.color, &terminal)?;
            Ok(0)
        }
        Err(e) => {
            eprintln!("{}", error_text(&e, false));
            Ok(1)
        }
    }
}
