pub mod config;
pub mod error;
pub mod extract;
pub mod highlight;
pub mod input;
pub mod path;
pub mod terminal;
pub mod workbench;

// Convenient re-exports
pub use error::{ErrorKind, ExtractError};
pub use extract::{extract_direct, extract_from_list, Entry, Report};
pub use highlight::{highlight, strip_markers, Highlighter};
pub use path::{normalize, DotPath};
pub use workbench::{DisplayMode, Inputs, Rendered, Workbench};
