//! Various configuration options to control parsing

mod parse_options;

pub use parse_options::{ParseOptions, ParsingMode, VersionPreference};
