//! String utilities.
//!
//! Whitespace and non-printable cleanup, and `key=value` list parsing.

mod clean;
mod meta;

pub use clean::{clean_unknown_chars, clean_white_space, is_printable_ascii};
pub use meta::parse_meta_content;
