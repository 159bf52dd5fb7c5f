//! Key/value map files for template data.
//!
//! A map file is plain text with one entry per line. Each line is split on a
//! separator (the middle dot `·` by default); the first part is the key and
//! the rest is the value:
//!
//! ```text
//! name·Ada
//! tags·red·green·blue
//! ```
//!
//! A line with exactly one separator yields a scalar, a line with more than
//! one yields a list. Lines that are too short or contain no separator are
//! ignored, so a map file never fails on its content, only on I/O.
//!
//! # Example
//!
//! ```rust
//! use stamp_map::{parse_str, Value, DEFAULT_SEPARATOR};
//!
//! let data = parse_str("name·Ada\ntags·red·green·blue\n", DEFAULT_SEPARATOR).unwrap();
//!
//! assert_eq!(data.get("name"), Some(&Value::Scalar("Ada".into())));
//! assert_eq!(
//!     data.get("tags").and_then(Value::as_list),
//!     Some(&["red".to_string(), "green".to_string(), "blue".to_string()][..])
//! );
//! ```
//!
//! # Arity Decides Shape
//!
//! There is no list syntax: the shape comes from counting separators. As a
//! consequence a one-element list cannot be written, and a scalar can never
//! contain the separator itself. Pick a different separator with
//! [`MapBuilder::new`] when your values collide with the default.

mod error;
mod parser;
mod value;

pub use error::MapError;
pub use parser::{parse_file, parse_line, parse_str, MapBuilder};
pub use value::{DataMapping, Value};

/// The default separator: MIDDLE DOT (U+00B7).
pub const DEFAULT_SEPARATOR: &str = "\u{00B7}";
