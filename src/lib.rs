//! Identifier case conversion.
//!
//! Pure functions that split mixed-convention identifiers into words and
//! rebuild them as camelCase, kebab-case or dot.case. Invalid input never
//! fails; it converts to an empty string.

pub mod cli;
pub mod config;
pub mod convert;
pub mod power;
pub mod value;

pub use config::Config;
pub use convert::{
    to_camel_case, to_camel_case_with, to_dot_case, to_kebab_case, CamelVariant, CaseStyle,
};
pub use power::{power_number, power_sum, PowerError};
pub use value::Value;

/// Byte range of one word token inside the tokenized input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}
