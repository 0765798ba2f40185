pub mod camel;
pub mod delimited;
pub mod tokenizer;

pub use camel::{to_camel_case, to_camel_case_with, CamelVariant};
pub use delimited::{to_dot_case, to_kebab_case};
pub use tokenizer::{split_separators, AcronymRule, Tokenizer};

use crate::{Config, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Camel,
    Kebab,
    Dot,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 3] = [CaseStyle::Camel, CaseStyle::Kebab, CaseStyle::Dot];
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            "dot" | "dot.case" => Ok(CaseStyle::Dot),
            _ => Err(format!("Unknown case style: {}", s)),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::Camel => write!(f, "camel"),
            CaseStyle::Kebab => write!(f, "kebab"),
            CaseStyle::Dot => write!(f, "dot"),
        }
    }
}

/// Convert `value` to `style`, taking the camelCase variant from `config`
pub fn convert<'a>(value: impl Into<Value<'a>>, style: CaseStyle, config: &Config) -> String {
    match style {
        CaseStyle::Camel => to_camel_case_with(value, config.camel_variant),
        CaseStyle::Kebab => to_kebab_case(value),
        CaseStyle::Dot => to_dot_case(value),
    }
}
