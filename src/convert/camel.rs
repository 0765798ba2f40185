use super::tokenizer::{split_separators, Tokenizer};
use crate::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Word splitting used before rebuilding a camelCase identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CamelVariant {
    /// Split case boundaries, acronyms and every non-alphanumeric run.
    /// Existing camelCase, PascalCase and SCREAMING_CASE input is rebuilt
    /// canonically. Re-applying it is stable except when the input ends in
    /// consecutive one-letter words (`a b c` -> `aBC` -> `aBc`).
    #[default]
    Decompose,
    /// Split only on whitespace, hyphens and underscores. Other characters
    /// are kept and `fooBar` collapses to `foobar`.
    Separators,
}

impl FromStr for CamelVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "decompose" => Ok(CamelVariant::Decompose),
            "separators" => Ok(CamelVariant::Separators),
            _ => Err(format!("Unknown camelCase variant: {}", s)),
        }
    }
}

impl fmt::Display for CamelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CamelVariant::Decompose => write!(f, "decompose"),
            CamelVariant::Separators => write!(f, "separators"),
        }
    }
}

/// Convert to camelCase using [`CamelVariant::Decompose`].
///
/// Anything that is not a string converts to an empty string.
pub fn to_camel_case<'a>(value: impl Into<Value<'a>>) -> String {
    to_camel_case_with(value, CamelVariant::Decompose)
}

pub fn to_camel_case_with<'a>(value: impl Into<Value<'a>>, variant: CamelVariant) -> String {
    let value = value.into();
    let Some(text) = value.as_str() else {
        log::trace!("camelCase: rejecting non-string input {:?}", value);
        return String::new();
    };

    let tokens = match variant {
        CamelVariant::Decompose => Tokenizer::KEBAB.tokenize(text),
        CamelVariant::Separators => split_separators(text),
    };
    log::trace!("camelCase ({}) tokens for {:?}: {:?}", variant, text, tokens);

    join_camel(&tokens)
}

fn join_camel(tokens: &[&str]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.len()).sum());

    for (i, token) in tokens.iter().enumerate() {
        if i == 0 {
            out.push_str(&token.to_ascii_lowercase());
            continue;
        }

        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_words() {
        assert_eq!(
            to_camel_case("convert this-string_example"),
            "convertThisStringExample"
        );
        assert_eq!(to_camel_case("first name"), "firstName");
        assert_eq!(to_camel_case("user_id"), "userId");
        assert_eq!(to_camel_case("mobile-number"), "mobileNumber");
    }

    #[test]
    fn test_decompose_rebuilds_existing_case() {
        assert_eq!(to_camel_case("SCREEN_NAME"), "screenName");
        assert_eq!(to_camel_case("firstName"), "firstName");
        assert_eq!(to_camel_case("FirstName"), "firstName");
        assert_eq!(to_camel_case("XMLHttpRequest"), "xmlHttpRequest");
        assert_eq!(to_camel_case("user_idNumber"), "userIdNumber");
    }

    #[test]
    fn test_separators_variant() {
        let v = CamelVariant::Separators;
        assert_eq!(
            to_camel_case_with("convert this-string_example", v),
            "convertThisStringExample"
        );
        assert_eq!(to_camel_case_with("SCREEN_NAME", v), "screenName");
        assert_eq!(to_camel_case_with("fooBar", v), "foobar");
        assert_eq!(to_camel_case_with("hello.world again", v), "hello.worldAgain");
    }

    #[test]
    fn test_non_string_input() {
        assert_eq!(to_camel_case(None::<&str>), "");
        assert_eq!(to_camel_case(Value::Undefined), "");
        assert_eq!(to_camel_case(42), "");
        assert_eq!(to_camel_case_with(true, CamelVariant::Separators), "");
    }

    #[test]
    fn test_only_separators() {
        assert_eq!(to_camel_case(" -_ "), "");
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_camel_case_with("__", CamelVariant::Separators), "");
    }

    #[test]
    fn test_leading_digits() {
        assert_eq!(to_camel_case("2fa code"), "2faCode");
        assert_eq!(to_camel_case("step 2"), "step2");
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("Decompose".parse::<CamelVariant>(), Ok(CamelVariant::Decompose));
        assert_eq!("separators".parse::<CamelVariant>(), Ok(CamelVariant::Separators));
        assert!("snake".parse::<CamelVariant>().is_err());
    }
}
