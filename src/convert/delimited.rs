use super::tokenizer::Tokenizer;
use crate::Value;

/// Convert to kebab-case: lowercase words joined by `-`.
///
/// Only strings are converted; any other value gives an empty string.
pub fn to_kebab_case<'a>(value: impl Into<Value<'a>>) -> String {
    let value = value.into();
    match value.as_str() {
        Some(text) => join_lowercase(text, Tokenizer::KEBAB, '-'),
        None => {
            log::trace!("kebab-case: rejecting non-string input {:?}", value);
            String::new()
        }
    }
}

/// Convert to dot.case: lowercase words joined by `.`.
///
/// Null and undefined give an empty string, everything else is converted
/// through its string form (`42` -> `"42"`, `[1, 2]` -> `"1.2"`).
pub fn to_dot_case<'a>(value: impl Into<Value<'a>>) -> String {
    let value = value.into();
    match value.coerce() {
        Some(text) => join_lowercase(&text, Tokenizer::DOT, '.'),
        None => String::new(),
    }
}

fn join_lowercase(text: &str, tokenizer: Tokenizer, separator: char) -> String {
    let tokens = tokenizer.tokenize(text);
    log::trace!("{:?}-joined tokens for {:?}: {:?}", separator, text, tokens);

    let mut out = String::with_capacity(text.len());
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(&token.to_ascii_lowercase());
    }
    out
}
