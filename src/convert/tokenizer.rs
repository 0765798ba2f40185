use crate::TokenSpan;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // lowercase or digit followed by uppercase: fooBar -> foo|Bar
    static ref CASE_BOUNDARY: Regex = Regex::new(r"[a-z0-9][A-Z]").unwrap();
    // acronym followed by a word: XMLHttp -> XML|Http, ABC1 -> AB|C1
    static ref ACRONYM_LOWER_OR_DIGIT: Regex = Regex::new(r"([A-Z]+)([A-Z][a-z0-9]+)").unwrap();
    // acronym followed by a lowercase word only: ABC1 stays whole
    static ref ACRONYM_LOWER: Regex = Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap();
    static ref WORD_RUN: Regex = Regex::new(r"[A-Za-z0-9]+").unwrap();
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[\s_-]+").unwrap();
}

/// How an uppercase run is split when a new word starts inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcronymRule {
    Off,
    /// Split before the last capital when a lowercase letter or digit follows
    LowerOrDigit,
    /// Split before the last capital only when a lowercase letter follows
    LowerOnly,
}

/// Boundary rules applied when splitting an identifier into words.
///
/// Runs of characters other than ASCII letters and digits always separate
/// words and are dropped. `split_case` adds a boundary between a lowercase
/// letter or digit and a following capital, `acronym` controls splits inside
/// runs of capitals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    pub split_case: bool,
    pub acronym: AcronymRule,
}

impl Tokenizer {
    /// Alphanumeric runs only, no case boundaries
    pub const WORDS: Tokenizer = Tokenizer {
        split_case: false,
        acronym: AcronymRule::Off,
    };

    pub const KEBAB: Tokenizer = Tokenizer {
        split_case: true,
        acronym: AcronymRule::LowerOrDigit,
    };

    pub const DOT: Tokenizer = Tokenizer {
        split_case: true,
        acronym: AcronymRule::LowerOnly,
    };

    /// Split `input` into word tokens borrowed from it, left to right
    pub fn tokenize<'a>(&self, input: &'a str) -> Vec<&'a str> {
        self.spans(input)
            .into_iter()
            .map(|span| &input[span.start..span.end])
            .collect()
    }

    /// Byte ranges of the word tokens in `input`; never empty ranges
    pub fn spans(&self, input: &str) -> Vec<TokenSpan> {
        let boundaries = self.boundaries(input);
        let mut spans = Vec::new();
        let mut next = 0;

        for run in WORD_RUN.find_iter(input) {
            let mut start = run.start();

            while next < boundaries.len() && boundaries[next] <= run.start() {
                next += 1;
            }
            while next < boundaries.len() && boundaries[next] < run.end() {
                spans.push(TokenSpan {
                    start,
                    end: boundaries[next],
                });
                start = boundaries[next];
                next += 1;
            }

            spans.push(TokenSpan {
                start,
                end: run.end(),
            });
        }

        spans
    }

    /// Sorted byte offsets where a word starts inside an alphanumeric run
    fn boundaries(&self, input: &str) -> Vec<usize> {
        let mut boundaries = Vec::new();

        if self.split_case {
            // the capital is always the second byte of the match
            boundaries.extend(CASE_BOUNDARY.find_iter(input).map(|m| m.start() + 1));
        }

        let acronym = match self.acronym {
            AcronymRule::Off => None,
            AcronymRule::LowerOrDigit => Some(&*ACRONYM_LOWER_OR_DIGIT),
            AcronymRule::LowerOnly => Some(&*ACRONYM_LOWER),
        };
        if let Some(pattern) = acronym {
            boundaries.extend(
                pattern
                    .captures_iter(input)
                    .filter_map(|cap| cap.get(2).map(|word| word.start())),
            );
        }

        boundaries.sort_unstable();
        boundaries.dedup();
        boundaries
    }
}

/// Split on runs of whitespace, hyphens and underscores only.
///
/// Unlike [`Tokenizer::tokenize`] this keeps every other character, including
/// punctuation, inside the tokens and ignores case boundaries.
pub fn split_separators(input: &str) -> Vec<&str> {
    SEPARATOR_RUN
        .split(input)
        .filter(|part| !part.is_empty())
        .collect()
}
