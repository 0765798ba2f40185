pub mod output;

/// Inputs shown when the demo is run without arguments
pub const EXAMPLE_INPUTS: &[&str] = &[
    "convert this-string_example",
    "SCREEN_NAME",
    "XMLHttpRequest",
    "  multiple   separators__and--cases  ",
    "HelloWorld",
    "  multiple  - separators__",
    "version2Beta",
];
