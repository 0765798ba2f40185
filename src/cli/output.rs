use crate::convert::CaseStyle;
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One input rendered in one style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub input: String,
    pub style: CaseStyle,
    pub output: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    conversions: Vec<Conversion>,
}

pub fn print_conversions(
    conversions: &[Conversion],
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", render_text(conversions, colored_output));
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", render_json(conversions)?);
            Ok(())
        }
    }
}

pub fn render_json(conversions: &[Conversion]) -> Result<String> {
    let output = JsonOutput {
        conversions: conversions.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Groups consecutive conversions of the same input under one heading
pub fn render_text(conversions: &[Conversion], colored_output: bool) -> String {
    let mut out = String::new();
    let mut current_input: Option<&str> = None;

    for conversion in conversions {
        if current_input != Some(conversion.input.as_str()) {
            current_input = Some(conversion.input.as_str());
            let heading = format!("{:?}", conversion.input);
            if colored_output {
                out.push_str(&format!("\n{}\n", heading.bold().underline()));
            } else {
                out.push_str(&format!("\n{}\n", heading));
            }
        }

        let style = format!("{:<5}", conversion.style.to_string());
        let result = if conversion.output.is_empty() {
            "(empty)".to_string()
        } else {
            conversion.output.clone()
        };

        if colored_output {
            let result = if conversion.output.is_empty() {
                result.dimmed().to_string()
            } else {
                result.green().to_string()
            };
            out.push_str(&format!("  {} {} {}\n", style.blue().bold(), "→".dimmed(), result));
        } else {
            out.push_str(&format!("  {} → {}\n", style, result));
        }
    }

    out
}
