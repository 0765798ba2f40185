use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use identcase::cli::output::{print_conversions, Conversion, OutputFormat};
use identcase::cli::EXAMPLE_INPUTS;
use identcase::convert::{convert, CamelVariant, CaseStyle};
use identcase::{Config, Value};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "identcase")]
#[command(version, about = "Show identifiers converted to camelCase, kebab-case and dot.case", long_about = None)]
struct Cli {
    /// Identifiers to convert (built-in examples when empty)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Case style to show (camel, kebab, dot); repeat for several
    #[arg(short, long)]
    style: Vec<CaseStyle>,

    /// camelCase word splitting (decompose, separators)
    #[arg(long)]
    camel_variant: Option<CamelVariant>,

    /// Parse each input as a JSON value instead of a plain string
    #[arg(long)]
    json: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(buf, "[{}] {}", record.level(), record.args())
    });
    let _ = builder.try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "identcase", &mut io::stdout());
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(variant) = cli.camel_variant {
        config.camel_variant = variant;
    }
    log::info!("camelCase variant: {}", config.camel_variant);

    let styles: Vec<CaseStyle> = if !cli.style.is_empty() {
        cli.style.clone()
    } else if let Some(style) = config.default_style {
        vec![style]
    } else {
        CaseStyle::ALL.to_vec()
    };

    let inputs: Vec<String> = if cli.inputs.is_empty() {
        EXAMPLE_INPUTS.iter().map(|s| s.to_string()).collect()
    } else {
        cli.inputs.clone()
    };

    let mut conversions = Vec::with_capacity(inputs.len() * styles.len());
    for input in &inputs {
        let parsed = if cli.json {
            Some(
                serde_json::from_str::<serde_json::Value>(input)
                    .with_context(|| format!("Invalid JSON input: {}", input))?,
            )
        } else {
            None
        };

        for &style in &styles {
            let value = match &parsed {
                Some(json) => Value::from(json),
                None => Value::from(input),
            };
            conversions.push(Conversion {
                input: input.clone(),
                style,
                output: convert(value, style, &config),
            });
        }
    }

    print_conversions(&conversions, config.color && !cli.no_color, cli.format)
}
