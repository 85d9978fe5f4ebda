/// CLI argument parsing and command handling.
use std::num::NonZeroUsize;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::color::ColorMode;
use crate::config::Config;
use crate::gradient::{self, GenerationError, GenerationRequest, GradientKind};

#[derive(Parser, Debug)]
#[command(
    name = "gradr",
    version,
    about = "gradr - A terminal-based random CSS gradient generator"
)]
pub struct Cli {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Milliseconds the "Copied!" marker stays visible
    #[arg(long = "copied-ms", global = true)]
    pub copied_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Number of gradients to generate
    #[arg(short = 'n', long = "count", value_parser = parse_count, global = true)]
    pub count: Option<NonZeroUsize>,
    /// linear, radial, conic, multi or repeating
    #[arg(short = 'k', long = "kind", value_parser = parse_kind, global = true)]
    pub kind: Option<GradientKind>,
    /// hsl or hex
    #[arg(short = 'm', long = "mode", value_parser = parse_mode, global = true)]
    pub mode: Option<ColorMode>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print gradients to stdout instead of opening the interface
    Generate {
        /// What to print for each gradient
        #[arg(
            short = 'f',
            long = "format",
            value_enum,
            default_value_t = OutputFormat::Declaration
        )]
        format: OutputFormat,
        /// Copy the declaration at this 0-based index to the clipboard
        #[arg(short = 'c', long = "copy")]
        copy: Option<usize>,
        /// Seed for reproducible output
        #[arg(short = 's', long = "seed")]
        seed: Option<u64>,
    },
}

/// Line format of `generate` output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `background: <expression>;`
    #[default]
    Declaration,
    /// The bare gradient function call
    Expression,
}

/// Execute a CLI command.
pub fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Generate { format, copy, seed } => {
            let mut clipboard = SystemClipboard::default();
            let output = handle_generate(config, format, copy, seed, &mut clipboard)?;
            for line in output {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn handle_generate(
    config: &Config,
    format: OutputFormat,
    copy: Option<usize>,
    seed: Option<u64>,
    clipboard: &mut dyn ClipboardSink,
) -> Result<Vec<String>> {
    let request = config.request();
    let set = match seed {
        Some(seed) => gradient::build_gradients(&request, &mut StdRng::seed_from_u64(seed)),
        None => gradient::build_gradients(&request, &mut rand::rng()),
    };
    tracing::info!(
        count = set.len(),
        kind = %request.kind,
        mode = request.mode.label(),
        "generated gradients"
    );

    if let Some(index) = copy {
        let descriptor = set.get(index).ok_or(GenerationError::IndexOutOfRange {
            index,
            len: set.len(),
        })?;
        match clipboard.write_text(&descriptor.declaration) {
            Ok(()) => eprintln!("Copied gradient {index} to clipboard."),
            Err(err) => {
                tracing::warn!(error = %err, index, "clipboard write failed");
                eprintln!("Could not copy to clipboard: {err:#}");
            }
        }
    }

    Ok(set
        .into_iter()
        .map(|descriptor| match format {
            OutputFormat::Declaration => descriptor.declaration,
            OutputFormat::Expression => descriptor.expression,
        })
        .collect())
}

fn parse_count(value: &str) -> Result<NonZeroUsize, String> {
    let count: i64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    GenerationRequest::new(count, GradientKind::default(), ColorMode::default())
        .map(|request| request.count)
        .map_err(|err| err.to_string())
}

fn parse_kind(value: &str) -> Result<GradientKind, String> {
    Ok(GradientKind::parse_lenient(value))
}

fn parse_mode(value: &str) -> Result<ColorMode, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "hsl" => Ok(ColorMode::Hsl),
        "hex" | "rgb" => Ok(ColorMode::Hex),
        other => Err(format!("unknown color mode '{other}' (expected hsl or hex)")),
    }
}
