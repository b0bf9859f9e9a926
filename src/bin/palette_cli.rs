//! Palette Command Line Interface
//!
//! # Usage
//!
//! ```bash
//! # Generate a palette as JSON
//! palette_cli --style "Calm clinical" --industry "Medical / Healthcare"
//!
//! # Keep slot 0 and slot 3, print CSS variables
//! palette_cli --style Luxury --lock 0=#0B0C10:Ink --lock 3=C9A227 --format css
//! ```

use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use tona_palette::palette::export;
use tona_palette::{LockedColor, Mode, PaletteGenerator, PaletteInput};

#[derive(Parser)]
#[command(name = "palette_cli")]
#[command(version = "0.1.0")]
#[command(about = "Generate a 5-color palette from a style and/or industry prompt")]
struct Cli {
    /// Visual style, e.g. "Modern minimal"
    #[arg(long, short, default_value = "")]
    style: String,

    /// Industry context, e.g. "E-Commerce"
    #[arg(long, short, default_value = "")]
    industry: String,

    /// Palette mode
    #[arg(long, short, default_value = "light", value_enum)]
    mode: CliMode,

    /// Lock a slot: INDEX=HEX or INDEX=HEX:NAME (repeatable)
    #[arg(long = "lock", short = 'l', value_parser = parse_lock)]
    locks: Vec<LockedColor>,

    /// Output format
    #[arg(long, short = 'o', default_value = "json", value_enum)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliMode {
    Light,
    Dark,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Light => Mode::Light,
            CliMode::Dark => Mode::Dark,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Css,
    Hex,
}

fn parse_lock(arg: &str) -> Result<LockedColor, String> {
    let (index, rest) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=HEX[:NAME], got '{}'", arg))?;
    let index: usize = index
        .trim()
        .parse()
        .map_err(|_| format!("invalid slot index '{}'", index))?;
    let (hex, name) = match rest.split_once(':') {
        Some((hex, name)) => (hex, Some(name)),
        None => (rest, None),
    };
    LockedColor::new(index, hex, name)
        .ok_or_else(|| format!("invalid lock '{}': index must be 0-4, hex must be #RRGGBB", arg))
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let generator = match PaletteGenerator::from_env() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let input = PaletteInput::new(cli.style, cli.industry)
        .with_mode(cli.mode.into())
        .with_locks(&cli.locks);

    let palette = match generator.generate(&input).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error [{}]: {}", e.kind(), e);
            return ExitCode::FAILURE;
        }
    };

    match cli.format {
        OutputFormat::Json => match serde_json::to_string_pretty(&palette) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        OutputFormat::Css => println!("{}", export::css_variables(&palette)),
        OutputFormat::Hex => println!("{}", export::hex_list(&palette)),
    }

    ExitCode::SUCCESS
}
