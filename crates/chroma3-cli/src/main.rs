//! chroma3 - inspect, convert and generate Color3 values
//!
//! Thin front end over `chroma3-core`: parses the textual color forms,
//! evaluates colormaps and reads/writes the 12-byte binary layout.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "chroma3")]
#[command(author, version, about = "Inspect, convert and generate Color3 values")]
#[command(long_about = "
Inspect, convert and generate three-channel float colors.

Examples:
  chroma3 parse 'Color3(1, 0.5, 0)'             # Canonical form, hex, HSV
  chroma3 parse 'Color3::fromARGB(0x336699)'
  chroma3 hsv 0.5 1 1                           # HSV -> RGB
  chroma3 map jet 0.3                           # Colormap lookup
  chroma3 map pastel 17 --count 4               # Four consecutive ids
  chroma3 encode 'Color3::orange()' -o c.bin --endian big
  chroma3 decode c.bin --endian big
  chroma3 palette lights.yaml                   # Load a YAML palette

Logging follows RUST_LOG; -v and -vv raise the default level.
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse textual colors and show them in every representation
    #[command(visible_alias = "p")]
    Parse(ParseArgs),

    /// Convert HSV (each in [0, 1]) to RGB
    Hsv(HsvArgs),

    /// Look up a colormap or palette
    #[command(visible_alias = "m")]
    Map(MapArgs),

    /// Write a color to a file in the 12-byte binary layout
    #[command(visible_alias = "enc")]
    Encode(EncodeArgs),

    /// Read colors from a file in the 12-byte binary layout
    #[command(visible_alias = "dec")]
    Decode(DecodeArgs),

    /// Load a YAML palette (name -> color) and print it
    Palette(PaletteArgs),
}

/// Arguments for the `parse` command.
#[derive(Args)]
struct ParseArgs {
    /// Color expressions, e.g. 'Color3(1, 0, 0)' or 'Color3::fromARGB(0xFF8000)'
    #[arg(required = true)]
    input: Vec<String>,

    /// Decimal places for printed channels
    #[arg(short, long)]
    precision: Option<usize>,
}

/// Arguments for the `hsv` command.
#[derive(Args)]
struct HsvArgs {
    /// Hue in [0, 1]
    #[arg(allow_negative_numbers = true)]
    h: f32,
    /// Saturation in [0, 1]
    #[arg(allow_negative_numbers = true)]
    s: f32,
    /// Value in [0, 1]
    #[arg(allow_negative_numbers = true)]
    v: f32,

    /// Multiply saturation of the result by this factor
    #[arg(long)]
    scale_saturation: Option<f32>,
}

/// Colormap selector for the `map` command.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum MapKind {
    /// Jet ramp, value in [0, 1]
    Jet,
    /// Saturated hue sweep, value in [0, 1]
    Rainbow,
    /// Neon gradient, value in [0, 1]
    Neon,
    /// ANSI 16-color palette, integer index
    Ansi,
    /// Hashed pastel colors, integer id
    Pastel,
}

/// Arguments for the `map` command.
#[derive(Args)]
struct MapArgs {
    /// Colormap to evaluate
    #[arg(value_enum)]
    kind: MapKind,

    /// Input value (float for ramps, integer for palettes)
    #[arg(allow_negative_numbers = true)]
    value: f64,

    /// Number of samples: ramps step evenly up to `value`, palettes take consecutive ids
    #[arg(short = 'n', long, default_value = "1")]
    count: u32,
}

/// Arguments for the `encode` command.
#[derive(Args)]
struct EncodeArgs {
    /// Color expressions, written back to back
    #[arg(required = true)]
    input: Vec<String>,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Byte order: little, big, native
    #[arg(long, default_value = "little")]
    endian: String,
}

/// Arguments for the `decode` command.
#[derive(Args)]
struct DecodeArgs {
    /// Input file
    input: PathBuf,

    /// Byte order: little, big, native
    #[arg(long, default_value = "little")]
    endian: String,
}

/// Arguments for the `palette` command.
#[derive(Args)]
struct PaletteArgs {
    /// YAML file mapping names to colors
    input: PathBuf,

    /// Print only this entry
    #[arg(long)]
    name: Option<String>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse(args) => commands::parse::run(args),
        Commands::Hsv(args) => commands::hsv::run(args),
        Commands::Map(args) => commands::map::run(args),
        Commands::Encode(args) => commands::binary::run_encode(args),
        Commands::Decode(args) => commands::binary::run_decode(args),
        Commands::Palette(args) => commands::palette::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_accepts_negative_components() {
        let cli = Cli::try_parse_from(["chroma3", "hsv", "0.5", "-0.1", "1"]).unwrap();
        match cli.command {
            Commands::Hsv(args) => {
                assert_eq!(args.h, 0.5);
                assert_eq!(args.s, -0.1);
                assert_eq!(args.v, 1.0);
            }
            _ => panic!("expected hsv command"),
        }
    }

    #[test]
    fn test_map_accepts_negative_value() {
        let cli = Cli::try_parse_from(["chroma3", "map", "jet", "-0.25", "-n", "3"]).unwrap();
        match cli.command {
            Commands::Map(args) => {
                assert_eq!(args.value, -0.25);
                assert_eq!(args.count, 3);
            }
            _ => panic!("expected map command"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["chroma3", "parse", "Color3::red()", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
