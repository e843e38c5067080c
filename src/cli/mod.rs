mod args;
mod commands;

use clap::{Parser, Subcommand};
use glyphscript::GlyphRegistry;

#[derive(Parser)]
#[command(name = "glyphscript")]
#[command(version)]
#[command(
    about = "Obfuscate scripts as pictographic glyph payloads and generate self-decoding PowerShell loaders",
    long_about = None
)]
struct Cli {
    /// Suppress size summaries on stderr
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a script into a glyph payload
    Encode(args::EncodeArgs),
    /// Decode a glyph payload back into the original script
    Decode(args::DecodeArgs),
    /// Encode a script and wrap it in a self-decoding PowerShell loader
    Loader(args::LoaderArgs),
    /// List registered glyph sets
    Sets,
    /// Print the symbol-to-glyph table for a set
    Map(args::MapArgs),
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let registry = GlyphRegistry::load_with_overrides()?;

    match cli.command {
        Command::Encode(args) => commands::encode(args, cli.quiet, &registry),
        Command::Decode(args) => commands::decode(args, cli.quiet, &registry),
        Command::Loader(args) => commands::loader(args, cli.quiet, &registry),
        Command::Sets => commands::sets(&registry),
        Command::Map(args) => commands::map(args, &registry),
    }
}
