use clap::Args;
use std::path::PathBuf;

/// Arguments for encoding a script
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input script (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Glyph set to encode with
    #[arg(short, long, default_value = "default")]
    pub set: String,

    /// Output file, conventionally .txt (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding a payload
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input payload (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Glyph set the payload was encoded with
    #[arg(short, long, default_value = "default")]
    pub set: String,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for generating a loader
#[derive(Args, Debug)]
pub struct LoaderArgs {
    /// Input script (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Glyph set to encode with
    #[arg(short, long, default_value = "default")]
    pub set: String,

    /// Output file, conventionally .ps1 (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for printing a mapping table
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Glyph set to display
    #[arg(short, long, default_value = "default")]
    pub set: String,
}
