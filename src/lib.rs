mod base64;
mod config;
mod encode;
mod error;
mod format;
mod loader;
mod mapping;

pub use config::{GlyphRegistry, GlyphSetConfig};
pub use error::{ConfigError, DecodeError, find_closest_set};
pub use format::format_size;
pub use mapping::{GlyphMap, PAD, REQUIRED_GLYPHS, SYMBOLS};

pub use encode::{decode, encode};
pub use loader::generate_loader;
