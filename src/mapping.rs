use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::GlyphRegistry;
use crate::error::ConfigError;

/// The 64 symbols of standard base64, in encoding order.
pub const SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character appended by the standard encoding.
pub const PAD: char = '=';

/// Glyphs a set must supply: one per symbol plus one for the pad.
pub const REQUIRED_GLYPHS: usize = 65;

static BUILTIN: LazyLock<GlyphMap> = LazyLock::new(|| {
    // The embedded registry and its default set are fixed at compile time and
    // covered by tests, so construction cannot fail at run time.
    let registry = GlyphRegistry::load_default().expect("embedded glyphs.toml is valid");
    let set = registry
        .get_set("default")
        .expect("embedded registry has a default set");
    let glyphs: Vec<char> = set.glyphs.chars().collect();
    GlyphMap::new("default", &glyphs).expect("embedded default glyph set is valid")
});

/// The one-to-one mapping from base64 symbols to pictographic glyphs.
///
/// The i-th symbol of [`SYMBOLS`] gets the i-th glyph of the set; the 65th
/// glyph is assigned to the `=` pad so that padded payloads survive the
/// substitution. Built once, immutable afterwards.
#[derive(Debug, Clone)]
pub struct GlyphMap {
    name: String,
    glyphs: Vec<char>,
    symbol_to_glyph: HashMap<char, char>,
    glyph_to_symbol: HashMap<char, char>,
}

impl GlyphMap {
    /// Builds a mapping from a glyph set.
    ///
    /// Only the first [`REQUIRED_GLYPHS`] glyphs are consumed; any surplus is
    /// ignored. Every consumed glyph must be a single code point occupying two
    /// UTF-16 code units, because the generated loader walks its glyph table
    /// with a fixed two-unit stride. This also keeps glyphs out of ASCII, so
    /// they never need escaping inside the loader's string literals.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the set has fewer than [`REQUIRED_GLYPHS`]
    /// glyphs, contains a duplicate among the consumed glyphs, or contains a
    /// consumed glyph narrower than two UTF-16 units.
    pub fn new(name: &str, glyphs: &[char]) -> Result<Self, ConfigError> {
        if glyphs.len() < REQUIRED_GLYPHS {
            return Err(ConfigError::GlyphSetTooSmall {
                name: name.to_string(),
                required: REQUIRED_GLYPHS,
                actual: glyphs.len(),
            });
        }

        let consumed = &glyphs[..REQUIRED_GLYPHS];
        for &glyph in consumed {
            if glyph.len_utf16() != 2 {
                return Err(ConfigError::NarrowGlyph {
                    name: name.to_string(),
                    glyph,
                });
            }
        }

        let mut symbol_to_glyph = HashMap::new();
        let mut glyph_to_symbol = HashMap::new();
        for (symbol, &glyph) in SYMBOLS.chars().chain(std::iter::once(PAD)).zip(consumed) {
            if glyph_to_symbol.insert(glyph, symbol).is_some() {
                return Err(ConfigError::DuplicateGlyph {
                    name: name.to_string(),
                    glyph,
                });
            }
            symbol_to_glyph.insert(symbol, glyph);
        }

        Ok(GlyphMap {
            name: name.to_string(),
            glyphs: consumed.to_vec(),
            symbol_to_glyph,
            glyph_to_symbol,
        })
    }

    /// Builds the mapping for a named set from a registry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SetNotFound`] (with a closest-name suggestion)
    /// for an unknown set, or the underlying construction error for an
    /// invalid one.
    pub fn from_registry(registry: &GlyphRegistry, name: &str) -> Result<Self, ConfigError> {
        let set = registry.get_set(name).ok_or_else(|| ConfigError::SetNotFound {
            name: name.to_string(),
            suggestion: crate::error::find_closest_set(name, &registry.set_names()),
        })?;
        let glyphs: Vec<char> = set.glyphs.chars().collect();
        Self::new(name, &glyphs)
    }

    /// The built-in default mapping, constructed once per process.
    pub fn builtin() -> &'static GlyphMap {
        &BUILTIN
    }

    /// Name of the glyph set this mapping was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Glyph assigned to a base64 symbol (or the pad character).
    pub fn glyph_for(&self, symbol: char) -> Option<char> {
        self.symbol_to_glyph.get(&symbol).copied()
    }

    /// Symbol recovered from a glyph.
    pub fn symbol_for(&self, glyph: char) -> Option<char> {
        self.glyph_to_symbol.get(&glyph).copied()
    }

    /// The consumed glyphs concatenated in symbol order, pad glyph last.
    ///
    /// This is the `$k` literal of the generated loader.
    pub fn glyph_table(&self) -> String {
        self.glyphs.iter().collect()
    }

    /// The symbols in mapping order: the base64 alphabet followed by `=`.
    ///
    /// This is the `$v` literal of the generated loader.
    pub fn symbol_table(&self) -> String {
        let mut table = String::with_capacity(SYMBOLS.len() + 1);
        table.push_str(SYMBOLS);
        table.push(PAD);
        table
    }
}
