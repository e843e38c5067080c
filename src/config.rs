use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// A named glyph set as it appears in `glyphs.toml`.
#[derive(Debug, Deserialize, Clone)]
pub struct GlyphSetConfig {
    pub glyphs: String,
}

/// Registry of glyph sets, loaded from the embedded `glyphs.toml` with
/// optional user overrides.
#[derive(Debug, Deserialize)]
pub struct GlyphRegistry {
    pub sets: HashMap<String, GlyphSetConfig>,
}

impl GlyphRegistry {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in registry embedded at compile time.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../glyphs.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads a registry from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads the registry with user overrides from standard locations:
    /// 1. Start with the built-in sets
    /// 2. Override with ~/.config/glyphscript/glyphs.toml if it exists
    /// 3. Override with ./glyphs.toml if it exists in the current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut registry = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_path = config_dir.join("glyphscript").join("glyphs.toml");
            if user_path.exists() {
                match Self::load_from_file(&user_path) {
                    Ok(user_registry) => registry.merge(user_registry),
                    Err(e) => {
                        eprintln!("Warning: Failed to load user config from {:?}: {}", user_path, e);
                    }
                }
            }
        }

        let local_path = Path::new("glyphs.toml");
        if local_path.exists() {
            match Self::load_from_file(local_path) {
                Ok(local_registry) => registry.merge(local_registry),
                Err(e) => {
                    eprintln!("Warning: Failed to load local config from {:?}: {}", local_path, e);
                }
            }
        }

        Ok(registry)
    }

    /// Merges another registry into this one, overriding same-named sets.
    pub fn merge(&mut self, other: GlyphRegistry) {
        for (name, set) in other.sets {
            self.sets.insert(name, set);
        }
    }

    pub fn get_set(&self, name: &str) -> Option<&GlyphSetConfig> {
        self.sets.get(name)
    }

    /// Registered set names, sorted for stable listings.
    pub fn set_names(&self) -> Vec<&String> {
        let mut names: Vec<&String> = self.sets.keys().collect();
        names.sort();
        names
    }
}
