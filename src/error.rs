use std::fmt;
use std::string::FromUtf8Error;

/// Errors raised while building a glyph mapping.
///
/// All of these surface at construction time; a mapping that builds
/// successfully can never mis-map a symbol later.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The glyph set has fewer glyphs than the mapping consumes
    GlyphSetTooSmall {
        name: String,
        required: usize,
        actual: usize,
    },
    /// The same glyph appears twice among the consumed glyphs
    DuplicateGlyph { name: String, glyph: char },
    /// A consumed glyph is narrower than two UTF-16 code units
    NarrowGlyph { name: String, glyph: char },
    /// The named glyph set is not in the registry
    SetNotFound {
        name: String,
        suggestion: Option<String>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = should_use_color();
        match self {
            ConfigError::GlyphSetTooSmall {
                name,
                required,
                actual,
            } => {
                error_line(
                    f,
                    color,
                    &format!(
                        "glyph set '{}' has {} glyphs, needs at least {}",
                        name, actual, required
                    ),
                )?;
                hint_line(
                    f,
                    color,
                    "a set needs one glyph per base64 symbol plus one for '=' padding",
                )
            }
            ConfigError::DuplicateGlyph { name, glyph } => {
                error_line(
                    f,
                    color,
                    &format!("glyph set '{}' assigns '{}' twice", name, glyph),
                )?;
                hint_line(f, color, "every consumed glyph must map to exactly one symbol")
            }
            ConfigError::NarrowGlyph { name, glyph } => {
                error_line(
                    f,
                    color,
                    &format!("glyph set '{}' contains narrow glyph '{}'", name, glyph),
                )?;
                hint_line(
                    f,
                    color,
                    "glyphs must be single code points outside the Basic Multilingual Plane \
                     (two UTF-16 units), or the loader's stride arithmetic breaks",
                )
            }
            ConfigError::SetNotFound { name, suggestion } => {
                error_line(f, color, &format!("glyph set '{}' not found", name))?;
                if let Some(suggestion) = suggestion {
                    hint_line(f, color, &format!("did you mean '{}'?", suggestion))?;
                }
                writeln!(f)?;
                write!(f, "      run `glyphscript sets` to see registered sets")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised while decoding a glyph payload in-process.
///
/// The generated loader's own decode failures happen inside the PowerShell
/// host and are not represented here.
#[derive(Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload contains a character outside the glyph mapping
    UnknownGlyph { glyph: char, position: usize },
    /// The recovered base64 string contains a character outside the alphabet
    InvalidSymbol { symbol: char, position: usize },
    /// The recovered base64 string is not a multiple of four symbols
    InvalidLength { actual: usize },
    /// Padding appears somewhere other than the end, or more than twice
    InvalidPadding,
    /// The decoded bytes are not valid UTF-8
    InvalidUtf8(FromUtf8Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = should_use_color();
        match self {
            DecodeError::UnknownGlyph { glyph, position } => {
                error_line(
                    f,
                    color,
                    &format!("unknown glyph '{}' at position {}", glyph, position),
                )?;
                hint_line(f, color, "was the payload encoded with a different glyph set?")
            }
            DecodeError::InvalidSymbol { symbol, position } => error_line(
                f,
                color,
                &format!("invalid base64 symbol '{}' at position {}", symbol, position),
            ),
            DecodeError::InvalidLength { actual } => {
                error_line(
                    f,
                    color,
                    &format!("payload decodes to {} base64 symbols, expected a multiple of 4", actual),
                )?;
                hint_line(f, color, "the payload looks truncated")
            }
            DecodeError::InvalidPadding => {
                error_line(f, color, "misplaced base64 padding")
            }
            DecodeError::InvalidUtf8(e) => {
                error_line(f, color, &format!("decoded bytes are not valid UTF-8: {}", e))
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::InvalidUtf8(e) => Some(e),
            _ => None,
        }
    }
}

fn error_line(f: &mut fmt::Formatter<'_>, color: bool, msg: &str) -> fmt::Result {
    if color {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", msg)
    } else {
        write!(f, "error: {}", msg)
    }
}

fn hint_line(f: &mut fmt::Formatter<'_>, color: bool, msg: &str) -> fmt::Result {
    writeln!(f)?;
    if color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", msg)
    } else {
        write!(f, "hint: {}", msg)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Find the closest registered set name for a typo suggestion.
pub fn find_closest_set(name: &str, available: &[&String]) -> Option<String> {
    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in available {
        let distance = levenshtein_distance(name, candidate);
        // Only suggest near misses
        let threshold = if name.len() < 5 { 2 } else { 3 };
        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some((*candidate).clone());
        }
    }

    best_match
}

fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("default", "default"), 0);
        assert_eq!(levenshtein_distance("defualt", "default"), 2);
        assert_eq!(levenshtein_distance("", "animals"), 7);
    }

    #[test]
    fn test_find_closest_set() {
        let default = "default".to_string();
        let animals = "animals".to_string();
        let sets = vec![&default, &animals];

        assert_eq!(find_closest_set("defalt", &sets), Some("default".to_string()));
        assert_eq!(find_closest_set("animal", &sets), Some("animals".to_string()));
        assert_eq!(find_closest_set("hieroglyphs", &sets), None);
    }

    #[test]
    fn test_set_not_found_display() {
        let err = ConfigError::SetNotFound {
            name: "defalt".to_string(),
            suggestion: Some("default".to_string()),
        };
        let display = format!("{}", err);
        assert!(display.contains("glyph set 'defalt' not found"));
        assert!(display.contains("did you mean 'default'?"));
        assert!(display.contains("glyphscript sets"));
    }

    #[test]
    fn test_unknown_glyph_display() {
        let err = DecodeError::UnknownGlyph {
            glyph: 'x',
            position: 7,
        };
        let display = format!("{}", err);
        assert!(display.contains("unknown glyph 'x' at position 7"));
        assert!(display.contains("different glyph set"));
    }
}
