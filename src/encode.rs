use crate::base64;
use crate::error::DecodeError;
use crate::mapping::GlyphMap;

/// Encodes a script into a glyph payload.
///
/// The input is taken as UTF-8 bytes, base64-encoded, and each symbol of the
/// base64 output (padding included) is replaced by its mapped glyph. The
/// payload's UTF-16 length is exactly twice the base64 length, matching the
/// stride the generated loader decodes with. Empty input yields an empty
/// payload.
pub fn encode(input: &str, map: &GlyphMap) -> String {
    let b64 = base64::encode(input.as_bytes());
    // 4 bytes per glyph in UTF-8
    let mut payload = String::with_capacity(b64.len() * 4);
    for symbol in b64.chars() {
        // base64 output only contains mapped symbols
        payload.push(map.glyph_for(symbol).unwrap());
    }
    payload
}

/// Decodes a glyph payload back into the original script.
///
/// Reverses [`encode`]: each glyph is looked up to recover its base64 symbol,
/// the base64 string is decoded, and the bytes are interpreted as UTF-8.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownGlyph`] for a character outside the mapping,
/// the strict base64 errors for a truncated or corrupted payload, and
/// [`DecodeError::InvalidUtf8`] if the decoded bytes are not valid UTF-8.
pub fn decode(payload: &str, map: &GlyphMap) -> Result<String, DecodeError> {
    let mut b64 = String::with_capacity(payload.len() / 2);
    for (position, glyph) in payload.chars().enumerate() {
        let symbol = map
            .symbol_for(glyph)
            .ok_or(DecodeError::UnknownGlyph { glyph, position })?;
        b64.push(symbol);
    }
    let bytes = base64::decode(&b64)?;
    String::from_utf8(bytes).map_err(DecodeError::InvalidUtf8)
}
