use crate::error::DecodeError;
use crate::mapping::{PAD, SYMBOLS};

const BITS_PER_SYMBOL: usize = 6;
// 24-bit padding group: LCM(6, 8) / 6 symbols
const GROUP: usize = 4;

/// Encodes bytes as standard padded base64.
pub fn encode(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }

    let output_chars = (data.len() * 8).div_ceil(BITS_PER_SYMBOL);
    let capacity = output_chars.div_ceil(GROUP) * GROUP;
    let mut result = String::with_capacity(capacity);
    let symbols = SYMBOLS.as_bytes();

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | byte as u32;
        bits_in_buffer += 8;

        while bits_in_buffer >= BITS_PER_SYMBOL {
            bits_in_buffer -= BITS_PER_SYMBOL;
            let index = ((bit_buffer >> bits_in_buffer) & 0x3f) as usize;
            result.push(symbols[index] as char);
        }
    }

    // Remaining bits are left-aligned into a final symbol
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (BITS_PER_SYMBOL - bits_in_buffer)) & 0x3f) as usize;
        result.push(symbols[index] as char);
    }

    while result.len() % GROUP != 0 {
        result.push(PAD);
    }

    result
}

/// Decodes standard padded base64.
///
/// Strict: the input must be a multiple of four symbols, padding may only
/// appear as the final one or two characters, and every other character must
/// come from the base64 alphabet.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let length = encoded.chars().count();
    if length % GROUP != 0 {
        return Err(DecodeError::InvalidLength { actual: length });
    }

    let mut result = Vec::with_capacity(length / GROUP * 3);
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;
    let mut pad_count = 0usize;

    for (position, c) in encoded.chars().enumerate() {
        if c == PAD {
            pad_count += 1;
            if pad_count > 2 {
                return Err(DecodeError::InvalidPadding);
            }
            continue;
        }
        if pad_count > 0 {
            // Symbols after padding
            return Err(DecodeError::InvalidPadding);
        }

        let digit = symbol_index(c).ok_or(DecodeError::InvalidSymbol {
            symbol: c,
            position,
        })?;

        bit_buffer = (bit_buffer << BITS_PER_SYMBOL) | digit;
        bits_in_buffer += BITS_PER_SYMBOL;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push((bit_buffer >> bits_in_buffer) as u8);
        }
    }

    Ok(result)
}

fn symbol_index(c: char) -> Option<u32> {
    match c {
        'A'..='Z' => Some(c as u32 - 'A' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 26),
        '0'..='9' => Some(c as u32 - '0' as u32 + 52),
        '+' => Some(62),
        '/' => Some(63),
        _ => None,
    }
}
