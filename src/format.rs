const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Formats a byte count with binary (1024-based) units, one decimal place.
///
/// Picks the largest unit where the value is at least 1; zero formats as
/// `"0 B"`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
