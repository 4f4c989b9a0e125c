//! Human-readable byte sizes on a 1024-based scale.

const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Formats a byte count on a 1024-based scale, rounded to two decimals.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && unit < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}
