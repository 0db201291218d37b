/// Compact counter formatting, e.g. 1234 -> "1.2K", 4560000 -> "4.6M".
pub fn format_compact(n: u64) -> String {
    fn scaled(n: u64, unit: u64, suffix: &str) -> String {
        let value = n as f64 / unit as f64;
        let rendered = format!("{:.1}", value);
        let rendered = rendered.strip_suffix(".0").unwrap_or(&rendered);
        format!("{}{}", rendered, suffix)
    }

    if n < 1_000 {
        n.to_string()
    } else if n < 1_000_000 {
        scaled(n, 1_000, "K")
    } else {
        scaled(n, 1_000_000, "M")
    }
}

/// Human-readable file size, e.g. 1536 -> "1.5 KB".
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = (bytes as f64).log(1024.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rendered = format!("{:.2}", value);
    let rendered = rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string();

    format!("{} {}", rendered, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_keeps_small_numbers_plain() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(999), "999");
    }

    #[test]
    fn compact_scales_thousands_and_millions() {
        assert_eq!(format_compact(1_200), "1.2K");
        assert_eq!(format_compact(45_600), "45.6K");
        assert_eq!(format_compact(2_000), "2K");
        assert_eq!(format_compact(4_600_000), "4.6M");
    }

    #[test]
    fn file_size_picks_unit_by_magnitude() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1_536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
    }
}
