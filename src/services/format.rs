//! Display formatting helpers.

/// Render a byte count with a human-readable unit.
pub fn nice_bytes(bytes: u64) -> String {
    const TB: u64 = 1_099_511_627_776;
    const GB: u64 = 1_073_741_824;
    const MB: u64 = 1_048_576;
    const KB: u64 = 1024;

    match bytes {
        b if b >= TB => format!("{:.1} TB", b as f64 / TB as f64),
        b if b >= GB => format!("{:.1} GB", b as f64 / GB as f64),
        b if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.1} KB", b as f64 / KB as f64),
        b => format!("{} B", b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_bytes_small_values() {
        assert_eq!(nice_bytes(0), "0 B");
        assert_eq!(nice_bytes(500), "500 B");
        assert_eq!(nice_bytes(1023), "1023 B");
    }

    #[test]
    fn test_nice_bytes_uses_units_not_bare_integers() {
        assert_eq!(nice_bytes(1024), "1.0 KB");
        assert_eq!(nice_bytes(1_500_000), "1.4 MB");
        assert_eq!(nice_bytes(2_500_000_000), "2.3 GB");
        assert_eq!(nice_bytes(3_298_534_883_328), "3.0 TB");
    }
}
