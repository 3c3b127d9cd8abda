//! Human-readable formatting for derived track fields.

const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * 1024 * 1024;

/// Format a duration in seconds as "H:MM:SS" for an hour or longer,
/// otherwise "M:SS".
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Format a file size in binary units with two decimal places.
pub fn format_size(bytes: u64) -> String {
    if bytes >= GIB {
        format!("{:.2} GB", bytes as f64 / GIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}

/// "Stereo" for more than one channel (surround included), "Mono" for
/// one channel or when the count is unknown.
pub fn channel_layout(channels: Option<u8>) -> &'static str {
    match channels {
        Some(c) if c > 1 => "Stereo",
        _ => "Mono",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_under_a_minute() {
        assert_eq!(format_duration(45), "0:45");
    }

    #[test]
    fn duration_minutes_and_seconds() {
        assert_eq!(format_duration(125), "2:05");
    }

    #[test]
    fn duration_over_an_hour() {
        assert_eq!(format_duration(3725), "1:02:05");
    }

    #[test]
    fn duration_zero() {
        assert_eq!(format_duration(0), "0:00");
    }

    #[test]
    fn size_below_a_gigabyte_uses_mb() {
        assert_eq!(format_size(900_000), "0.86 MB");
    }

    #[test]
    fn size_at_two_gigabytes() {
        assert_eq!(format_size(2_147_483_648), "2.00 GB");
    }

    #[test]
    fn size_at_exactly_one_gibibyte_uses_gb() {
        assert_eq!(format_size(GIB), "1.00 GB");
    }

    #[test]
    fn channel_layout_mapping() {
        assert_eq!(channel_layout(Some(1)), "Mono");
        assert_eq!(channel_layout(Some(2)), "Stereo");
        assert_eq!(channel_layout(Some(6)), "Stereo"); // surround counts as stereo
        assert_eq!(channel_layout(None), "Mono");
    }
}
