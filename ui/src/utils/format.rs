use jiff::Timestamp;
use rust_decimal::Decimal;

/// Format a timestamp for display in lists and detail panels.
pub fn format_timestamp(timestamp: Timestamp) -> String {
    timestamp.strftime("%d %b %Y %H:%M").to_string()
}

/// Format a video duration in seconds as `m:ss`.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Format a fine amount in Vietnamese dong with thousands separators.
pub fn format_vnd(amount: &Decimal) -> String {
    let whole = amount.trunc().to_string();
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole.as_str()),
    };

    let mut grouped = String::new();
    let chars: Vec<char> = digits.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    format!("{sign}{grouped} ₫")
}

/// Format a file size in bytes with a binary-ish display unit.
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_are_minute_second() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(600), "10:00");
    }

    #[test]
    fn vnd_amounts_group_thousands() {
        assert_eq!(format_vnd(&Decimal::new(150000000, 2)), "1,500,000 ₫");
        assert_eq!(format_vnd(&Decimal::new(50000, 0)), "50,000 ₫");
        assert_eq!(format_vnd(&Decimal::new(999, 0)), "999 ₫");
    }

    #[test]
    fn file_sizes_pick_a_sensible_unit() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_file_size(1536 * 1024), "1.5 MB");
    }

    #[test]
    fn timestamps_render_day_month_year() {
        let ts: Timestamp = "2024-01-01T10:00:00Z".parse().unwrap();
        assert_eq!(format_timestamp(ts), "01 Jan 2024 10:00");
    }
}
