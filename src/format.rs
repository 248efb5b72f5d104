//! Display formatting for counts and durations.

const UNITS: [&str; 4] = ["k", "M", "B", "T"];

/// Compact count: `912`, `48.2k`, `1.4M`, `2B`.
pub fn format_number(num: u64) -> String {
    if num < 1000 {
        return num.to_string();
    }

    let mut order = 0;
    let mut rest = num;
    while rest >= 1000 && order < UNITS.len() {
        rest /= 1000;
        order += 1;
    }
    let scaled = num as f64 / 1000f64.powi(order as i32);

    if scaled.fract() == 0.0 {
        format!("{}{}", scaled, UNITS[order - 1])
    } else {
        format!("{:.1}{}", scaled, UNITS[order - 1])
    }
}

/// `mm:ss`, or `hh:mm:ss` once the duration reaches an hour.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
