use chrono::{DateTime, FixedOffset, Offset, Utc};

/// 24-hour, month-first, e.g. "03/04/2024, 17:05:09"
pub const CLOCK_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

/// Render `now` at a fixed UTC offset. Offsets outside ±24h fall back to UTC.
pub fn format_clock(now: DateTime<Utc>, utc_offset_hours: i32) -> String {
    let offset = FixedOffset::east_opt(utc_offset_hours.saturating_mul(3600))
        .unwrap_or_else(|| Utc.fix());
    now.with_timezone(&offset).format(CLOCK_FORMAT).to_string()
}
