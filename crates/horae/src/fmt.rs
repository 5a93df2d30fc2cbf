//! ISO-8601 and ctime-style text output, plus `%f`/`%z`/`%Z` expansion
//! for host-side pattern formatters.
//!
//! Everything here is a pure function of already-validated field values;
//! locale-aware pattern engines stay on the host side.

/// Abbreviated day names indexed by weekday (Monday = 0).
const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Abbreviated month names (index 0 unused).
const MONTH_NAMES: [&str; 13] = [
    "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats a clock reading as `HH:MM:SS`, appending `.ffffff` only when
/// the microseconds are nonzero.
pub fn format_clock(hour: u8, minute: u8, second: u8, microsecond: u32) -> String {
    let mut s = format!("{hour:02}:{minute:02}:{second:02}");
    if microsecond != 0 {
        s.push_str(&format!(".{microsecond:06}"));
    }
    s
}

/// Formats an offset in minutes east of UTC as `±HH<sep>MM`.
pub fn format_offset(minutes: i64, sep: &str) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let magnitude = minutes.abs();
    format!("{sign}{:02}{sep}{:02}", magnitude / 60, magnitude % 60)
}

/// Formats fields ctime-style: `Www Mmm DD HH:MM:SS YYYY` with the day
/// space-padded to two columns.
pub fn ctime_string(
    weekday: u8,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    year: i64,
) -> String {
    format!(
        "{} {} {day:2} {hour:02}:{minute:02}:{second:02} {year:04}",
        DAY_NAMES[weekday as usize], MONTH_NAMES[month as usize]
    )
}

/// Substitutes `%f`, `%z` and `%Z` escapes in a strftime-style pattern,
/// leaving every other escape for a host formatter.
///
/// `%f` becomes the six-digit microsecond count; `%z` the `±HHMM` offset
/// (empty when `offset_minutes` is `None`); `%Z` the zone name with any
/// `%` doubled so the host formatter cannot reinterpret it (empty when
/// `zone_name` is `None`). A trailing lone `%` passes through unchanged.
pub fn expand_format(
    pattern: &str,
    microsecond: u32,
    offset_minutes: Option<i64>,
    zone_name: Option<&str>,
) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('f') => out.push_str(&format!("{microsecond:06}")),
            Some('z') => {
                if let Some(minutes) = offset_minutes {
                    out.push_str(&format_offset(minutes, ""));
                }
            }
            Some('Z') => {
                if let Some(name) = zone_name {
                    out.push_str(&name.replace('%', "%%"));
                }
            }
            Some(other) => {
                out.push('%');
                out.push(other);
            }
            None => out.push('%'),
        }
    }
    out
}
