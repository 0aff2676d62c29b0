use chrono::{NaiveTime, Timelike};

/// Convert an hours/minutes pair to minutes since midnight.
///
/// Minutes may carry a fractional part; flight schedules keep sub-minute
/// precision through the collision calculations.
#[must_use]
pub fn hours_minutes_to_minutes(hours: u32, minutes: f64) -> f64 {
    f64::from(hours) * 60.0 + minutes
}

/// Convert a `NaiveTime` to minutes since midnight
#[must_use]
pub fn time_to_minutes(time: NaiveTime) -> f64 {
    let seconds = f64::from(time.num_seconds_from_midnight());
    seconds / 60.0
}

/// Format minutes since midnight as an `HHhMM` display string
///
/// Fractional minutes are truncated for display.
#[must_use]
pub fn format_minutes(minutes: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let total = minutes as i64;
    let hours = total.div_euclid(60);
    let mins = total.rem_euclid(60);
    format!("{hours}h{mins:02}")
}

/// Parse a time string in HH:MM format
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as a valid time in HH:MM format.
pub fn parse_time_hm(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M")
}
