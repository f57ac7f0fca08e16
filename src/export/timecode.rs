//! Timestamp rendering.
//!
//! The subtitle and CSV writers format time differently: subtitles render a
//! clock time that wraps every 24 hours, CSV renders elapsed hours unbounded.

use super::{ExportError, Result};
use chrono::DateTime;

/// Format `seconds` as a Unix timestamp's UTC time of day (HH:MM:SS.mmm).
///
/// Whole seconds are split off first and only the fraction is resolved to
/// microseconds, so large timestamps keep their sub-second digits. The
/// milliseconds are then truncated. Only the time of day is kept, so 86400.0
/// renders as midnight.
pub fn format_clock_time(seconds: f64) -> Result<String> {
    if !seconds.is_finite() {
        return Err(ExportError::InvalidTimestamp(seconds));
    }

    let whole = seconds.floor();
    let mut secs = to_i64(whole, seconds)?;
    let mut micros = ((seconds - whole) * 1_000_000.0).round_ties_even() as u32;
    if micros >= 1_000_000 {
        secs = secs
            .checked_add(1)
            .ok_or(ExportError::InvalidTimestamp(seconds))?;
        micros -= 1_000_000;
    }

    let time = DateTime::from_timestamp(secs, micros * 1_000)
        .ok_or(ExportError::InvalidTimestamp(seconds))?;

    Ok(time.format("%H:%M:%S%.3f").to_string())
}

/// Format elapsed `seconds` as HH:MM:SS.sss without wrapping hours.
///
/// Minutes and seconds use floored modulo, so negative input counts back
/// from the previous hour boundary.
pub fn format_timecode(seconds: f64) -> Result<String> {
    if !seconds.is_finite() {
        return Err(ExportError::InvalidTimestamp(seconds));
    }

    let hours = to_i64(seconds.div_euclid(3600.0), seconds)?;
    let mins = seconds.rem_euclid(3600.0).div_euclid(60.0) as i64;
    let secs = seconds.rem_euclid(60.0);

    Ok(format!("{:02}:{:02}:{:06.3}", hours, mins, secs))
}

/// Convert an integral float to i64, rejecting values a cast would clamp.
fn to_i64(value: f64, seconds: f64) -> Result<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(ExportError::InvalidTimestamp(seconds));
    }
    Ok(value as i64)
}
