//! Shift duration parsing and formatting for display.
//!
//! Recorded shifts carry their length as a human-readable label such as
//! `"8h 34m"`. This module converts those labels into whole minutes and turns
//! minute counts back into the same display shape, so that the dashboard and
//! the history view always print durations identically.
//!
//! ## Format Specifications
//!
//! ### Duration Format
//! All durations follow the `"<sign><H>h <MM>m"` pattern:
//! - Hours are not padded and may exceed 24
//! - Minutes are zero-padded to 2 digits
//! - A `-` prefix is written only for negative values
//! - No `+` prefix is ever written by [`format_duration`]
//!
//! ### Examples
//! - 514 minutes → "8h 34m"
//! - 45 minutes → "0h 45m"
//! - -619 minutes → "-10h 19m"
//!
//! ## Parsing Rules
//!
//! [`parse_duration`] reads an optional `<digits>h`, optional whitespace and an
//! optional `<digits>m` from the start of the label. Unit letters are
//! case-insensitive. Anything it cannot read counts as zero minutes, so the
//! function never fails.
//!
//! ## Examples
//!
//! ```rust
//! use inout::libs::duration::{format_duration, parse_duration};
//!
//! assert_eq!(parse_duration("8h 34m"), 514);
//! assert_eq!(format_duration(514), "8h 34m");
//! assert_eq!(format_duration(-619), "-10h 19m");
//! ```

use regex::Regex;
use std::sync::OnceLock;

const MINUTES_PER_HOUR: i64 = 60;

// The pattern can always match the empty string at the start, so a label
// without a leading duration yields empty captures rather than no match.
// U+FEFF counts as whitespace between the components.
fn re_duration() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?i)(?:([0-9]+)h)?[\s\x{FEFF}]*(?:([0-9]+)m)?").unwrap())
}

/// Converts a duration label into whole minutes.
///
/// Accepts `"8h 34m"`, `"8h34m"`, `"8H 34M"`, `"8h"` and `"34m"`. Labels that
/// do not start with a duration (`""`, `"abc"`, `" 8h"`, `"-1h 05m"`) give 0.
/// Component values too large for an `i64` are treated as absent.
///
/// # Examples
///
/// ```rust
/// use inout::libs::duration::parse_duration;
///
/// assert_eq!(parse_duration("4h 13m"), 253);
/// assert_eq!(parse_duration("90m"), 90);
/// assert_eq!(parse_duration("n/a"), 0);
/// ```
pub fn parse_duration(value: &str) -> i64 {
    let Some(captures) = re_duration().captures(value) else {
        return 0;
    };

    let component = |index: usize| -> i64 {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .unwrap_or(0)
    };

    component(1)
        .saturating_mul(MINUTES_PER_HOUR)
        .saturating_add(component(2))
}

/// Formats a signed minute count as `"<sign><H>h <MM>m"`.
///
/// Only strictly negative values get a sign. Positive variance decoration is
/// left to [`format_variance`].
///
/// # Examples
///
/// ```rust
/// use inout::libs::duration::format_duration;
///
/// assert_eq!(format_duration(0), "0h 00m");
/// assert_eq!(format_duration(2400), "40h 00m");
/// assert_eq!(format_duration(-5), "-0h 05m");
/// ```
pub fn format_duration(total_minutes: i64) -> String {
    let absolute = total_minutes.unsigned_abs();
    let hours = absolute / MINUTES_PER_HOUR as u64;
    let minutes = absolute % MINUTES_PER_HOUR as u64;
    let sign = if total_minutes < 0 { "-" } else { "" };

    format!("{}{}h {:02}m", sign, hours, minutes)
}

/// Formats a variance for display next to the plan, with an explicit `+`
/// for time worked above target.
///
/// ```rust
/// use inout::libs::duration::format_variance;
///
/// assert_eq!(format_variance(75), "+1h 15m");
/// assert_eq!(format_variance(0), "0h 00m");
/// assert_eq!(format_variance(-619), "-10h 19m");
/// ```
pub fn format_variance(variance_minutes: i64) -> String {
    if variance_minutes > 0 {
        format!("+{}", format_duration(variance_minutes))
    } else {
        format_duration(variance_minutes)
    }
}
