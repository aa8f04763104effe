//! Meeting date/time extraction.
//!
//! Transcript lines are scanned in order and the first line carrying a full
//! meeting mention wins; a transcript is assumed to mention the meeting time
//! at most once meaningfully.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Sentinel for a transcript that never states a meeting slot.
pub const NOT_PROVIDED: &str = "Not Provided";

/// Compound meeting mention. The month word is matched loosely here and
/// validated against the twelve recognized names afterwards, so an
/// unrecognized month leaves the line unmatched instead of failing.
#[expect(clippy::expect_used, reason = "Pattern is a compile-time constant")]
static MEETING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\s+([a-z]+)\s+(\d{4})\s+at\s+(\d{1,2}):(\d{2})\s*(am|pm)\b")
        .expect("meeting pattern compiles")
});

/// Extracted meeting slot, already formatted for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingTime {
    /// `DD-MM-YYYY`, or [`NOT_PROVIDED`].
    pub date: String,
    /// `H:MM AM|PM` with an unpadded hour, or [`NOT_PROVIDED`].
    pub time: String,
}

impl MeetingTime {
    #[must_use]
    pub fn not_provided() -> Self {
        Self {
            date: NOT_PROVIDED.to_string(),
            time: NOT_PROVIDED.to_string(),
        }
    }
}

/// Scan transcript lines in order for the first full meeting mention.
///
/// Lines after the first match are not considered. When no line matches,
/// both fields come back as [`NOT_PROVIDED`].
#[must_use]
pub fn extract_meeting<S: AsRef<str>>(lines: &[S]) -> MeetingTime {
    lines
        .iter()
        .find_map(|line| match_line(line.as_ref()))
        .unwrap_or_else(MeetingTime::not_provided)
}

fn match_line(line: &str) -> Option<MeetingTime> {
    let caps = MEETING_RE.captures(line)?;

    let month = month_number(&caps[2])?;
    let day: u32 = caps[1].parse().ok()?;
    // Reparse the hour so "04:30" renders as "4:30".
    let hour: u32 = caps[4].parse().ok()?;
    let year = &caps[3];
    let minute = &caps[5];
    let meridiem = caps[6].to_uppercase();

    Some(MeetingTime {
        date: format!("{day:02}-{month:02}-{year}"),
        time: format!("{hour}:{minute} {meridiem}"),
    })
}

fn month_number(name: &str) -> Option<u32> {
    match name.to_lowercase().as_str() {
        "january" => Some(1),
        "february" => Some(2),
        "march" => Some(3),
        "april" => Some(4),
        "may" => Some(5),
        "june" => Some(6),
        "july" => Some(7),
        "august" => Some(8),
        "september" => Some(9),
        "october" => Some(10),
        "november" => Some(11),
        "december" => Some(12),
        _ => None,
    }
}
