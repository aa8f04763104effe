//! Keyword lookup over stored networking goals.
//!
//! Single-candidate, first-match policy: no ranking, no multiple
//! suggestions. Selection and formatting are kept free of the repository so
//! they test without a store.

use nexa_core::record::PersonRecord;

/// Reply when the caller gave no goal text at all.
pub const NO_GOAL_MESSAGE: &str =
    "Please tell me what kind of connection you are looking for.";

/// Reply when no stored goal mentions the requested keyword.
pub const KEEP_LOOKING_MESSAGE: &str =
    "No matching connection yet. I will keep looking and let you know.";

/// Pick the first record whose goal text contains `goal_text`,
/// case-insensitively.
#[must_use]
pub fn best_match<'a>(records: &'a [PersonRecord], goal_text: &str) -> Option<&'a PersonRecord> {
    let needle = goal_text.to_lowercase();
    records.iter().find(|record| {
        record
            .networking_goals
            .iter()
            .any(|entry| entry.goal.to_lowercase().contains(&needle))
    })
}

/// Format a meeting suggestion for a matched record.
#[must_use]
pub fn suggestion(record: &PersonRecord) -> String {
    format!(
        "You should connect with {}, {}. Want me to set up a meeting?",
        record.user_name, record.profession_summary.bio,
    )
}
