//! Field mapping from a webhook payload to a person fragment.
//!
//! Mapping is pure construction: it never touches storage and never fails.
//! Absent optional fields resolve through the [`defaults`] table.

use chrono::{DateTime, Utc};
use nexa_core::payload::CallPayload;
use nexa_core::record::{MeetingEntry, NetworkingGoal, PersonFragment, ProfessionSummary};

use crate::extraction::{self, MeetingTime};

/// The defaulting table, applied once per fragment construction.
pub mod defaults {
    /// Identity key when the payload carries no `nexa_id`. Distinct payloads
    /// without an identity collide under this key; preserved observed
    /// behavior, flagged for product decision.
    pub const NEXA_ID: &str = "Unknown";
    /// `requested_to` when absent.
    pub const REQUESTED_TO: &str = "Not Provided";
    /// Status assigned to every freshly ingested networking goal.
    pub const GOAL_STATUS: &str = "Active";
    /// Context label stamped on every meeting history entry.
    pub const MEETING_CONTEXT: &str = "Vapi Webhook Data Processing";
    /// Format for goal creation dates.
    pub const DATE_FORMAT: &str = "%d-%m-%Y";
}

/// Build a person fragment from one webhook payload.
#[must_use]
pub fn map_payload(payload: &CallPayload) -> PersonFragment {
    map_payload_at(payload, Utc::now())
}

/// Same as [`map_payload`] with an explicit clock, for deterministic tests.
#[must_use]
pub fn map_payload_at(payload: &CallPayload, now: DateTime<Utc>) -> PersonFragment {
    let msg = &payload.message;

    let lines: Vec<&str> = msg
        .artifact
        .messages
        .iter()
        .map(|line| line.message.as_str())
        .collect();
    let MeetingTime { date, time } = extraction::extract_meeting(&lines);

    PersonFragment {
        nexa_id: msg
            .nexa_id
            .clone()
            .unwrap_or_else(|| defaults::NEXA_ID.to_string()),
        user_name: msg.user_name.clone().unwrap_or_default(),
        phone: msg.phone.clone().unwrap_or_default(),
        email: msg.email.clone().unwrap_or_default(),
        profession_summary: ProfessionSummary {
            industry: msg.industry.clone().unwrap_or_default(),
            experience: msg.experience.clone().unwrap_or_default(),
            skills: msg.skills.clone().unwrap_or_default(),
            bio: msg.profession.clone().unwrap_or_default(),
        },
        goal: NetworkingGoal {
            goal: msg.analysis.summary.clone().unwrap_or_default(),
            status: defaults::GOAL_STATUS.to_string(),
            created_at: now.format(defaults::DATE_FORMAT).to_string(),
            closed_at: None,
        },
        meeting: MeetingEntry {
            date,
            time,
            context: defaults::MEETING_CONTEXT.to_string(),
        },
        requested_to: msg
            .requested_to
            .clone()
            .unwrap_or_else(|| defaults::REQUESTED_TO.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use nexa_core::payload::{CallAnalysis, CallArtifact, CallMessage, TranscriptLine};

    #[expect(clippy::unwrap_used, reason = "Test clock is a valid timestamp")]
    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 27, 12, 0, 0).unwrap()
    }

    fn alice_payload() -> CallPayload {
        CallPayload {
            message: CallMessage {
                nexa_id: Some("u1".to_string()),
                user_name: Some("Alice".to_string()),
                profession: Some("Engineer".to_string()),
                analysis: CallAnalysis {
                    summary: Some("find CTOs".to_string()),
                },
                artifact: CallArtifact {
                    messages: vec![TranscriptLine {
                        message: "Let's meet 5 May 2025 at 2:00 PM".to_string(),
                    }],
                },
                ..CallMessage::default()
            },
        }
    }

    #[test]
    fn maps_identity_and_meeting() {
        let fragment = map_payload_at(&alice_payload(), at());

        assert_eq!(fragment.nexa_id, "u1");
        assert_eq!(fragment.user_name, "Alice");
        assert_eq!(fragment.profession_summary.bio, "Engineer");
        assert_eq!(
            fragment.meeting,
            MeetingEntry {
                date: "05-05-2025".to_string(),
                time: "2:00 PM".to_string(),
                context: defaults::MEETING_CONTEXT.to_string(),
            }
        );
    }

    #[test]
    fn goal_entry_is_active_and_dated() {
        let fragment = map_payload_at(&alice_payload(), at());

        assert_eq!(fragment.goal.goal, "find CTOs");
        assert_eq!(fragment.goal.status, "Active");
        assert_eq!(fragment.goal.created_at, "27-01-2025");
        assert!(fragment.goal.closed_at.is_none());
    }

    #[test]
    fn empty_payload_resolves_through_defaulting_table() {
        let fragment = map_payload_at(&CallPayload::default(), at());

        assert_eq!(fragment.nexa_id, defaults::NEXA_ID);
        assert_eq!(fragment.requested_to, defaults::REQUESTED_TO);
        assert_eq!(fragment.user_name, "");
        assert_eq!(fragment.phone, "");
        assert_eq!(fragment.email, "");
        assert!(fragment.profession_summary.skills.is_empty());
        assert_eq!(fragment.goal.goal, "");
        assert_eq!(fragment.meeting.date, extraction::NOT_PROVIDED);
        assert_eq!(fragment.meeting.time, extraction::NOT_PROVIDED);
    }

    #[test]
    fn requested_to_is_copied_verbatim_when_present() {
        let mut payload = alice_payload();
        payload.message.requested_to = Some("Bob".to_string());

        let fragment = map_payload_at(&payload, at());
        assert_eq!(fragment.requested_to, "Bob");
    }
}
