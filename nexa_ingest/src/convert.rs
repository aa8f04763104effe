//! Conversions between sea-orm models and domain records.

use nexa_core::record::{MeetingEntry, NetworkingGoal, PersonRecord, ProfessionSummary};
use nexa_entities::person_records;

pub fn record_from_model(model: person_records::Model) -> anyhow::Result<PersonRecord> {
    let profession_summary: ProfessionSummary = serde_json::from_value(model.profession_summary)?;
    let networking_goals: Vec<NetworkingGoal> = serde_json::from_value(model.networking_goals)?;
    let meeting_history: Vec<MeetingEntry> = serde_json::from_value(model.meeting_history)?;

    Ok(PersonRecord {
        nexa_id: model.nexa_id,
        user_name: model.user_name,
        phone: model.phone,
        email: model.email,
        profession_summary,
        networking_goals,
        meeting_history,
        requested_to: model.requested_to,
    })
}
