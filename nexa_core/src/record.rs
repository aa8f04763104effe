//! Persisted person records and the store they live in.
//!
//! Records are keyed by `nexa_id`. Summary fields are last-write-wins; the
//! `networking_goals` and `meeting_history` sequences only ever grow.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Profession summary, overwritten wholesale on every merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionSummary {
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub bio: String,
}

/// One networking goal captured from a webhook event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkingGoal {
    pub goal: String,
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub closed_at: Option<String>,
}

/// One meeting mention extracted from a call transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingEntry {
    pub date: String,
    pub time: String,
    pub context: String,
}

/// The stored per-person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub nexa_id: String,
    pub user_name: String,
    pub phone: String,
    pub email: String,
    pub profession_summary: ProfessionSummary,
    pub networking_goals: Vec<NetworkingGoal>,
    pub meeting_history: Vec<MeetingEntry>,
    pub requested_to: String,
}

/// Normalized, not-yet-persisted data derived from one webhook event.
///
/// A fragment carries exactly one goal and one meeting entry; they become
/// the initial history of a new record or are appended to an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonFragment {
    pub nexa_id: String,
    pub user_name: String,
    pub phone: String,
    pub email: String,
    pub profession_summary: ProfessionSummary,
    pub goal: NetworkingGoal,
    pub meeting: MeetingEntry,
    pub requested_to: String,
}

impl PersonFragment {
    /// Turn the fragment into a brand-new record (create path).
    #[must_use]
    pub fn into_record(self) -> PersonRecord {
        PersonRecord {
            nexa_id: self.nexa_id,
            user_name: self.user_name,
            phone: self.phone,
            email: self.email,
            profession_summary: self.profession_summary,
            networking_goals: vec![self.goal],
            meeting_history: vec![self.meeting],
            requested_to: self.requested_to,
        }
    }

    /// Express the fragment as an update for an existing record (update path).
    #[must_use]
    pub fn as_update(&self) -> RecordUpdate {
        RecordUpdate {
            user_name: self.user_name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            profession_summary: self.profession_summary.clone(),
            requested_to: self.requested_to.clone(),
            goal: self.goal.clone(),
            meeting: self.meeting.clone(),
        }
    }
}

/// "Set these summary fields, append these entries" applied to one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUpdate {
    pub user_name: String,
    pub phone: String,
    pub email: String,
    pub profession_summary: ProfessionSummary,
    pub requested_to: String,
    pub goal: NetworkingGoal,
    pub meeting: MeetingEntry,
}

/// Whether a merge created a new record or updated an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeOutcome {
    Created,
    Updated,
}

impl MergeOutcome {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

impl std::fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Person record store, one logical collection keyed by `nexa_id`.
#[async_trait]
pub trait PersonRepo: Send + Sync {
    /// Point lookup by identity key.
    async fn find_by_nexa_id(&self, nexa_id: &str) -> anyhow::Result<Option<PersonRecord>>;

    /// Insert a brand-new record.
    async fn insert(&self, record: &PersonRecord) -> anyhow::Result<()>;

    /// Overwrite summary fields and append the update's goal and meeting
    /// entry to the record stored under `nexa_id`.
    async fn update_and_append(&self, nexa_id: &str, update: &RecordUpdate) -> anyhow::Result<()>;

    /// List every stored record.
    async fn list_all(&self) -> anyhow::Result<Vec<PersonRecord>>;
}
