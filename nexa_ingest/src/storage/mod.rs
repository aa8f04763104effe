//! Database-backed person record store.
//!
//! Read-modify-write over one `person_records` row per identity key.
//! Concurrent deliveries for the same `nexa_id` race here; a store with
//! native compare-and-set would report that as a conflict instead.

use async_trait::async_trait;
use chrono::Utc;
use nexa_core::record::{MeetingEntry, NetworkingGoal, PersonRecord, PersonRepo, RecordUpdate};
use nexa_entities::person_records;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::info;
use uuid::Uuid;

use crate::convert;

/// Person record store over a sea-orm connection.
///
/// Constructed once at process startup and handed to the pipeline; never
/// referenced as ambient global state.
pub struct StorageEngine {
    db: DatabaseConnection,
}

impl StorageEngine {
    /// Connect and build the store.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        info!("Connecting to database for StorageEngine");
        let db = Database::connect(database_url).await?;
        info!("StorageEngine initialized");
        Ok(Self { db })
    }

    /// Get a reference to the database connection.
    #[must_use]
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn find_model(&self, nexa_id: &str) -> anyhow::Result<Option<person_records::Model>> {
        Ok(person_records::Entity::find()
            .filter(person_records::Column::NexaId.eq(nexa_id))
            .one(&self.db)
            .await?)
    }
}

#[async_trait]
impl PersonRepo for StorageEngine {
    async fn find_by_nexa_id(&self, nexa_id: &str) -> anyhow::Result<Option<PersonRecord>> {
        self.find_model(nexa_id)
            .await?
            .map(convert::record_from_model)
            .transpose()
    }

    async fn insert(&self, record: &PersonRecord) -> anyhow::Result<()> {
        let now = Utc::now();
        let model = person_records::ActiveModel {
            id: Set(Uuid::now_v7()),
            nexa_id: Set(record.nexa_id.clone()),
            user_name: Set(record.user_name.clone()),
            phone: Set(record.phone.clone()),
            email: Set(record.email.clone()),
            profession_summary: Set(serde_json::to_value(&record.profession_summary)?),
            networking_goals: Set(serde_json::to_value(&record.networking_goals)?),
            meeting_history: Set(serde_json::to_value(&record.meeting_history)?),
            requested_to: Set(record.requested_to.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        model.insert(&self.db).await?;

        info!("Inserted person record: {}", record.nexa_id);
        Ok(())
    }

    async fn update_and_append(&self, nexa_id: &str, update: &RecordUpdate) -> anyhow::Result<()> {
        let existing = self
            .find_model(nexa_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("PersonRecord not found: {nexa_id}"))?;

        let mut goals: Vec<NetworkingGoal> =
            serde_json::from_value(existing.networking_goals.clone())?;
        goals.push(update.goal.clone());
        let mut history: Vec<MeetingEntry> =
            serde_json::from_value(existing.meeting_history.clone())?;
        history.push(update.meeting.clone());

        let mut active = person_records::ActiveModel::from(existing);
        active.user_name = Set(update.user_name.clone());
        active.phone = Set(update.phone.clone());
        active.email = Set(update.email.clone());
        active.profession_summary = Set(serde_json::to_value(&update.profession_summary)?);
        active.networking_goals = Set(serde_json::to_value(&goals)?);
        active.meeting_history = Set(serde_json::to_value(&history)?);
        active.requested_to = Set(update.requested_to.clone());
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await?;

        info!(
            "Appended goal and meeting to person record: {nexa_id} (goals={}, meetings={})",
            goals.len(),
            history.len()
        );
        Ok(())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<PersonRecord>> {
        let models = person_records::Entity::find().all(&self.db).await?;
        models.into_iter().map(convert::record_from_model).collect()
    }
}
