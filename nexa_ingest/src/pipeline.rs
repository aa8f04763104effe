//! Webhook ingestion pipeline.
//!
//! Admission, field mapping, merge and match lookup over an injected person
//! store. Each call is independent; the only shared state is the store
//! itself.

use std::sync::Arc;

use nexa_core::payload::CallPayload;
use nexa_core::record::{MergeOutcome, PersonFragment, PersonRepo};
use nexa_core::{Error, Result};
use tracing::{debug, info};

use crate::{mapper, matcher};

/// Result of processing one webhook delivery.
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Identity key the delivery was reconciled under.
    pub nexa_id: String,
    /// Whether a record was created or updated.
    pub outcome: MergeOutcome,
}

/// The ingestion core, invoked by the surrounding request-handling layer.
pub struct IngestPipeline {
    repo: Arc<dyn PersonRepo>,
}

impl IngestPipeline {
    /// Build a pipeline over an injected person store.
    #[must_use]
    pub fn new(repo: Arc<dyn PersonRepo>) -> Self {
        Self { repo }
    }

    /// Process one raw webhook body end to end.
    pub async fn ingest_value(&self, value: serde_json::Value) -> Result<IngestReport> {
        let payload = CallPayload::from_value(value)?;
        let fragment = mapper::map_payload(&payload);
        debug!(
            "Mapped payload for {}: meeting {} {}",
            fragment.nexa_id, fragment.meeting.date, fragment.meeting.time
        );

        let outcome = self.merge(&fragment).await?;
        Ok(IngestReport {
            nexa_id: fragment.nexa_id,
            outcome,
        })
    }

    /// Reconcile a fragment into the record stored under its identity key.
    ///
    /// Summary fields are overwritten, the fragment's single goal and
    /// meeting entry are appended. Nothing is deduplicated or deleted.
    pub async fn merge(&self, fragment: &PersonFragment) -> Result<MergeOutcome> {
        let existing = self
            .repo
            .find_by_nexa_id(&fragment.nexa_id)
            .await
            .map_err(Error::StoreUnavailable)?;

        if existing.is_some() {
            self.repo
                .update_and_append(&fragment.nexa_id, &fragment.as_update())
                .await
                .map_err(Error::StoreUnavailable)?;
            info!("Updated person record: {}", fragment.nexa_id);
            Ok(MergeOutcome::Updated)
        } else {
            self.repo
                .insert(&fragment.clone().into_record())
                .await
                .map_err(Error::StoreUnavailable)?;
            info!("Created person record: {}", fragment.nexa_id);
            Ok(MergeOutcome::Created)
        }
    }

    /// Suggest a stored contact for a free-text goal description.
    ///
    /// Always a human-readable message: a fixed reply for blank input, a
    /// suggestion naming the first matching contact, or a fixed
    /// keep-looking reply.
    pub async fn suggest_match(&self, goal_text: &str) -> Result<String> {
        if goal_text.trim().is_empty() {
            return Ok(matcher::NO_GOAL_MESSAGE.to_string());
        }

        let records = self
            .repo
            .list_all()
            .await
            .map_err(Error::StoreUnavailable)?;

        match matcher::best_match(&records, goal_text) {
            Some(record) => {
                info!("Matched goal {goal_text:?} to {}", record.nexa_id);
                Ok(matcher::suggestion(record))
            }
            None => {
                debug!("No stored goal mentions {goal_text:?}");
                Ok(matcher::KEEP_LOOKING_MESSAGE.to_string())
            }
        }
    }
}
