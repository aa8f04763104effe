//! Integration tests for the ingestion pipeline.
//!
//! These tests verify the complete flow of:
//! - Payload admission and field mapping
//! - Merge-by-identity (created vs. updated, append-only histories)
//! - Match suggestions over stored goals
//!
//! The pipeline runs over an in-memory person store; the database-backed
//! engine shares the same `PersonRepo` seam.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nexa_core::record::{MergeOutcome, PersonRecord, PersonRepo, RecordUpdate};
use nexa_core::Error;
use nexa_ingest::{matcher, IngestPipeline};
use serde_json::json;

/// In-memory `PersonRepo`, keyed by `nexa_id` like the real collection.
#[derive(Default)]
struct InMemoryRepo {
    records: Mutex<HashMap<String, PersonRecord>>,
}

impl InMemoryRepo {
    fn pipeline() -> (Arc<Self>, IngestPipeline) {
        let repo = Arc::new(Self::default());
        let pipeline = IngestPipeline::new(repo.clone());
        (repo, pipeline)
    }

    fn get(&self, nexa_id: &str) -> Option<PersonRecord> {
        self.records
            .lock()
            .ok()
            .and_then(|map| map.get(nexa_id).cloned())
    }
}

#[async_trait]
impl PersonRepo for InMemoryRepo {
    async fn find_by_nexa_id(&self, nexa_id: &str) -> anyhow::Result<Option<PersonRecord>> {
        Ok(self.get(nexa_id))
    }

    async fn insert(&self, record: &PersonRecord) -> anyhow::Result<()> {
        let mut map = self
            .records
            .lock()
            .map_err(|_| anyhow::anyhow!("store poisoned"))?;
        map.insert(record.nexa_id.clone(), record.clone());
        Ok(())
    }

    async fn update_and_append(&self, nexa_id: &str, update: &RecordUpdate) -> anyhow::Result<()> {
        let mut map = self
            .records
            .lock()
            .map_err(|_| anyhow::anyhow!("store poisoned"))?;
        let record = map
            .get_mut(nexa_id)
            .ok_or_else(|| anyhow::anyhow!("PersonRecord not found: {nexa_id}"))?;

        record.user_name = update.user_name.clone();
        record.phone = update.phone.clone();
        record.email = update.email.clone();
        record.profession_summary = update.profession_summary.clone();
        record.requested_to = update.requested_to.clone();
        record.networking_goals.push(update.goal.clone());
        record.meeting_history.push(update.meeting.clone());
        Ok(())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<PersonRecord>> {
        let map = self
            .records
            .lock()
            .map_err(|_| anyhow::anyhow!("store poisoned"))?;
        let mut records: Vec<PersonRecord> = map.values().cloned().collect();
        records.sort_by(|a, b| a.nexa_id.cmp(&b.nexa_id));
        Ok(records)
    }
}

fn alice_payload() -> serde_json::Value {
    json!({
        "message": {
            "nexa_id": "u1",
            "user_name": "Alice",
            "profession": "Engineer",
            "analysis": { "summary": "find CTOs" },
            "artifact": {
                "messages": [ { "message": "Let's meet 5 May 2025 at 2:00 PM" } ]
            }
        }
    })
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn first_delivery_creates_resubmission_updates() {
    let (repo, pipeline) = InMemoryRepo::pipeline();

    let first = pipeline
        .ingest_value(alice_payload())
        .await
        .expect("first delivery should be ingested");
    assert_eq!(first.nexa_id, "u1");
    assert_eq!(first.outcome, MergeOutcome::Created);

    let record = repo.get("u1").expect("record should be stored");
    assert_eq!(record.meeting_history.len(), 1);
    assert_eq!(record.meeting_history[0].date, "05-05-2025");
    assert_eq!(record.meeting_history[0].time, "2:00 PM");
    assert_eq!(
        record.meeting_history[0].context,
        "Vapi Webhook Data Processing"
    );

    let second = pipeline
        .ingest_value(alice_payload())
        .await
        .expect("resubmission should be ingested");
    assert_eq!(second.outcome, MergeOutcome::Updated);

    let record = repo.get("u1").expect("record should still be stored");
    assert_eq!(record.meeting_history.len(), 2);
    assert_eq!(record.networking_goals.len(), 2);
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn histories_grow_by_one_per_merge() {
    let (repo, pipeline) = InMemoryRepo::pipeline();

    for expected_len in 1..=4_usize {
        pipeline
            .ingest_value(alice_payload())
            .await
            .expect("delivery should be ingested");

        let record = repo.get("u1").expect("record should be stored");
        assert_eq!(record.networking_goals.len(), expected_len);
        assert_eq!(record.meeting_history.len(), expected_len);
    }

    let all = repo.list_all().await.expect("listing should succeed");
    assert_eq!(all.len(), 1, "same identity key merges into one record");
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn summary_fields_are_last_write_wins() {
    let (repo, pipeline) = InMemoryRepo::pipeline();

    pipeline
        .ingest_value(alice_payload())
        .await
        .expect("first delivery should be ingested");

    let mut changed = alice_payload();
    changed["message"]["profession"] = json!("CTO");
    changed["message"]["requested_to"] = json!("Bob");
    pipeline
        .ingest_value(changed)
        .await
        .expect("second delivery should be ingested");

    let record = repo.get("u1").expect("record should be stored");
    assert_eq!(record.profession_summary.bio, "CTO");
    assert_eq!(record.requested_to, "Bob");
    // Prior history entries are never rewritten.
    assert_eq!(record.networking_goals[0].goal, "find CTOs");
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn payloads_without_identity_collide_under_sentinel() {
    let (repo, pipeline) = InMemoryRepo::pipeline();

    let anonymous = json!({ "message": { "user_name": "Someone" } });
    let first = pipeline
        .ingest_value(anonymous.clone())
        .await
        .expect("delivery should be ingested");
    assert_eq!(first.nexa_id, "Unknown");
    assert_eq!(first.outcome, MergeOutcome::Created);

    let second = pipeline
        .ingest_value(anonymous)
        .await
        .expect("delivery should be ingested");
    assert_eq!(second.outcome, MergeOutcome::Updated);

    let record = repo.get("Unknown").expect("sentinel record should exist");
    assert_eq!(record.networking_goals.len(), 2);
}

#[tokio::test]
async fn non_object_body_is_refused() {
    let (repo, pipeline) = InMemoryRepo::pipeline();

    let result = pipeline.ingest_value(json!("not a payload")).await;
    assert!(matches!(result, Err(Error::InvalidPayload(_))));
    assert!(repo.get("Unknown").is_none(), "nothing may be fabricated");
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn suggest_match_finds_stored_goal() {
    let (_repo, pipeline) = InMemoryRepo::pipeline();

    let bob = json!({
        "message": {
            "nexa_id": "u2",
            "user_name": "Bob",
            "profession": "Data Scientist",
            "analysis": { "summary": "Looking for a Machine Learning mentor" }
        }
    });
    pipeline
        .ingest_value(bob)
        .await
        .expect("delivery should be ingested");

    let message = pipeline
        .suggest_match("machine learning")
        .await
        .expect("lookup should succeed");
    assert!(message.contains("Bob"));
    assert!(message.contains("Data Scientist"));
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn suggest_match_fallbacks() {
    let (_repo, pipeline) = InMemoryRepo::pipeline();

    let empty = pipeline
        .suggest_match("   ")
        .await
        .expect("lookup should succeed");
    assert_eq!(empty, matcher::NO_GOAL_MESSAGE);

    let miss = pipeline
        .suggest_match("quantum computing")
        .await
        .expect("lookup should succeed");
    assert_eq!(miss, matcher::KEEP_LOOKING_MESSAGE);
}
