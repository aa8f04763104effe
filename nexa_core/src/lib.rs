#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod payload;
pub mod record;

pub use error::{Error, Result};
pub use payload::{CallAnalysis, CallArtifact, CallMessage, CallPayload, TranscriptLine};
pub use record::{
    MeetingEntry, MergeOutcome, NetworkingGoal, PersonFragment, PersonRecord, PersonRepo,
    ProfessionSummary, RecordUpdate,
};
