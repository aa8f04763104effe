#![warn(
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

mod convert;
pub mod extraction;
pub mod mapper;
pub mod matcher;
mod pipeline;
pub mod storage;

pub use extraction::{MeetingTime, NOT_PROVIDED, extract_meeting};
pub use mapper::map_payload;
pub use pipeline::{IngestPipeline, IngestReport};
pub use storage::StorageEngine;
