//! Pattern extraction over call transcripts.
//!
//! The only pattern currently recognized is a compound meeting mention,
//! "<day> <month name> <year> at <hour>:<minute> <AM|PM>".

mod meeting;

pub use meeting::{MeetingTime, NOT_PROVIDED, extract_meeting};
