//! Service layer for content-tracker
//!
//! Validation, the continuation-day rule and the orchestrator batch rule,
//! sitting between the CLI and storage.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod batch;
mod error;
mod sequence_tracker;

pub use batch::{BatchLogger, BatchReport, CandidateIdea, LoggedIdea};
pub use error::TrackerError;
pub use sequence_tracker::{LogOutcome, SequenceTracker};
