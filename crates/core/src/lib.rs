//! Core types for content-tracker
//!
//! Domain types shared by the storage, service and CLI crates: categories,
//! log entries, the continuation-day rule, the clock abstraction and
//! environment-driven configuration.

mod category;
mod clock;
mod config;
pub mod constants;
mod entry;
pub mod env_config;
mod error;
mod sequence;
mod stats;

pub use category::{Category, CategorySet};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::TrackerConfig;
pub use entry::{Entry, NewEntry, normalize_title};
pub use error::{CoreError, Result};
pub use sequence::DaySnapshot;
pub use stats::{CategoryStats, TrackerStats};
