//! Dispatcher - admission, selection, listing and wait estimation
//!
//! See `engine.rs` for the single-owner dispatcher and `shared.rs` for the
//! mutex-guarded handle.

pub mod engine;
pub mod shared;

// Re-export main types for convenience
pub use engine::{Dispatcher, QueueCounts, WaitEstimate, WaitingList};
pub use shared::SharedDispatcher;
