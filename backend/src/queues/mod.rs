//! Waiting queues
//!
//! - **EmergencyQueue**: binary heap ordered by arrival sequence
//! - **RegularQueue**: strict FIFO
//!
//! Both hand out non-destructive snapshots for listing. Nothing here decides
//! which queue is served first; that precedence lives in the dispatcher.

pub mod emergency;
pub mod regular;

pub use emergency::EmergencyQueue;
pub use regular::RegularQueue;
