//! Clinic Queue Core - Dispatch Engine
//!
//! Patient intake for a single-clinic queue: emergencies and regular arrivals
//! are admitted, a dispatcher picks who is served next and estimates waits
//! for new arrivals.
//!
//! # Architecture
//!
//! - **core**: Clock abstraction and configuration
//! - **models**: Domain types (Patient, PatientClass, admission results)
//! - **queues**: Emergency heap and regular FIFO
//! - **dispatcher**: Selection policy, listing, wait estimation
//!
//! # Critical Invariants
//!
//! 1. A waiting emergency is always served before any regular patient
//! 2. Within a queue, patients leave in arrival order
//! 3. Listing never mutates either queue
//! 4. Rejected admissions leave all state untouched

// Module declarations
pub mod core;
pub mod dispatcher;
pub mod models;
pub mod queues;

// Re-exports for convenience
pub use crate::core::clock::{Clock, ManualClock, SystemClock};
pub use crate::core::config::{ConfigError, DispatcherConfig, DEFAULT_AVG_SERVICE_TIME};
pub use dispatcher::{Dispatcher, QueueCounts, SharedDispatcher, WaitEstimate, WaitingList};
pub use models::{Admission, AdmissionError, Patient, PatientClass, ServedPatient};
