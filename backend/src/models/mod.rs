//! Domain models for the clinic queue

pub mod patient;

// Re-exports
pub use patient::{validate_name, Admission, AdmissionError, Patient, PatientClass, ServedPatient};
