//! Patient model
//!
//! A patient exists only while queued. Each one has:
//! - A generated unique id (UUID), so equal names stay distinct
//! - A trimmed, non-empty display name
//! - An admission timestamp (display only)
//! - An arrival sequence number (authoritative arrival order)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when admitting a patient
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdmissionError {
    #[error("Name cannot be empty")]
    EmptyName,
}

/// Which queue a patient was admitted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatientClass {
    /// Served before every regular patient
    Emergency,

    /// Served first-come, first-served once no emergency is waiting
    Regular,
}

impl fmt::Display for PatientClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatientClass::Emergency => write!(f, "emergency"),
            PatientClass::Regular => write!(f, "regular"),
        }
    }
}

/// A waiting patient
///
/// Immutable once created.
///
/// # Example
/// ```
/// use chrono::Utc;
/// use clinic_queue_core::{AdmissionError, Patient};
///
/// let patient = Patient::new("  Ada Lovelace ", Utc::now(), 0).unwrap();
/// assert_eq!(patient.name(), "Ada Lovelace");
///
/// assert_eq!(Patient::new("   ", Utc::now(), 1), Err(AdmissionError::EmptyName));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Unique patient identifier (UUID)
    id: String,

    /// Display name, trimmed
    name: String,

    /// When the patient was admitted
    admitted_at: DateTime<Utc>,

    /// Position in the dispatcher's global arrival order
    arrival_seq: u64,
}

impl Patient {
    /// Create a patient from a raw display name
    ///
    /// The name is trimmed; an empty result is rejected.
    pub fn new(
        name: &str,
        admitted_at: DateTime<Utc>,
        arrival_seq: u64,
    ) -> Result<Self, AdmissionError> {
        let name = validate_name(name)?;
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            admitted_at,
            arrival_seq,
        })
    }

    /// Get patient ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get admission timestamp
    pub fn admitted_at(&self) -> DateTime<Utc> {
        self.admitted_at
    }

    /// Get arrival sequence number
    pub fn arrival_seq(&self) -> u64 {
        self.arrival_seq
    }
}

/// Trim a display name, rejecting names that are empty afterwards
pub fn validate_name(name: &str) -> Result<&str, AdmissionError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AdmissionError::EmptyName);
    }
    Ok(trimmed)
}

/// Confirmation returned by a successful admit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admission {
    pub class: PatientClass,
    pub patient: Patient,
}

/// A patient removed from the queues for treatment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServedPatient {
    pub class: PatientClass,
    pub patient: Patient,
}

impl ServedPatient {
    pub fn is_emergency(&self) -> bool {
        self.class == PatientClass::Emergency
    }
}
