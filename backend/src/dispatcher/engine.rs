//! Dispatcher Engine
//!
//! Owns both waiting queues and implements the five clinic operations:
//!
//! 1. **add_emergency**: admit to the emergency queue
//! 2. **add_regular**: admit to the tail of the regular queue
//! 3. **serve_next**: remove the next patient by strict precedence
//! 4. **list_waiting**: non-destructive view of both queues
//! 5. **estimate_wait**: linear wait estimate for a new regular patient
//!
//! # Selection Rule
//!
//! Emergencies always go first. While any emergency is waiting, no regular
//! patient is served, however long the regular queue is. Regulars can starve
//! under a steady stream of emergencies; there is no aging.
//!
//! # Wait Estimate
//!
//! `minutes = (regular_count + 1) * avg_service_time`. Waiting emergencies are
//! reported alongside but never enter the minute figure.

use crate::core::clock::{Clock, SystemClock};
use crate::core::config::{ConfigError, DispatcherConfig};
use crate::models::{Admission, AdmissionError, Patient, PatientClass, ServedPatient};
use crate::queues::{EmergencyQueue, RegularQueue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Both queues' contents in serve order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingList {
    /// Emergencies, earliest arrival first
    pub emergencies: Vec<Patient>,

    /// Regulars, head of queue first
    pub regulars: Vec<Patient>,
}

impl WaitingList {
    /// True when nobody is waiting in either queue
    pub fn is_empty(&self) -> bool {
        self.emergencies.is_empty() && self.regulars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.emergencies.len() + self.regulars.len()
    }

    /// All waiting patients in the order `serve_next` would return them
    pub fn in_serve_order(&self) -> impl Iterator<Item = &Patient> {
        self.emergencies.iter().chain(self.regulars.iter())
    }
}

/// Projected wait for a hypothetical new regular patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitEstimate {
    /// Place the new patient would take in the regular queue (1-based)
    pub position: usize,

    /// `position * avg_service_time`
    pub minutes: u64,

    /// Regular patients already waiting
    pub regulars_ahead: usize,

    /// Emergencies waiting; advisory only, not part of `minutes`
    pub emergencies_ahead: usize,

    /// Minutes per patient the estimate was computed with
    pub avg_service_time: u32,
}

/// Queue sizes read together
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueCounts {
    pub emergency: usize,
    pub regular: usize,
}

impl QueueCounts {
    pub fn total(&self) -> usize {
        self.emergency + self.regular
    }
}

/// Single-clinic patient dispatcher
///
/// Each dispatcher is an independent, caller-owned value; any number can
/// coexist.
///
/// # Example
/// ```
/// use clinic_queue_core::{Dispatcher, DispatcherConfig, PatientClass};
///
/// let mut dispatcher = Dispatcher::new(DispatcherConfig::new(10).unwrap()).unwrap();
/// dispatcher.add_regular("A").unwrap();
/// dispatcher.add_regular("B").unwrap();
/// dispatcher.add_emergency("C").unwrap();
///
/// let served = dispatcher.serve_next().unwrap();
/// assert_eq!(served.patient.name(), "C");
/// assert_eq!(served.class, PatientClass::Emergency);
///
/// assert_eq!(dispatcher.estimate_wait().minutes, 30);
/// ```
pub struct Dispatcher {
    config: DispatcherConfig,
    clock: Arc<dyn Clock>,
    emergencies: EmergencyQueue,
    regulars: RegularQueue,
    /// Sequence number handed to the next admitted patient
    next_arrival_seq: u64,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("emergencies", &self.emergencies)
            .field("regulars", &self.regulars)
            .field("next_arrival_seq", &self.next_arrival_seq)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Create a dispatcher stamping admissions with the wall clock
    ///
    /// # Errors
    /// [`ConfigError::NonPositiveServiceTime`] if `avg_service_time` is zero.
    pub fn new(config: DispatcherConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a dispatcher with an explicit time source
    pub fn with_clock(config: DispatcherConfig, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(avg_service_time = config.avg_service_time, "dispatcher created");
        Ok(Self {
            config,
            clock,
            emergencies: EmergencyQueue::new(),
            regulars: RegularQueue::new(),
            next_arrival_seq: 0,
        })
    }

    /// Admit an emergency patient
    ///
    /// # Errors
    /// [`AdmissionError::EmptyName`] if `name` is empty after trimming. The
    /// queues are left untouched.
    pub fn add_emergency(&mut self, name: &str) -> Result<Admission, AdmissionError> {
        let patient = self.admit(name, PatientClass::Emergency)?;
        self.emergencies.push(patient.clone());
        Ok(Admission {
            class: PatientClass::Emergency,
            patient,
        })
    }

    /// Admit a regular patient at the tail of the regular queue
    ///
    /// # Errors
    /// [`AdmissionError::EmptyName`] if `name` is empty after trimming. The
    /// queues are left untouched.
    pub fn add_regular(&mut self, name: &str) -> Result<Admission, AdmissionError> {
        let patient = self.admit(name, PatientClass::Regular)?;
        self.regulars.push(patient.clone());
        Ok(Admission {
            class: PatientClass::Regular,
            patient,
        })
    }

    /// Remove and return the next patient to treat
    ///
    /// Returns `None` when both queues are empty; that is a normal outcome
    /// meaning there is nothing to serve.
    pub fn serve_next(&mut self) -> Option<ServedPatient> {
        let served = if let Some(patient) = self.emergencies.pop() {
            ServedPatient {
                class: PatientClass::Emergency,
                patient,
            }
        } else if let Some(patient) = self.regulars.pop() {
            ServedPatient {
                class: PatientClass::Regular,
                patient,
            }
        } else {
            debug!("serve requested with no patients waiting");
            return None;
        };

        info!(
            class = %served.class,
            patient_id = served.patient.id(),
            arrival_seq = served.patient.arrival_seq(),
            emergencies_left = self.emergencies.len(),
            regulars_left = self.regulars.len(),
            "patient served"
        );
        Some(served)
    }

    /// Snapshot of everyone waiting, in serve order
    pub fn list_waiting(&self) -> WaitingList {
        let list = WaitingList {
            emergencies: self.emergencies.snapshot(),
            regulars: self.regulars.snapshot(),
        };
        debug!(
            emergencies = list.emergencies.len(),
            regulars = list.regulars.len(),
            "waiting list requested"
        );
        list
    }

    /// Estimate the wait for a new regular patient
    pub fn estimate_wait(&self) -> WaitEstimate {
        let regulars_ahead = self.regulars.len();
        let position = regulars_ahead + 1;
        let estimate = WaitEstimate {
            position,
            minutes: position as u64 * u64::from(self.config.avg_service_time),
            regulars_ahead,
            emergencies_ahead: self.emergencies.len(),
            avg_service_time: self.config.avg_service_time,
        };
        debug!(
            position = estimate.position,
            minutes = estimate.minutes,
            emergencies_ahead = estimate.emergencies_ahead,
            "wait estimated"
        );
        estimate
    }

    /// Both queue sizes
    pub fn counts(&self) -> QueueCounts {
        QueueCounts {
            emergency: self.emergencies.len(),
            regular: self.regulars.len(),
        }
    }

    pub fn emergency_count(&self) -> usize {
        self.emergencies.len()
    }

    pub fn regular_count(&self) -> usize {
        self.regulars.len()
    }

    pub fn total_waiting(&self) -> usize {
        self.emergencies.len() + self.regulars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emergencies.is_empty() && self.regulars.is_empty()
    }

    /// Configured minutes per patient
    pub fn avg_service_time(&self) -> u32 {
        self.config.avg_service_time
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Validate the name and build the patient; consumes a sequence number
    /// only on success
    fn admit(&mut self, name: &str, class: PatientClass) -> Result<Patient, AdmissionError> {
        let patient = match Patient::new(name, self.clock.now(), self.next_arrival_seq) {
            Ok(patient) => patient,
            Err(err) => {
                warn!(class = %class, error = %err, "admission rejected");
                return Err(err);
            }
        };
        self.next_arrival_seq += 1;

        info!(
            class = %class,
            patient_id = patient.id(),
            arrival_seq = patient.arrival_seq(),
            "patient admitted"
        );
        Ok(patient)
    }
}
