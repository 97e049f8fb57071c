//! Thread-safe dispatcher handle
//!
//! The two queues are the only shared mutable state. Every operation holds one
//! lock for its whole duration, so callers always observe both queues at the
//! same instant.

use super::engine::{Dispatcher, QueueCounts, WaitEstimate, WaitingList};
use crate::models::{Admission, AdmissionError, ServedPatient};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to one dispatcher shared between threads
///
/// # Example
/// ```
/// use clinic_queue_core::{Dispatcher, DispatcherConfig, SharedDispatcher};
///
/// let shared = SharedDispatcher::new(Dispatcher::new(DispatcherConfig::default()).unwrap());
/// let handle = shared.clone();
///
/// std::thread::spawn(move || handle.add_emergency("Ana").unwrap())
///     .join()
///     .unwrap();
///
/// assert_eq!(shared.counts().emergency, 1);
/// ```
#[derive(Debug, Clone)]
pub struct SharedDispatcher {
    inner: Arc<Mutex<Dispatcher>>,
}

impl SharedDispatcher {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dispatcher)),
        }
    }

    pub fn add_emergency(&self, name: &str) -> Result<Admission, AdmissionError> {
        self.lock().add_emergency(name)
    }

    pub fn add_regular(&self, name: &str) -> Result<Admission, AdmissionError> {
        self.lock().add_regular(name)
    }

    pub fn serve_next(&self) -> Option<ServedPatient> {
        self.lock().serve_next()
    }

    pub fn list_waiting(&self) -> WaitingList {
        self.lock().list_waiting()
    }

    pub fn estimate_wait(&self) -> WaitEstimate {
        self.lock().estimate_wait()
    }

    pub fn counts(&self) -> QueueCounts {
        self.lock().counts()
    }

    /// Waiting list and wait estimate taken under one lock
    pub fn snapshot(&self) -> (WaitingList, WaitEstimate) {
        let dispatcher = self.lock();
        (dispatcher.list_waiting(), dispatcher.estimate_wait())
    }

    /// Run `f` with exclusive access to the dispatcher
    pub fn with<R>(&self, f: impl FnOnce(&mut Dispatcher) -> R) -> R {
        f(&mut self.lock())
    }

    // Queue mutations are single push/pop calls that cannot leave a queue
    // half-updated, so the state behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, Dispatcher> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Dispatcher> for SharedDispatcher {
    fn from(dispatcher: Dispatcher) -> Self {
        Self::new(dispatcher)
    }
}
