//! Emergency queue
//!
//! All emergencies share one priority tier, so the heap is keyed on the
//! arrival sequence alone: the earliest admitted emergency is always on top.
//! The heap stays (rather than a plain deque) so that a severity level can be
//! added to the key without touching callers.

use crate::models::Patient;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry; ordering is reversed so `BinaryHeap` pops the lowest sequence
#[derive(Debug, Clone)]
struct Entry(Patient);

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.0.arrival_seq() == other.0.arrival_seq()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.arrival_seq().cmp(&self.0.arrival_seq())
    }
}

/// Emergency patients, earliest arrival first
#[derive(Debug, Clone, Default)]
pub struct EmergencyQueue {
    heap: BinaryHeap<Entry>,
}

impl EmergencyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, patient: Patient) {
        self.heap.push(Entry(patient));
    }

    /// Remove the earliest-arrived emergency
    pub fn pop(&mut self) -> Option<Patient> {
        self.heap.pop().map(|entry| entry.0)
    }

    /// Earliest-arrived emergency, without removing it
    pub fn peek(&self) -> Option<&Patient> {
        self.heap.peek().map(|entry| &entry.0)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Copy of the waiting emergencies in the order `pop` would return them
    ///
    /// The heap's internal layout is not sorted, so the copy is sorted by
    /// arrival sequence. The live heap is never touched.
    pub fn snapshot(&self) -> Vec<Patient> {
        let mut patients: Vec<Patient> = self.heap.iter().map(|entry| entry.0.clone()).collect();
        patients.sort_by_key(Patient::arrival_seq);
        patients
    }
}
