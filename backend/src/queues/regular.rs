//! Regular queue: insertion order is queue position

use crate::models::Patient;
use std::collections::VecDeque;

/// Regular patients, strict FIFO
#[derive(Debug, Clone, Default)]
pub struct RegularQueue {
    patients: VecDeque<Patient>,
}

impl RegularQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the tail
    pub fn push(&mut self, patient: Patient) {
        self.patients.push_back(patient);
    }

    /// Remove the head
    pub fn pop(&mut self) -> Option<Patient> {
        self.patients.pop_front()
    }

    pub fn peek(&self) -> Option<&Patient> {
        self.patients.front()
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Copy of the queue, head first
    pub fn snapshot(&self) -> Vec<Patient> {
        self.patients.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_fifo_order() {
        let mut queue = RegularQueue::new();
        for (seq, name) in ["r1", "r2", "r3"].iter().enumerate() {
            queue.push(Patient::new(name, Utc::now(), seq as u64).unwrap());
        }

        assert_eq!(queue.peek().map(Patient::name), Some("r1"));
        let names: Vec<String> = std::iter::from_fn(|| queue.pop())
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["r1", "r2", "r3"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_snapshot_does_not_drain() {
        let mut queue = RegularQueue::new();
        queue.push(Patient::new("only", Utc::now(), 0).unwrap());

        assert_eq!(queue.snapshot().len(), 1);
        assert_eq!(queue.snapshot().len(), 1);
        assert_eq!(queue.len(), 1);
    }
}
