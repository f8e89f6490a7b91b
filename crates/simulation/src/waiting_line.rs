//! The gate queue: vehicles that arrived while the facility was full (or
//! while others were already waiting) hold here in arrival order.
//!
//! The line is deliberately policy-free: it accepts any plate, grows
//! without bound, and does not check for duplicates. Admission owns the
//! policy (dedupe, fairness, promotion); see `admission.rs`.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::vehicle::Plate;

#[derive(Resource, Debug, Default)]
pub struct WaitingLine {
    plates: VecDeque<Plate>,
}

impl WaitingLine {
    /// Join the back of the line. Always succeeds.
    pub fn enqueue(&mut self, plate: Plate) {
        self.plates.push_back(plate);
    }

    /// Leave the front of the line, or `None` when nobody is waiting.
    pub fn dequeue(&mut self) -> Option<Plate> {
        self.plates.pop_front()
    }

    /// The plate that would be dequeued next, without removing it.
    pub fn peek(&self) -> Option<&Plate> {
        self.plates.front()
    }

    pub fn len(&self) -> usize {
        self.plates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    pub fn contains(&self, plate: &Plate) -> bool {
        self.plates.contains(plate)
    }

    /// Front-to-back view of everyone waiting.
    pub fn snapshot(&self) -> Vec<Plate> {
        self.plates.iter().cloned().collect()
    }
}
