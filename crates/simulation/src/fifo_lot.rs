//! The drive-through lot: a capacity-bounded first-in-first-out row.
//!
//! Vehicles enter at the back and can only exit at the front, in arrival
//! order. There is no out-of-order removal here; a departure request for
//! a vehicle stuck behind others is physically impossible and the
//! departure system refuses it.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::config;
use crate::vehicle::Plate;

#[derive(Resource, Debug)]
pub struct FifoLot {
    capacity: usize,
    /// Front of the row first; exits happen at the front only.
    row: VecDeque<Plate>,
}

impl Default for FifoLot {
    fn default() -> Self {
        Self::with_capacity(config::LOT_CAPACITY)
    }
}

impl FifoLot {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            row: VecDeque::with_capacity(capacity),
        }
    }

    /// Drive in at the back. Returns `false` (and changes nothing) when
    /// the lot is already full.
    pub fn park(&mut self, plate: Plate) -> bool {
        if self.is_full() {
            return false;
        }
        self.row.push_back(plate);
        true
    }

    /// The front vehicle exits, or `None` when the lot is empty. This is
    /// the only way out.
    pub fn exit_front(&mut self) -> Option<Plate> {
        self.row.pop_front()
    }

    /// The plate currently at the exit, without moving it.
    pub fn front(&self) -> Option<&Plate> {
        self.row.front()
    }

    pub fn contains(&self, plate: &Plate) -> bool {
        self.row.contains(plate)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.row.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.row.len() >= self.capacity
    }

    pub fn empty_spots(&self) -> usize {
        self.capacity - self.row.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plate> {
        self.row.iter()
    }

    /// Front-to-back view of the row.
    pub fn snapshot(&self) -> Vec<Plate> {
        self.row.iter().cloned().collect()
    }
}
