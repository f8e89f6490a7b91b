//! The reversible single lane: a capacity-bounded stack of vehicles.
//!
//! Vehicles enter and leave at the same end, so the lane is pure LIFO.
//! A vehicle buried under others can still be retrieved, but only by
//! temporarily backing out everything above it; `remove` does exactly
//! that and reports how many vehicles had to shuffle. The attendant's
//! effort is the interesting output here, which is why the move count
//! travels on every history record.

use bevy::prelude::*;

use crate::config;
use crate::vehicle::Plate;

#[derive(Resource, Debug)]
pub struct SingleLane {
    capacity: usize,
    /// Bottom of the lane first; the last element is the open end.
    stack: Vec<Plate>,
}

impl Default for SingleLane {
    fn default() -> Self {
        Self::with_capacity(config::LANE_CAPACITY)
    }
}

impl SingleLane {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            stack: Vec::with_capacity(capacity),
        }
    }

    /// Drive in at the open end. Returns `false` (and changes nothing)
    /// when the lane is already full.
    pub fn park(&mut self, plate: Plate) -> bool {
        if self.is_full() {
            return false;
        }
        self.stack.push(plate);
        true
    }

    /// Retrieve `plate` from anywhere in the lane.
    ///
    /// Every vehicle above the target backs out into a side row (one move
    /// each), the target drives off (not a move), and the side row backs
    /// in again in reverse order, so the survivors keep their relative
    /// order. Returns the move count, `Some(0)` when the target was
    /// already at the open end, or `None` (lane untouched) when the plate
    /// is not here.
    pub fn remove(&mut self, plate: &Plate) -> Option<u32> {
        if !self.contains(plate) {
            return None;
        }

        let mut displaced: Vec<Plate> = Vec::new();
        let mut moves: u32 = 0;

        // Dig down to the target, one vehicle at a time.
        while let Some(top) = self.stack.pop() {
            if &top == plate {
                break;
            }
            displaced.push(top);
            moves += 1;
        }

        // Back the displaced vehicles in again, last out first in.
        while let Some(vehicle) = displaced.pop() {
            self.stack.push(vehicle);
        }

        Some(moves)
    }

    pub fn contains(&self, plate: &Plate) -> bool {
        self.stack.iter().any(|p| p == plate)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.stack.len() >= self.capacity
    }

    pub fn empty_spots(&self) -> usize {
        self.capacity - self.stack.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plate> {
        self.stack.iter()
    }

    /// Bottom-to-top view of the lane.
    pub fn snapshot(&self) -> Vec<Plate> {
        self.stack.clone()
    }
}
