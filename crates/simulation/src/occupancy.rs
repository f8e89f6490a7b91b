//! Plate-indexed occupancy entries.
//!
//! One entry per vehicle currently parked, keyed by plate, holding what
//! exit-time billing needs (entry minute and which layout to pull the
//! vehicle from). Kept so the departure system never has to scan the
//! layouts to answer "is this plate here, and since when".
//!
//! This is not a cache: a plate parked in a layout without an entry here
//! (or the reverse) is a bug. Admission and promotion write entries,
//! departure deletes them, nothing else touches the map.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vehicle::{LayoutMode, Plate};

/// What the facility knows about one parked vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyEntry {
    /// Clock minute the vehicle was parked.
    pub entered_at: u64,
    /// Layout the vehicle was assigned to.
    pub layout: LayoutMode,
}

#[derive(Resource, Debug, Default)]
pub struct OccupancyIndex {
    entries: HashMap<Plate, OccupancyEntry>,
}

impl OccupancyIndex {
    /// Record a parked vehicle. A second put for the same plate replaces
    /// the first; admission guarantees that never happens for a live
    /// vehicle.
    pub fn put(&mut self, plate: Plate, entry: OccupancyEntry) {
        self.entries.insert(plate, entry);
    }

    pub fn get(&self, plate: &Plate) -> Option<&OccupancyEntry> {
        self.entries.get(plate)
    }

    /// Delete and return the entry for a departing vehicle.
    pub fn remove(&mut self, plate: &Plate) -> Option<OccupancyEntry> {
        self.entries.remove(plate)
    }

    pub fn contains(&self, plate: &Plate) -> bool {
        self.entries.contains_key(plate)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Plate, &OccupancyEntry)> {
        self.entries.iter()
    }
}
