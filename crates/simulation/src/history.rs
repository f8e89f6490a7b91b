//! Completed-stay records, newest first.
//!
//! Every successful departure appends one immutable record at the front.
//! The log itself grows without bound (there is no retention policy); the
//! bounded part is the read side, where `recent` hands back at most the
//! requested number of newest records for reporting.

use std::collections::VecDeque;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::vehicle::{LayoutMode, Plate};

/// One finished stay. Built by the departure system at exit time and
/// never touched again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingRecord {
    pub plate: Plate,
    /// Clock minute the vehicle was parked.
    pub entered_at: u64,
    /// Clock minute the vehicle left.
    pub exited_at: u64,
    /// Whole minutes between entry and exit.
    pub minutes: u64,
    /// Fee charged at the exit gate.
    pub fee: u64,
    /// Layout the vehicle occupied.
    pub layout: LayoutMode,
    /// Vehicles shuffled to dig this one out (always 0 for the lot).
    pub moves: u32,
}

#[derive(Resource, Debug)]
pub struct HistoryLog {
    /// Newest record first.
    records: VecDeque<ParkingRecord>,
    /// Default cap for `recent_default` reads.
    recent_limit: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_recent_limit(config::HISTORY_RECENT_LIMIT)
    }
}

impl HistoryLog {
    pub fn with_recent_limit(recent_limit: usize) -> Self {
        Self {
            records: VecDeque::new(),
            recent_limit,
        }
    }

    /// Prepend a freshly completed stay.
    pub fn add_front(&mut self, record: ParkingRecord) {
        self.records.push_front(record);
    }

    /// Up to `limit` most recent records, newest first.
    pub fn recent(&self, limit: usize) -> Vec<ParkingRecord> {
        self.records.iter().take(limit).cloned().collect()
    }

    /// `recent` with the configured default limit.
    pub fn recent_default(&self) -> Vec<ParkingRecord> {
        self.recent(self.recent_limit)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Newest record, if any stay has completed yet.
    pub fn latest(&self) -> Option<&ParkingRecord> {
        self.records.front()
    }
}
