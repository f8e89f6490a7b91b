use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::fifo_lot::FifoLot;
use crate::single_lane::SingleLane;
use crate::waiting_line::WaitingLine;

/// Facility-wide figures. The occupancy gauges are recomputed on the
/// slow-tick cadence; the lifetime counters are bumped by the admission
/// and departure systems as the traffic flows.
#[derive(Resource, Default, Debug, Clone, Serialize, Deserialize)]
pub struct FacilityStats {
    // Gauges
    pub lane_occupied: usize,
    pub lot_occupied: usize,
    pub waiting: usize,
    pub free_spots: usize,
    // Lifetime counters
    pub admitted: u64,
    pub promoted_from_line: u64,
    pub refused_duplicates: u64,
    pub departed: u64,
    pub blocked_exits: u64,
    pub unknown_departures: u64,
    pub revenue: u64,
    pub vehicle_moves: u64,
}

impl FacilityStats {
    /// Vehicles currently parked across both layouts.
    pub fn occupied(&self) -> usize {
        self.lane_occupied + self.lot_occupied
    }
}

pub fn update_stats(
    slow_tick: Res<crate::SlowTickTimer>,
    lane: Res<SingleLane>,
    lot: Res<FifoLot>,
    line: Res<WaitingLine>,
    mut stats: ResMut<FacilityStats>,
) {
    if !slow_tick.should_run() {
        return;
    }
    stats.lane_occupied = lane.len();
    stats.lot_occupied = lot.len();
    stats.waiting = line.len();
    stats.free_spots = lane.empty_spots() + lot.empty_spots();
}

pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FacilityStats>().add_systems(
            FixedUpdate,
            update_stats.in_set(crate::SimulationSet::PostSim),
        );
    }
}
