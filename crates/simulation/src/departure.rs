//! Exit-gate handling: retrieval, billing, record keeping.
//!
//! `DepartureRequest` events name a plate that wants to leave. The
//! occupancy index says where the vehicle is and since when; the layout
//! gives it up (with a move count, for the lane); the tariff prices the
//! stay; the completed record lands at the front of the history log and
//! the occupancy entry is deleted. A request the facility cannot honor
//! (unknown plate, or a lot vehicle stuck behind others) is refused
//! without touching anything.

use bevy::prelude::*;

use crate::facility_params::FacilityParams;
use crate::fees::parking_fee;
use crate::fifo_lot::FifoLot;
use crate::history::{HistoryLog, ParkingRecord};
use crate::occupancy::{OccupancyEntry, OccupancyIndex};
use crate::sim_clock::SimClock;
use crate::single_lane::SingleLane;
use crate::stats::FacilityStats;
use crate::vehicle::{LayoutMode, Plate};
use crate::SimulationSet;

/// A parked vehicle asking to leave.
#[derive(Event, Debug, Clone)]
pub struct DepartureRequest {
    pub plate: Plate,
}

// =============================================================================
// Stay completion
// =============================================================================

/// Bill the stay, write the record, drop the occupancy entry, bump the
/// counters. Called only after the vehicle has physically left a layout.
fn complete_stay(
    plate: &Plate,
    entry: OccupancyEntry,
    moves: u32,
    clock: &SimClock,
    params: &FacilityParams,
    occupancy: &mut OccupancyIndex,
    history: &mut HistoryLog,
    stats: &mut FacilityStats,
) {
    let exited_at = clock.now();
    let minutes = clock.minutes_since(entry.entered_at);
    let fee = parking_fee(
        minutes,
        params.tariff.hourly_rate,
        params.tariff.min_charge_minutes,
    );

    history.add_front(ParkingRecord {
        plate: plate.clone(),
        entered_at: entry.entered_at,
        exited_at,
        minutes,
        fee,
        layout: entry.layout,
        moves,
    });
    occupancy.remove(plate);

    stats.departed += 1;
    stats.revenue += fee;
    stats.vehicle_moves += u64::from(moves);

    info!(
        "{} exits {} after {} min, fee {} ({} moves)",
        plate.as_str(),
        entry.layout.label(),
        minutes,
        fee,
        moves
    );
}

/// The occupancy index said the vehicle was in a layout but the layout
/// disagrees. That is a bug in whatever mutated the layout directly;
/// drop the stale entry so the index matches reality again.
fn heal_divergence(plate: &Plate, occupancy: &mut OccupancyIndex) {
    debug_assert!(
        false,
        "occupancy entry for {} points at a layout that does not hold it",
        plate.as_str()
    );
    warn!(
        "{} indexed but missing from its layout; dropping the stale entry",
        plate.as_str()
    );
    occupancy.remove(plate);
}

// =============================================================================
// System
// =============================================================================

pub fn process_departures(
    mut requests: EventReader<DepartureRequest>,
    clock: Res<SimClock>,
    params: Res<FacilityParams>,
    mut lane: ResMut<SingleLane>,
    mut lot: ResMut<FifoLot>,
    mut occupancy: ResMut<OccupancyIndex>,
    mut history: ResMut<HistoryLog>,
    mut stats: ResMut<FacilityStats>,
) {
    for request in requests.read() {
        let plate = &request.plate;

        let Some(entry) = occupancy.get(plate).copied() else {
            warn!(
                "departure request for {} ignored: not in the facility",
                plate.as_str()
            );
            stats.unknown_departures += 1;
            continue;
        };

        match entry.layout {
            LayoutMode::SingleLane => match lane.remove(plate) {
                Some(moves) => complete_stay(
                    plate,
                    entry,
                    moves,
                    &clock,
                    &params,
                    &mut occupancy,
                    &mut history,
                    &mut stats,
                ),
                None => heal_divergence(plate, &mut occupancy),
            },
            LayoutMode::Fifo => {
                if lot.front() == Some(plate) {
                    lot.exit_front();
                    complete_stay(
                        plate,
                        entry,
                        0,
                        &clock,
                        &params,
                        &mut occupancy,
                        &mut history,
                        &mut stats,
                    );
                } else if lot.contains(plate) {
                    // Physically stuck behind other vehicles; the request
                    // stands refused until the vehicle reaches the front.
                    info!(
                        "{} cannot exit the lot yet: {} vehicles ahead",
                        plate.as_str(),
                        lot.iter().take_while(|p| *p != plate).count()
                    );
                    stats.blocked_exits += 1;
                } else {
                    heal_divergence(plate, &mut occupancy);
                }
            }
        }
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct DeparturePlugin;

impl Plugin for DeparturePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DepartureRequest>().add_systems(
            FixedUpdate,
            process_departures
                .in_set(SimulationSet::Simulation)
                .after(crate::admission::process_arrivals),
        );
    }
}
