//! Entry-gate admission and waiting-line promotion.
//!
//! `VehicleArrival` events come in from the traffic generator (or a test
//! harness); this module decides where each vehicle goes. The facility
//! assigns layouts itself: the single lane is the primary layout and the
//! lot takes the overflow. Two policies live here and nowhere else:
//!
//! * **Dedupe**: a plate already parked or waiting is refused outright.
//! * **Fairness**: while anyone is waiting, a newcomer joins the back of
//!   the line even if a spot happens to be free; only the promotion
//!   system (which runs after departures) moves vehicles out of the line.

use bevy::prelude::*;

use crate::fifo_lot::FifoLot;
use crate::occupancy::{OccupancyEntry, OccupancyIndex};
use crate::sim_clock::SimClock;
use crate::single_lane::SingleLane;
use crate::stats::FacilityStats;
use crate::vehicle::{LayoutMode, Plate};
use crate::waiting_line::WaitingLine;
use crate::SimulationSet;

/// A vehicle pulling up to the entry gate.
#[derive(Event, Debug, Clone)]
pub struct VehicleArrival {
    pub plate: Plate,
}

// =============================================================================
// Assignment
// =============================================================================

/// Try the lane first, then the lot. Returns the layout that took the
/// vehicle, or `None` when the whole facility is full.
fn assign_to_layout(plate: &Plate, lane: &mut SingleLane, lot: &mut FifoLot) -> Option<LayoutMode> {
    if lane.park(plate.clone()) {
        return Some(LayoutMode::SingleLane);
    }
    if lot.park(plate.clone()) {
        return Some(LayoutMode::Fifo);
    }
    None
}

// =============================================================================
// Systems
// =============================================================================

/// Handles this tick's arrivals: refuse duplicates, queue behind any
/// existing line, otherwise park and index.
pub fn process_arrivals(
    mut arrivals: EventReader<VehicleArrival>,
    clock: Res<SimClock>,
    mut lane: ResMut<SingleLane>,
    mut lot: ResMut<FifoLot>,
    mut line: ResMut<WaitingLine>,
    mut occupancy: ResMut<OccupancyIndex>,
    mut stats: ResMut<FacilityStats>,
) {
    for arrival in arrivals.read() {
        let plate = &arrival.plate;

        if occupancy.contains(plate) || line.contains(plate) {
            warn!(
                "{} refused at the gate: plate already parked or waiting",
                plate.as_str()
            );
            stats.refused_duplicates += 1;
            continue;
        }

        // Nobody jumps a non-empty line.
        if !line.is_empty() {
            line.enqueue(plate.clone());
            info!(
                "{} joins the waiting line behind {} others",
                plate.as_str(),
                line.len() - 1
            );
            continue;
        }

        match assign_to_layout(plate, &mut lane, &mut lot) {
            Some(layout) => {
                occupancy.put(
                    plate.clone(),
                    OccupancyEntry {
                        entered_at: clock.now(),
                        layout,
                    },
                );
                stats.admitted += 1;
                info!("{} parked ({})", plate.as_str(), layout.label());
            }
            None => {
                line.enqueue(plate.clone());
                info!("facility full, {} starts the waiting line", plate.as_str());
            }
        }
    }
}

/// Moves waiting vehicles into spots freed by this tick's departures,
/// strictly from the front of the line.
pub fn promote_from_waiting_line(
    clock: Res<SimClock>,
    mut lane: ResMut<SingleLane>,
    mut lot: ResMut<FifoLot>,
    mut line: ResMut<WaitingLine>,
    mut occupancy: ResMut<OccupancyIndex>,
    mut stats: ResMut<FacilityStats>,
) {
    while !line.is_empty() && (!lane.is_full() || !lot.is_full()) {
        let Some(plate) = line.dequeue() else {
            break;
        };
        let Some(layout) = assign_to_layout(&plate, &mut lane, &mut lot) else {
            // Both layouts filled up between the check and the park.
            // Cannot happen single-threaded, but restore rather than lose
            // the vehicle.
            line.enqueue(plate);
            break;
        };
        occupancy.put(
            plate.clone(),
            OccupancyEntry {
                entered_at: clock.now(),
                layout,
            },
        );
        stats.admitted += 1;
        stats.promoted_from_line += 1;
        info!(
            "{} promoted from the waiting line ({})",
            plate.as_str(),
            layout.label()
        );
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct AdmissionPlugin;

impl Plugin for AdmissionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<VehicleArrival>().add_systems(
            FixedUpdate,
            (
                process_arrivals.in_set(SimulationSet::Simulation),
                promote_from_waiting_line
                    .in_set(SimulationSet::Simulation)
                    .after(crate::departure::process_departures),
            ),
        );
    }
}
