//! Random traffic at the gates, driven by the simulation RNG so runs are
//! reproducible seed for seed.
//!
//! Each tick this may mint one arrival (a fresh plate not currently in
//! the facility) and one departure request. Departure requests only name
//! plates that can actually leave: any lane vehicle (digging them out is
//! the lane's job) or the lot front. Blocked lot exits therefore never
//! come from here, only from external callers or tests.

use bevy::prelude::*;
use rand::Rng;

use crate::admission::VehicleArrival;
use crate::departure::DepartureRequest;
use crate::facility_params::FacilityParams;
use crate::fifo_lot::FifoLot;
use crate::occupancy::OccupancyIndex;
use crate::sim_rng::SimRng;
use crate::single_lane::SingleLane;
use crate::vehicle::Plate;
use crate::waiting_line::WaitingLine;
use crate::SimulationSet;

pub fn generate_traffic(
    mut rng: ResMut<SimRng>,
    params: Res<FacilityParams>,
    lane: Res<SingleLane>,
    lot: Res<FifoLot>,
    line: Res<WaitingLine>,
    occupancy: Res<OccupancyIndex>,
    mut arrivals: EventWriter<VehicleArrival>,
    mut departures: EventWriter<DepartureRequest>,
) {
    if rng.0.gen_bool(params.traffic.arrival_chance) {
        // Re-mint on collision; the plate space is large enough that this
        // loop practically never repeats.
        let plate = loop {
            let candidate = Plate::random(&mut rng.0);
            if !occupancy.contains(&candidate) && !line.contains(&candidate) {
                break candidate;
            }
        };
        arrivals.send(VehicleArrival { plate });
    }

    if rng.0.gen_bool(params.traffic.departure_chance) {
        // Lane vehicles in lane order, then the lot front if there is one.
        let mut leavers: Vec<Plate> = lane.iter().cloned().collect();
        if let Some(front) = lot.front() {
            leavers.push(front.clone());
        }
        if !leavers.is_empty() {
            let pick = rng.0.gen_range(0..leavers.len());
            departures.send(DepartureRequest {
                plate: leavers.swap_remove(pick),
            });
        }
    }
}

pub struct VehicleSpawnerPlugin;

impl Plugin for VehicleSpawnerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            generate_traffic
                .in_set(SimulationSet::PreSim)
                .after(crate::sim_clock::tick_sim_clock),
        );
    }
}
