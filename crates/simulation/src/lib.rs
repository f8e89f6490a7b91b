use bevy::prelude::*;

pub mod admission;
pub mod config;
pub mod departure;
pub mod facility_params;
pub mod fees;
pub mod fifo_lot;
pub mod history;
pub mod occupancy;
pub mod reporting;
pub mod sim_clock;
pub mod sim_rng;
pub mod simulation_sets;
pub mod single_lane;
pub mod stats;
pub mod vehicle;
pub mod vehicle_spawner;
pub mod waiting_line;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use simulation_sets::SimulationSet;

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Global tick counter incremented each FixedUpdate, used for throttling simulation systems.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

/// Shared throttle timer for systems that don't need to run every tick
/// (stats refresh, the facility summary).
#[derive(Resource, Default)]
pub struct SlowTickTimer {
    pub counter: u32,
}

impl SlowTickTimer {
    pub const INTERVAL: u32 = config::SLOW_TICK_INTERVAL;

    pub fn tick(&mut self) {
        self.counter += 1;
    }

    pub fn should_run(&self) -> bool {
        self.counter.is_multiple_of(Self::INTERVAL)
    }
}

pub fn tick_slow_timer(mut timer: ResMut<SlowTickTimer>, mut tick: ResMut<TickCounter>) {
    timer.tick();
    tick.0 = tick.0.wrapping_add(1);
}

// ---------------------------------------------------------------------------
// Root plugin
// ---------------------------------------------------------------------------

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::PreSim,
                SimulationSet::Simulation,
                SimulationSet::PostSim,
            )
                .chain(),
        );

        // Core resources and systems that don't belong to any feature
        app.init_resource::<TickCounter>()
            .init_resource::<SlowTickTimer>()
            .init_resource::<sim_clock::SimClock>()
            .init_resource::<single_lane::SingleLane>()
            .init_resource::<fifo_lot::FifoLot>()
            .init_resource::<waiting_line::WaitingLine>()
            .init_resource::<occupancy::OccupancyIndex>()
            .init_resource::<history::HistoryLog>()
            .add_systems(
                FixedUpdate,
                (tick_slow_timer, sim_clock::tick_sim_clock).in_set(SimulationSet::PreSim),
            );

        // Configuration, randomness, traffic
        app.add_plugins((
            sim_rng::SimRngPlugin,
            facility_params::FacilityParamsPlugin,
            vehicle_spawner::VehicleSpawnerPlugin,
        ));

        // Gate flow
        app.add_plugins((admission::AdmissionPlugin, departure::DeparturePlugin));

        // Aggregation and reporting
        app.add_plugins((stats::StatsPlugin, reporting::ReportingPlugin));
    }
}
