//! # TestFacility — headless integration test harness
//!
//! Provides a fluent builder that wraps `bevy::app::App` + `SimulationPlugin`
//! for running integration tests without a window or renderer.

mod assertions;
mod queries;
mod setup;

use bevy::app::App;
use bevy::prelude::*;

use crate::facility_params::FacilityParams;
use crate::sim_rng::SimRng;
use crate::SimulationPlugin;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Use builder methods to set up facility state, then call `tick()` to
/// advance the simulation and query/assert on the resulting ECS state.
pub struct TestFacility {
    app: App,
}

impl TestFacility {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Create a quiet facility: default capacities and tariff, but the
    /// random traffic generator disabled so tests control every arrival
    /// and departure themselves.
    pub fn new() -> Self {
        let mut params = FacilityParams::default();
        params.traffic.arrival_chance = 0.0;
        params.traffic.departure_chance = 0.0;
        Self::with_params(params)
    }

    /// Create a facility with the given params (random traffic included,
    /// if the params say so).
    pub fn with_params(params: FacilityParams) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Insert overrides BEFORE SimulationPlugin so init_resource keeps them.
        app.insert_resource(params);
        app.add_plugins(SimulationPlugin);

        // Run one update so Startup systems execute (the layouts get sized
        // from the params before any builder touches them).
        app.update();

        Self { app }
    }

    /// `new()` plus a seeded RNG, for deterministic random-traffic runs.
    pub fn with_traffic(seed: u64) -> Self {
        let mut facility = Self::with_params(FacilityParams::default());
        facility
            .app
            .world_mut()
            .insert_resource(SimRng::from_seed_u64(seed));
        facility
    }
}

impl Default for TestFacility {
    fn default() -> Self {
        Self::new()
    }
}
