//! Event injection, simulation-tick, and query methods for `TestFacility`.

use bevy::prelude::*;

use crate::admission::VehicleArrival;
use crate::departure::DepartureRequest;
use crate::facility_params::FacilityParams;
use crate::fifo_lot::FifoLot;
use crate::history::HistoryLog;
use crate::occupancy::OccupancyIndex;
use crate::sim_clock::SimClock;
use crate::single_lane::SingleLane;
use crate::stats::FacilityStats;
use crate::vehicle::Plate;
use crate::waiting_line::WaitingLine;
use crate::SlowTickTimer;

use super::TestFacility;

impl TestFacility {
    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Run N fixed-update ticks by directly executing the `FixedUpdate`
    /// schedule. This bypasses Bevy's time system entirely, which avoids
    /// issues with `MinimalPlugins` + `ScheduleRunnerPlugin` not advancing
    /// virtual time between updates.
    ///
    /// A `yield_now()` is inserted between ticks so that background threads
    /// get a chance to make progress even when the test drives the schedule
    /// in a tight loop on a low-core CI runner.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
            std::thread::yield_now();
        }
    }

    /// Run until the SlowTickTimer fires at least once.
    pub fn tick_slow_cycle(&mut self) {
        self.tick(SlowTickTimer::INTERVAL);
    }

    // -----------------------------------------------------------------------
    // Gate events
    // -----------------------------------------------------------------------

    /// Queue an arrival; the next tick's admission system handles it.
    pub fn arrive(&mut self, plate: &str) {
        self.app.world_mut().send_event(VehicleArrival {
            plate: Plate::new(plate),
        });
    }

    /// Queue a departure request; the next tick's departure system
    /// handles it.
    pub fn depart(&mut self, plate: &str) {
        self.app.world_mut().send_event(DepartureRequest {
            plate: Plate::new(plate),
        });
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Access the ECS world mutably.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    /// Get any resource by type.
    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn lane(&self) -> &SingleLane {
        self.resource::<SingleLane>()
    }

    pub fn lot(&self) -> &FifoLot {
        self.resource::<FifoLot>()
    }

    pub fn line(&self) -> &WaitingLine {
        self.resource::<WaitingLine>()
    }

    pub fn occupancy(&self) -> &OccupancyIndex {
        self.resource::<OccupancyIndex>()
    }

    pub fn history(&self) -> &HistoryLog {
        self.resource::<HistoryLog>()
    }

    pub fn stats(&self) -> &FacilityStats {
        self.resource::<FacilityStats>()
    }

    pub fn clock(&self) -> &SimClock {
        self.resource::<SimClock>()
    }

    pub fn params(&self) -> &FacilityParams {
        self.resource::<FacilityParams>()
    }

    /// Lane contents bottom-to-top as plain strings, for terse asserts.
    pub fn lane_plates(&self) -> Vec<String> {
        self.lane()
            .snapshot()
            .into_iter()
            .map(|p| p.as_str().to_string())
            .collect()
    }

    /// Lot contents front-to-back as plain strings.
    pub fn lot_plates(&self) -> Vec<String> {
        self.lot()
            .snapshot()
            .into_iter()
            .map(|p| p.as_str().to_string())
            .collect()
    }

    /// Waiting line front-to-back as plain strings.
    pub fn waiting_plates(&self) -> Vec<String> {
        self.line()
            .snapshot()
            .into_iter()
            .map(|p| p.as_str().to_string())
            .collect()
    }
}
