//! Builder methods for layout, tariff, and starting-traffic setup in
//! integration tests.
//!
//! Capacity and tariff builders replace empty resources, so call them
//! before any parking builders.

use crate::facility_params::FacilityParams;
use crate::fifo_lot::FifoLot;
use crate::history::HistoryLog;
use crate::occupancy::{OccupancyEntry, OccupancyIndex};
use crate::sim_clock::SimClock;
use crate::single_lane::SingleLane;
use crate::vehicle::{LayoutMode, Plate};
use crate::waiting_line::WaitingLine;

use super::TestFacility;

impl TestFacility {
    // -----------------------------------------------------------------------
    // Capacities and tariff
    // -----------------------------------------------------------------------

    /// Shrink or grow the lane. The lane must still be empty.
    pub fn with_lane_capacity(mut self, capacity: usize) -> Self {
        let world = self.app.world_mut();
        assert!(
            world.resource::<SingleLane>().is_empty(),
            "set capacities before parking vehicles"
        );
        world.insert_resource(SingleLane::with_capacity(capacity));
        world.resource_mut::<FacilityParams>().lane.capacity = capacity;
        self
    }

    /// Shrink or grow the lot. The lot must still be empty.
    pub fn with_lot_capacity(mut self, capacity: usize) -> Self {
        let world = self.app.world_mut();
        assert!(
            world.resource::<FifoLot>().is_empty(),
            "set capacities before parking vehicles"
        );
        world.insert_resource(FifoLot::with_capacity(capacity));
        world.resource_mut::<FacilityParams>().lot.capacity = capacity;
        self
    }

    /// Override the exit tariff.
    pub fn with_tariff(mut self, hourly_rate: u64, min_charge_minutes: u64) -> Self {
        let mut params = self.app.world_mut().resource_mut::<FacilityParams>();
        params.tariff.hourly_rate = hourly_rate;
        params.tariff.min_charge_minutes = min_charge_minutes;
        self
    }

    /// Override the default bounded-read limit of the history log. The log
    /// must still be empty.
    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        let world = self.app.world_mut();
        assert!(
            world.resource::<HistoryLog>().is_empty(),
            "set the recent limit before any departures"
        );
        world.insert_resource(HistoryLog::with_recent_limit(limit));
        world.resource_mut::<FacilityParams>().history.recent_limit = limit;
        self
    }

    // -----------------------------------------------------------------------
    // Starting traffic
    // -----------------------------------------------------------------------

    /// Park vehicles straight into the lane (first plate at the bottom),
    /// indexed at the current clock minute, exactly as admission would.
    pub fn with_parked_in_lane(mut self, plates: &[&str]) -> Self {
        let world = self.app.world_mut();
        let now = world.resource::<SimClock>().now();
        for text in plates {
            let plate = Plate::new(*text);
            let parked = world.resource_mut::<SingleLane>().park(plate.clone());
            assert!(parked, "lane full while seeding {}", text);
            world.resource_mut::<OccupancyIndex>().put(
                plate,
                OccupancyEntry {
                    entered_at: now,
                    layout: LayoutMode::SingleLane,
                },
            );
        }
        self
    }

    /// Park vehicles straight into the lot (first plate at the front),
    /// indexed at the current clock minute.
    pub fn with_parked_in_lot(mut self, plates: &[&str]) -> Self {
        let world = self.app.world_mut();
        let now = world.resource::<SimClock>().now();
        for text in plates {
            let plate = Plate::new(*text);
            let parked = world.resource_mut::<FifoLot>().park(plate.clone());
            assert!(parked, "lot full while seeding {}", text);
            world.resource_mut::<OccupancyIndex>().put(
                plate,
                OccupancyEntry {
                    entered_at: now,
                    layout: LayoutMode::Fifo,
                },
            );
        }
        self
    }

    /// Queue vehicles on the waiting line (first plate at the front).
    pub fn with_waiting(mut self, plates: &[&str]) -> Self {
        let world = self.app.world_mut();
        for text in plates {
            world.resource_mut::<WaitingLine>().enqueue(Plate::new(*text));
        }
        self
    }
}
