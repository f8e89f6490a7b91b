//! Assertion helpers for `TestFacility` integration tests.

use crate::vehicle::{LayoutMode, Plate};

use super::TestFacility;

impl TestFacility {
    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    /// Assert that a plate is parked, in the given layout, with a matching
    /// occupancy entry.
    pub fn assert_parked(&self, plate: &str, layout: LayoutMode) {
        let plate = Plate::new(plate);
        let entry = self
            .occupancy()
            .get(&plate)
            .unwrap_or_else(|| panic!("{} has no occupancy entry", plate.as_str()));
        assert_eq!(
            entry.layout,
            layout,
            "{} indexed in {:?}, expected {:?}",
            plate.as_str(),
            entry.layout,
            layout
        );
        let physically_there = match layout {
            LayoutMode::SingleLane => self.lane().contains(&plate),
            LayoutMode::Fifo => self.lot().contains(&plate),
        };
        assert!(
            physically_there,
            "{} indexed but absent from the {}",
            plate.as_str(),
            layout.label()
        );
    }

    /// Assert that a plate is nowhere in the facility: not parked, not
    /// waiting, not indexed.
    pub fn assert_gone(&self, plate: &str) {
        let plate = Plate::new(plate);
        assert!(
            !self.lane().contains(&plate),
            "{} still in the lane",
            plate.as_str()
        );
        assert!(
            !self.lot().contains(&plate),
            "{} still in the lot",
            plate.as_str()
        );
        assert!(
            !self.line().contains(&plate),
            "{} still waiting",
            plate.as_str()
        );
        assert!(
            self.occupancy().get(&plate).is_none(),
            "{} still indexed",
            plate.as_str()
        );
    }

    /// Assert that a plate is waiting at the gate.
    pub fn assert_waiting(&self, plate: &str) {
        let plate = Plate::new(plate);
        assert!(
            self.line().contains(&plate),
            "{} not on the waiting line",
            plate.as_str()
        );
        assert!(
            self.occupancy().get(&plate).is_none(),
            "{} waiting but also indexed as parked",
            plate.as_str()
        );
    }

    /// Assert the occupancy index and the layouts agree exactly: every
    /// parked plate is indexed with the right layout and entry count
    /// matches the parked count.
    pub fn assert_occupancy_consistent(&self) {
        let lane = self.lane();
        let lot = self.lot();
        let occupancy = self.occupancy();

        for plate in lane.iter() {
            let entry = occupancy
                .get(plate)
                .unwrap_or_else(|| panic!("{} in the lane but not indexed", plate.as_str()));
            assert_eq!(
                entry.layout,
                LayoutMode::SingleLane,
                "{} in the lane but indexed as {}",
                plate.as_str(),
                entry.layout.label()
            );
        }
        for plate in lot.iter() {
            let entry = occupancy
                .get(plate)
                .unwrap_or_else(|| panic!("{} in the lot but not indexed", plate.as_str()));
            assert_eq!(
                entry.layout,
                LayoutMode::Fifo,
                "{} in the lot but indexed as {}",
                plate.as_str(),
                entry.layout.label()
            );
        }
        assert_eq!(
            occupancy.len(),
            lane.len() + lot.len(),
            "occupancy entries do not match parked vehicles"
        );
    }
}
