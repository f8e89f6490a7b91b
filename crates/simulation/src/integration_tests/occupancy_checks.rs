use crate::test_harness::TestFacility;
use crate::vehicle::{LayoutMode, Plate};

#[test]
fn park_creates_an_entry_and_exit_deletes_it() {
    let mut facility = TestFacility::new();
    facility.arrive("CAR-0001");
    facility.tick(1);

    let entry = facility
        .occupancy()
        .get(&Plate::new("CAR-0001"))
        .copied()
        .expect("parked vehicle must be indexed");
    assert_eq!(entry.layout, LayoutMode::SingleLane);
    assert_eq!(entry.entered_at, facility.clock().now());

    facility.depart("CAR-0001");
    facility.tick(1);
    assert!(facility.occupancy().get(&Plate::new("CAR-0001")).is_none());
}

#[test]
fn index_stays_consistent_through_mixed_traffic() {
    let mut facility = TestFacility::new().with_lane_capacity(2).with_lot_capacity(2);

    for plate in ["CAR-0001", "CAR-0002", "CAR-0003", "CAR-0004", "CAR-0005"] {
        facility.arrive(plate);
    }
    facility.tick(1);
    facility.assert_occupancy_consistent();

    facility.depart("CAR-0001"); // lane bottom, shuffles CAR-0002
    facility.depart("CAR-0003"); // lot front
    facility.tick(1);
    facility.assert_occupancy_consistent();

    facility.arrive("CAR-0006");
    facility.tick(1);
    facility.assert_occupancy_consistent();

    // The index never counts waiting vehicles.
    assert_eq!(
        facility.occupancy().len(),
        facility.lane().len() + facility.lot().len()
    );
}

#[test]
fn unknown_departure_touches_nothing() {
    let mut facility = TestFacility::new().with_parked_in_lane(&["CAR-0001"]);

    facility.depart("CAR-9999");
    facility.tick(1);

    assert_eq!(facility.stats().unknown_departures, 1);
    assert_eq!(facility.lane_plates(), ["CAR-0001"]);
    facility.assert_occupancy_consistent();
}

#[test]
fn a_returning_plate_gets_a_fresh_entry() {
    let mut facility = TestFacility::new();

    facility.arrive("CAR-0001");
    facility.tick(1);
    let first_entry = facility.clock().now();

    facility.depart("CAR-0001");
    facility.tick(10);

    facility.arrive("CAR-0001");
    facility.tick(1);

    let entry = facility
        .occupancy()
        .get(&Plate::new("CAR-0001"))
        .copied()
        .expect("the returning vehicle parks normally");
    assert!(
        entry.entered_at > first_entry,
        "the new stay starts at the new minute"
    );
    assert_eq!(facility.history().len(), 1, "only the first stay is complete");
}
