use crate::test_harness::TestFacility;
use crate::vehicle::LayoutMode;

#[test]
fn arrival_parks_in_the_lane_first() {
    let mut facility = TestFacility::new();
    facility.arrive("CAR-0001");
    facility.tick(1);

    facility.assert_parked("CAR-0001", LayoutMode::SingleLane);
    assert_eq!(facility.stats().admitted, 1);
}

#[test]
fn lane_overflow_goes_to_the_lot() {
    let mut facility = TestFacility::new().with_lane_capacity(2).with_lot_capacity(2);
    for plate in ["CAR-0001", "CAR-0002", "CAR-0003"] {
        facility.arrive(plate);
    }
    facility.tick(1);

    assert_eq!(facility.lane_plates(), ["CAR-0001", "CAR-0002"]);
    assert_eq!(facility.lot_plates(), ["CAR-0003"]);
    facility.assert_parked("CAR-0003", LayoutMode::Fifo);
}

#[test]
fn full_facility_starts_a_waiting_line() {
    let mut facility = TestFacility::new().with_lane_capacity(1).with_lot_capacity(1);
    for plate in ["CAR-0001", "CAR-0002", "CAR-0003", "CAR-0004"] {
        facility.arrive(plate);
    }
    facility.tick(1);

    facility.assert_parked("CAR-0001", LayoutMode::SingleLane);
    facility.assert_parked("CAR-0002", LayoutMode::Fifo);
    assert_eq!(
        facility.waiting_plates(),
        ["CAR-0003", "CAR-0004"],
        "overflow arrivals wait in arrival order"
    );
}

#[test]
fn duplicate_plate_is_refused() {
    let mut facility = TestFacility::new();
    facility.arrive("CAR-0001");
    facility.tick(1);
    facility.arrive("CAR-0001");
    facility.tick(1);

    assert_eq!(facility.stats().refused_duplicates, 1);
    assert_eq!(facility.stats().admitted, 1, "second arrival must not park");
    assert_eq!(facility.lane().len(), 1);
}

#[test]
fn duplicate_of_a_waiting_plate_is_refused() {
    let mut facility = TestFacility::new().with_lane_capacity(1).with_lot_capacity(1);
    for plate in ["CAR-0001", "CAR-0002", "CAR-0003"] {
        facility.arrive(plate);
    }
    facility.tick(1);
    facility.assert_waiting("CAR-0003");

    facility.arrive("CAR-0003");
    facility.tick(1);

    assert_eq!(facility.stats().refused_duplicates, 1);
    assert_eq!(
        facility.waiting_plates(),
        ["CAR-0003"],
        "the line must not gain a double entry"
    );
}

#[test]
fn nobody_jumps_a_nonempty_line() {
    // One spot opens up while two vehicles wait; a newcomer must queue
    // behind them even though the spot is free at arrival time.
    let mut facility = TestFacility::new()
        .with_lane_capacity(1)
        .with_lot_capacity(1)
        .with_parked_in_lane(&["CAR-0001"])
        .with_parked_in_lot(&["CAR-0002"])
        .with_waiting(&["CAR-0003", "CAR-0004"]);

    facility.depart("CAR-0001");
    facility.tick(1);

    // Promotion took the front waiter, not the newcomer.
    facility.assert_parked("CAR-0003", LayoutMode::SingleLane);

    facility.arrive("CAR-0005");
    facility.tick(1);
    assert_eq!(
        facility.waiting_plates(),
        ["CAR-0004", "CAR-0005"],
        "newcomer queues behind the remaining waiter"
    );
}
