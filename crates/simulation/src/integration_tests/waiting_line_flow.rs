use crate::test_harness::TestFacility;
use crate::vehicle::LayoutMode;

#[test]
fn departure_promotes_the_front_waiter() {
    let mut facility = TestFacility::new()
        .with_lane_capacity(1)
        .with_lot_capacity(1)
        .with_parked_in_lane(&["CAR-0001"])
        .with_parked_in_lot(&["CAR-0002"])
        .with_waiting(&["CAR-0003", "CAR-0004"]);

    facility.depart("CAR-0001");
    facility.tick(1);

    facility.assert_parked("CAR-0003", LayoutMode::SingleLane);
    assert_eq!(facility.waiting_plates(), ["CAR-0004"]);
    assert_eq!(facility.stats().promoted_from_line, 1);
}

#[test]
fn promotion_prefers_the_lane() {
    // Both layouts free up in the same tick; the single promoted vehicle
    // takes the lane because assignment is lane-first.
    let mut facility = TestFacility::new()
        .with_lane_capacity(1)
        .with_lot_capacity(1)
        .with_parked_in_lane(&["CAR-0001"])
        .with_parked_in_lot(&["CAR-0002"])
        .with_waiting(&["CAR-0003"]);

    facility.depart("CAR-0001");
    facility.depart("CAR-0002");
    facility.tick(1);

    facility.assert_parked("CAR-0003", LayoutMode::SingleLane);
    assert!(facility.lot().is_empty());
    assert!(facility.line().is_empty());
}

#[test]
fn one_departure_promotes_exactly_one_waiter() {
    let mut facility = TestFacility::new()
        .with_lane_capacity(1)
        .with_lot_capacity(1)
        .with_parked_in_lane(&["CAR-0001"])
        .with_parked_in_lot(&["CAR-0002"])
        .with_waiting(&["CAR-0003", "CAR-0004", "CAR-0005"]);

    facility.depart("CAR-0002");
    facility.tick(1);

    facility.assert_parked("CAR-0003", LayoutMode::Fifo);
    assert_eq!(
        facility.waiting_plates(),
        ["CAR-0004", "CAR-0005"],
        "only as many promotions as free spots"
    );
}

#[test]
fn line_drains_completely_when_room_allows() {
    let mut facility = TestFacility::new()
        .with_lane_capacity(2)
        .with_lot_capacity(2)
        .with_parked_in_lane(&["CAR-0001", "CAR-0002"])
        .with_parked_in_lot(&["CAR-0003", "CAR-0004"])
        .with_waiting(&["CAR-0005", "CAR-0006"]);

    facility.depart("CAR-0002");
    facility.depart("CAR-0003");
    facility.tick(1);

    assert!(facility.line().is_empty(), "two spots freed, two promoted");
    facility.assert_parked("CAR-0005", LayoutMode::SingleLane);
    facility.assert_parked("CAR-0006", LayoutMode::Fifo);
    facility.assert_occupancy_consistent();
}

#[test]
fn waiting_vehicles_are_not_indexed_until_promoted() {
    let facility = TestFacility::new()
        .with_lane_capacity(1)
        .with_parked_in_lane(&["CAR-0001"])
        .with_waiting(&["CAR-0002"]);

    facility.assert_waiting("CAR-0002");
    assert_eq!(facility.occupancy().len(), 1, "only the parked vehicle is indexed");
}
