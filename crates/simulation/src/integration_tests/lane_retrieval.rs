use crate::test_harness::TestFacility;

#[test]
fn digging_out_the_bottom_vehicle_counts_the_moves() {
    let mut facility =
        TestFacility::new().with_parked_in_lane(&["CAR-0001", "CAR-0002", "CAR-0003"]);

    facility.depart("CAR-0001");
    facility.tick(1);

    facility.assert_gone("CAR-0001");
    assert_eq!(
        facility.lane_plates(),
        ["CAR-0002", "CAR-0003"],
        "the displaced vehicles return in their old order"
    );
    let record = facility.history().latest().cloned().expect("one record");
    assert_eq!(record.moves, 2, "two vehicles had to shuffle");
    assert_eq!(facility.stats().vehicle_moves, 2);
}

#[test]
fn top_vehicle_leaves_without_shuffling() {
    let mut facility =
        TestFacility::new().with_parked_in_lane(&["CAR-0001", "CAR-0002", "CAR-0003"]);

    facility.depart("CAR-0003");
    facility.tick(1);

    let record = facility.history().latest().cloned().expect("one record");
    assert_eq!(record.moves, 0);
    assert_eq!(facility.lane_plates(), ["CAR-0001", "CAR-0002"]);
    assert_eq!(facility.stats().vehicle_moves, 0);
}

#[test]
fn middle_vehicle_retrieval() {
    let mut facility = TestFacility::new()
        .with_parked_in_lane(&["CAR-0001", "CAR-0002", "CAR-0003", "CAR-0004"]);

    facility.depart("CAR-0002");
    facility.tick(1);

    let record = facility.history().latest().cloned().expect("one record");
    assert_eq!(record.moves, 2);
    assert_eq!(
        facility.lane_plates(),
        ["CAR-0001", "CAR-0003", "CAR-0004"]
    );
}

#[test]
fn moves_accumulate_across_departures() {
    let mut facility =
        TestFacility::new().with_parked_in_lane(&["CAR-0001", "CAR-0002", "CAR-0003"]);

    facility.depart("CAR-0001"); // 2 moves
    facility.tick(1);
    facility.depart("CAR-0002"); // 1 move (CAR-0003 sits above)
    facility.tick(1);
    facility.depart("CAR-0003"); // 0 moves
    facility.tick(1);

    assert!(facility.lane().is_empty());
    assert_eq!(facility.stats().vehicle_moves, 3);
    assert_eq!(facility.stats().departed, 3);
}

#[test]
fn freed_lane_spot_is_reusable() {
    let mut facility = TestFacility::new()
        .with_lane_capacity(3)
        .with_parked_in_lane(&["CAR-0001", "CAR-0002", "CAR-0003"]);

    facility.depart("CAR-0002");
    facility.tick(1);
    facility.arrive("CAR-0004");
    facility.tick(1);

    assert_eq!(
        facility.lane_plates(),
        ["CAR-0001", "CAR-0003", "CAR-0004"],
        "new vehicle parks at the open end"
    );
}
