use crate::test_harness::TestFacility;

#[test]
fn lot_exits_in_arrival_order() {
    let mut facility =
        TestFacility::new().with_parked_in_lot(&["CAR-0001", "CAR-0002", "CAR-0003"]);

    facility.depart("CAR-0001");
    facility.tick(1);
    facility.assert_gone("CAR-0001");
    assert_eq!(facility.lot_plates(), ["CAR-0002", "CAR-0003"]);

    facility.depart("CAR-0002");
    facility.tick(1);
    facility.depart("CAR-0003");
    facility.tick(1);

    assert!(facility.lot().is_empty());
    assert_eq!(facility.stats().departed, 3);
}

#[test]
fn blocked_lot_vehicle_cannot_leave() {
    let mut facility =
        TestFacility::new().with_parked_in_lot(&["CAR-0001", "CAR-0002", "CAR-0003"]);

    // CAR-0003 is two vehicles back; the request is refused outright.
    facility.depart("CAR-0003");
    facility.tick(1);

    assert_eq!(facility.stats().blocked_exits, 1);
    assert_eq!(facility.stats().departed, 0);
    assert_eq!(
        facility.lot_plates(),
        ["CAR-0001", "CAR-0002", "CAR-0003"],
        "a refused exit must not rearrange the lot"
    );
    assert!(facility.history().is_empty(), "no record for a refusal");
}

#[test]
fn blocked_vehicle_leaves_once_it_reaches_the_front() {
    let mut facility = TestFacility::new().with_parked_in_lot(&["CAR-0001", "CAR-0002"]);

    facility.depart("CAR-0002");
    facility.tick(1);
    assert_eq!(facility.stats().blocked_exits, 1);

    facility.depart("CAR-0001");
    facility.tick(1);
    facility.depart("CAR-0002");
    facility.tick(1);

    facility.assert_gone("CAR-0002");
    assert_eq!(facility.stats().departed, 2);
    let record = facility.history().latest().cloned().expect("a record");
    assert_eq!(record.moves, 0, "lot exits never shuffle anything");
}

#[test]
fn lot_records_carry_zero_moves() {
    let mut facility = TestFacility::new().with_parked_in_lot(&["CAR-0001"]);
    facility.depart("CAR-0001");
    facility.tick(1);

    let record = facility.history().latest().cloned().expect("a record");
    assert_eq!(record.moves, 0);
    assert_eq!(facility.stats().vehicle_moves, 0);
}
