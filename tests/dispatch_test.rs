use std::collections::BTreeMap;

use rand::Rng;

use elevator_sim::modules::request_source::{generate_requests, make_rng};
use elevator_sim::utilities::direction::Direction;
use elevator_sim::modules::doors::DoorStatus;
use elevator_sim::{Behaviour, Elevator, ElevatorError, ElevatorEvent, ElevatorSettings, Floor, RequestId};

const MAX_TICKS: u64 = 100_000;

fn create_test_elevator(max_floor: u8, capacity: u8) -> Elevator {
    Elevator::new(ElevatorSettings::new(max_floor, capacity)).expect("valid settings")
}

fn check_invariants(elevator: &Elevator) {
    let car = elevator.car();
    assert!(car.floor >= elevator.settings().min_floor());
    assert!(car.floor <= elevator.settings().max_floor);
    assert!(elevator.passengers().boarded_count() <= elevator.settings().capacity as usize);
    assert_eq!(car.door.status(), DoorStatus::Closed);
}

fn queued_floor_counts(elevator: &Elevator) -> BTreeMap<Floor, usize> {
    let mut counts = BTreeMap::new();
    for floor in elevator.call_queue().iter() {
        *counts.entry(floor).or_insert(0) += 1;
    }
    counts
}

/// One tick. Every floor the tick adds to the queue must still be wanted
/// by a waiting or riding passenger, so served floors never come back.
fn step_checked(elevator: &mut Elevator) -> Vec<ElevatorEvent> {
    let before = queued_floor_counts(elevator);
    elevator.step();
    check_invariants(elevator);

    let passengers = elevator.passengers();
    for (floor, count) in queued_floor_counts(elevator) {
        if count > before.get(&floor).copied().unwrap_or(0) {
            assert!(
                passengers.is_pending_origin(floor)
                    || passengers.is_pending_destination(floor)
                    || passengers.is_boarded_destination(floor),
                "tick {}: floor {} queued with nobody wanting it",
                elevator.tick_count(), floor
            );
        }
    }
    elevator.pop_events()
}

/// Step until finished, checking invariants after every tick.
fn run_checked(elevator: &mut Elevator) -> Vec<ElevatorEvent> {
    let mut events = Vec::new();
    while !elevator.is_finished() {
        assert!(elevator.tick_count() < MAX_TICKS, "elevator did not finish");
        events.extend(step_checked(elevator));
    }
    events
}

fn assert_served_once(events: &[ElevatorEvent], ids: &[RequestId], seed: u64) {
    for &id in ids {
        let boarded = events.iter()
            .position(|event| matches!(event, ElevatorEvent::Boarded { id: boarded, .. } if *boarded == id));
        let alighted = events.iter()
            .position(|event| matches!(event, ElevatorEvent::Alighted { id: alighted, .. } if *alighted == id));
        match (boarded, alighted) {
            (Some(b), Some(a)) => assert!(b < a, "seed {}: {} left before boarding", seed, id),
            _ => panic!("seed {}: {} was never served", seed, id),
        }
        let boardings = events.iter()
            .filter(|event| matches!(event, ElevatorEvent::Boarded { id: boarded, .. } if *boarded == id))
            .count();
        assert_eq!(boardings, 1, "seed {}", seed);
    }
}

fn passenger_events(events: &[ElevatorEvent]) -> Vec<ElevatorEvent> {
    events.iter()
        .filter(|event| matches!(event,
            ElevatorEvent::Boarded { .. }
            | ElevatorEvent::Alighted { .. }
            | ElevatorEvent::BoardingDeferred { .. }))
        .copied()
        .collect()
}

#[test]
fn single_passenger_is_picked_up_and_dropped_off() {
    let mut elevator = create_test_elevator(10, 1);
    let a = elevator.submit_request(3, 6).unwrap();
    elevator.request_stop();

    let events = run_checked(&mut elevator);

    assert_eq!(events, vec![
        ElevatorEvent::TargetAccepted { floor: 3, direction: Direction::Up },
        ElevatorEvent::Moved { floor: 2 },
        ElevatorEvent::Moved { floor: 3 },
        ElevatorEvent::DoorOpened { floor: 3 },
        ElevatorEvent::Boarded { id: a, floor: 3 },
        ElevatorEvent::DoorClosed { floor: 3 },
        ElevatorEvent::Idle { floor: 3 },
        ElevatorEvent::TargetAccepted { floor: 6, direction: Direction::Up },
        ElevatorEvent::Moved { floor: 4 },
        ElevatorEvent::Moved { floor: 5 },
        ElevatorEvent::Moved { floor: 6 },
        ElevatorEvent::DoorOpened { floor: 6 },
        ElevatorEvent::Alighted { id: a, floor: 6 },
        ElevatorEvent::DoorClosed { floor: 6 },
        ElevatorEvent::Idle { floor: 6 },
    ]);
    assert_eq!(elevator.car().behaviour, Behaviour::Idle);
    assert_eq!(elevator.car().floor, 6);
    assert!(elevator.call_queue().is_empty());
}

#[test]
fn full_car_leaves_second_passenger_for_a_later_leg() {
    let mut elevator = create_test_elevator(10, 1);
    let a = elevator.submit_request(3, 6).unwrap();
    let b = elevator.submit_request(3, 8).unwrap();
    elevator.request_stop();

    let events = run_checked(&mut elevator);

    assert_eq!(passenger_events(&events), vec![
        ElevatorEvent::Boarded { id: a, floor: 3 },
        ElevatorEvent::BoardingDeferred { id: b, floor: 3 },
        // doors open once more at 3 as the car sets off
        ElevatorEvent::BoardingDeferred { id: b, floor: 3 },
        ElevatorEvent::Alighted { id: a, floor: 6 },
        ElevatorEvent::Boarded { id: b, floor: 3 },
        ElevatorEvent::Alighted { id: b, floor: 8 },
    ]);
    // the car turned around at 6 to fetch b
    assert!(events.contains(&ElevatorEvent::TargetAccepted { floor: 3, direction: Direction::Down }));
    assert!(events.contains(&ElevatorEvent::StaleCallSkipped { floor: 8 }));
    assert_eq!(elevator.car().floor, 8);
    assert!(elevator.call_queue().is_empty());
}

#[test]
fn origin_equal_to_destination_is_rejected() {
    let mut elevator = create_test_elevator(10, 4);
    let result = elevator.submit_request(4, 4);

    assert!(matches!(result, Err(ElevatorError::InvalidFloor { .. })));
    assert!(elevator.call_queue().is_empty());
    assert_eq!(elevator.passengers().pending_count(), 0);
}

#[test]
fn floors_outside_the_building_are_rejected() {
    let mut elevator = create_test_elevator(5, 4);

    assert!(matches!(elevator.submit_request(0, 3), Err(ElevatorError::InvalidFloor { .. })));
    assert!(matches!(elevator.submit_request(2, 6), Err(ElevatorError::InvalidFloor { .. })));
    assert!(elevator.call_queue().is_empty());
    assert_eq!(elevator.passengers().pending_count(), 0);

    // ids are only used up by accepted requests
    assert_eq!(elevator.submit_request(2, 5).unwrap().value(), 0);
}

#[test]
fn bad_configuration_is_rejected() {
    assert!(matches!(
        Elevator::new(ElevatorSettings::new(0, 4)),
        Err(ElevatorError::InvalidConfiguration { .. })
    ));
    assert!(matches!(
        Elevator::new(ElevatorSettings::new(10, 0)),
        Err(ElevatorError::InvalidConfiguration { .. })
    ));
}

#[test]
fn idle_with_empty_queue_does_nothing() {
    let mut elevator = create_test_elevator(10, 4);
    let before = elevator.status();

    elevator.step();
    elevator.step();

    let after = elevator.status();
    assert_eq!(after.tick, 2);
    assert_eq!(after.car, before.car);
    assert!(after.events.is_empty());
    assert!(!elevator.is_finished());
}

#[test]
fn stop_request_waits_for_outstanding_passengers() {
    let mut elevator = create_test_elevator(10, 2);
    elevator.request_stop();
    let id = elevator.submit_request(2, 9).unwrap();

    for _ in 0..5 {
        elevator.step();
        assert!(!elevator.is_finished());
    }
    assert!(elevator.passengers().is_boarded(id));

    run_checked(&mut elevator);
    assert!(elevator.passengers().is_empty());
    assert_eq!(elevator.car().floor, 9);
}

#[test]
fn stop_request_on_idle_empty_car_finishes_immediately() {
    let mut elevator = create_test_elevator(3, 1);
    elevator.request_stop();
    assert!(elevator.is_finished());
    elevator.run();
    assert_eq!(elevator.tick_count(), 0);
}

#[test]
fn passenger_can_change_destination_from_inside() {
    let mut elevator = create_test_elevator(10, 2);
    let id = elevator.submit_request(1, 8).unwrap();

    // board at floor 1
    while !elevator.passengers().is_boarded(id) {
        elevator.step();
    }
    elevator.call_from_inside(id, 4).unwrap();
    elevator.request_stop();

    let events = run_checked(&mut elevator);

    assert!(events.contains(&ElevatorEvent::Alighted { id: id, floor: 4 }));
    assert_eq!(elevator.car().floor, 4);
}

#[test]
fn call_from_inside_requires_boarded_passenger() {
    let mut elevator = create_test_elevator(10, 2);
    let id = elevator.submit_request(5, 8).unwrap();

    assert_eq!(elevator.call_from_inside(id, 3), Err(ElevatorError::UnknownPassenger(id)));
    assert!(matches!(elevator.call_from_inside(id, 11), Err(ElevatorError::InvalidFloor { .. })));
}

#[test]
fn passengers_picked_up_on_the_way() {
    let mut elevator = create_test_elevator(10, 4);
    let a = elevator.submit_request(1, 9).unwrap();
    let b = elevator.submit_request(4, 7).unwrap();
    elevator.request_stop();

    let events = run_checked(&mut elevator);

    assert_eq!(passenger_events(&events), vec![
        ElevatorEvent::Boarded { id: a, floor: 1 },
        ElevatorEvent::Boarded { id: b, floor: 4 },
        ElevatorEvent::Alighted { id: b, floor: 7 },
        ElevatorEvent::Alighted { id: a, floor: 9 },
    ]);
    // a single trip up after picking up a
    let targets: Vec<&ElevatorEvent> = events.iter()
        .filter(|event| matches!(event, ElevatorEvent::TargetAccepted { .. }))
        .collect();
    assert_eq!(targets.len(), 2);
}

#[test]
fn every_request_is_served_exactly_once() {
    for seed in 0..200u64 {
        let mut rng = make_rng(Some(seed));
        let max_floor = 2 + (seed % 14) as u8;
        let capacity = 1 + (seed % 4) as u8;
        let mut elevator = create_test_elevator(max_floor, capacity);

        let mut ids: Vec<RequestId> = Vec::new();
        for (origin, destination) in generate_requests(&mut rng, 1, max_floor, 10) {
            ids.push(elevator.submit_request(origin, destination).unwrap());
        }
        elevator.request_stop();

        let events = run_checked(&mut elevator);

        assert_served_once(&events, &ids, seed);
        assert!(elevator.passengers().is_empty());
    }
}

#[test]
fn requests_arriving_between_ticks_are_served() {
    for seed in 0..300u64 {
        let mut rng = make_rng(Some(seed));
        let max_floor = 2 + (seed % 12) as u8;
        let capacity = 1 + (seed % 3) as u8;
        let mut elevator = create_test_elevator(max_floor, capacity);

        let mut ids: Vec<RequestId> = Vec::new();
        let mut events = Vec::new();
        while ids.len() < 40 {
            assert!(elevator.tick_count() < MAX_TICKS, "seed {}: too many ticks", seed);
            if rng.random_bool(0.3) {
                let origin = rng.random_range(1..=max_floor);
                let mut destination = rng.random_range(1..=max_floor);
                while destination == origin {
                    destination = rng.random_range(1..=max_floor);
                }
                ids.push(elevator.submit_request(origin, destination).unwrap());
            }
            if rng.random_bool(0.05) {
                if let Some(rider) = elevator.passengers().get_boarded().first().copied() {
                    let destination = rng.random_range(1..=max_floor);
                    elevator.call_from_inside(rider.id, destination).unwrap();
                }
            }
            events.extend(step_checked(&mut elevator));
        }
        elevator.request_stop();
        events.extend(run_checked(&mut elevator));

        assert_served_once(&events, &ids, seed);
        assert!(elevator.passengers().is_empty());
    }
}

#[test]
fn run_does_not_keep_events() {
    let mut elevator = create_test_elevator(10, 2);
    elevator.submit_request(2, 7).unwrap();
    elevator.submit_request(6, 3).unwrap();
    elevator.request_stop();

    elevator.run();

    assert!(elevator.is_finished());
    assert!(elevator.pop_events().is_empty());
    assert!(elevator.status().events.is_empty());
}

#[test]
fn snapshot_serializes_to_json() {
    let mut elevator = create_test_elevator(6, 2);
    elevator.submit_request(2, 5).unwrap();
    elevator.step();

    let json = serde_json::to_value(elevator.status()).unwrap();
    assert_eq!(json["car"]["behaviour"], "Moving");
    assert_eq!(json["car"]["target_floor"], 2);
    assert_eq!(json["pending"][0]["origin"], 2);
    assert_eq!(json["call_queue"], serde_json::json!([5]));
}
