/// ----- BOARDING MODULE -----
/// What happens while the car stands at a floor: doors open, riders for
/// this floor leave, waiting passengers enter while there is room, doors
/// close. Whoever did not fit calls the car again.

use crate::utilities::elevator_event::ElevatorEvent;
use crate::utilities::error::ElevatorError;
use crate::utilities::request::PendingRequest;

use super::elevator::Elevator;

impl Elevator {
    pub(crate) fn open_release_enter_close(&mut self) {
        let floor = self.car.floor;

        if self.car.door.open() {
            log::info!("Door opened at floor {}", floor);
            self.record(ElevatorEvent::DoorOpened { floor: floor });
        }
        self.release_passengers();
        self.enter_pending_passengers();
        if self.car.door.close() {
            log::info!("Door closed at floor {}", floor);
            self.record(ElevatorEvent::DoorClosed { floor: floor });
        }
    }

    fn release_passengers(&mut self) {
        let floor = self.car.floor;
        for id in self.passengers.release_at(floor) {
            log::info!("Passenger {} exited at floor {}", id, floor);
            self.record(ElevatorEvent::Alighted { id: id, floor: floor });
        }
    }

    fn enter_pending_passengers(&mut self) {
        let floor = self.car.floor;
        for request in self.passengers.waiting_at(floor) {
            if !self.can_board(request.origin) {
                self.defer_boarding(request);
                continue
            }
            match self.passengers.board(request.id) {
                Ok(destination) => {
                    log::info!("Passenger {} entered at floor {}, going to {}", request.id, floor, destination);
                    self.record(ElevatorEvent::Boarded { id: request.id, floor: floor });
                },
                Err(ElevatorError::CapacityExceeded { .. }) => {
                    self.defer_boarding(request);
                },
                Err(e) => log::warn!("Passenger {} could not board: {}", request.id, e),
            }
        }
    }

    // Still outside, so the pickup is called in again.
    fn defer_boarding(&mut self, request: PendingRequest) {
        log::debug!("Car is full, passenger {} keeps waiting at floor {}", request.id, request.origin);
        self.call_queue.register_pickup(request.origin, request.destination);
        self.record(ElevatorEvent::BoardingDeferred { id: request.id, floor: request.origin });
    }
}
