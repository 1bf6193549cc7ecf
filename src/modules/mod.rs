use std::error::Error;
use std::thread;

use crossbeam_channel::unbounded;

use crate::utilities::config::Config;
use crate::utilities::debug::Debug;
use crate::utilities::elevator_status::ElevatorStatus;

use elevator::Elevator;

mod boarding;
pub mod doors;
pub mod elevator;
pub mod fsm;
pub mod request_source;
pub mod scheduler;

/// Start the car and a random request source on their own threads and
/// follow the car until it stops. Returns the last snapshot.
pub fn run(config: Config, dashboard: bool) -> Result<ElevatorStatus, Box<dyn Error>> {
    let elevator = Elevator::new(config.elevator.clone())?;
    let max_floor = config.elevator.max_floor;

    // INITIALIZE CHANNELS
    let (command_tx, command_rx) = unbounded();
    let (elevator_status_tx, elevator_status_rx) = unbounded::<ElevatorStatus>();

    // INITIALIZE THREAD FOR STATE MACHINE
    let fsm_handle = thread::Builder::new().name("fsm".to_string()).spawn(move || fsm::main(
        elevator,
        command_rx,
        elevator_status_tx,
    ))?;

    // INITIALIZE THREAD FOR PASSENGERS
    let source_handle = {
        let elevator_settings = config.elevator.clone();
        let simulation_settings = config.simulation.clone();
        thread::Builder::new().name("request_source".to_string()).spawn(move || request_source::main(
            elevator_settings,
            simulation_settings,
            command_tx,
        ))?
    };

    let mut debug = Debug::new(max_floor);
    for status in elevator_status_rx.iter() {
        if dashboard {
            debug.printstatus(&status)?;
        } else {
            log::debug!(
                "tick {}: {} at floor {}, {} waiting, {} riding, queue {:?}",
                status.tick,
                status.car.behaviour.as_string(),
                status.car.floor,
                status.pending_count(),
                status.boarded_count(),
                status.call_queue,
            );
        }
    }

    let ids = source_handle.join().map_err(|_| "request source thread panicked")?;
    let elevator = fsm_handle.join().map_err(|_| "fsm thread panicked")?;
    log::info!("Served {} passengers in {} ticks", ids.len(), elevator.tick_count());
    Ok(elevator.status())
}
