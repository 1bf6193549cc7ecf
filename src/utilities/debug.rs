use std::io::{stdout, Stdout, Write};

use crossterm::{cursor, terminal, Result, ExecutableCommand};

use super::elevator_status::ElevatorStatus;
use super::request::Floor;

const STATUS_SIZE: u16 = 14;

pub struct Debug {
    stdout: Stdout,
    max_floor: Floor,
    printed: bool,
}

impl Debug {
    pub fn new(max_floor: Floor) -> Self {
        Debug {
            stdout: stdout(),
            max_floor: max_floor,
            printed: false,
        }
    }

    pub fn printstatus(&mut self, status: &ElevatorStatus) -> Result<()> {
        if self.printed {
            self.stdout.execute(cursor::MoveUp(STATUS_SIZE + self.max_floor as u16 * 2))?;
        }
        self.stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        self.printed = true;

        writeln!(self.stdout, "+------------+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<10} |", "FLOOR", "CAR", "WAITING")?;
        for floor in (1..=self.max_floor).rev() {
            writeln!(self.stdout, "+------------+------------+------------+")?;
            let car = if status.car.floor == floor { status.car.door.status().as_string() } else { String::new() };
            let waiting = status.pending.iter().filter(|request| request.origin == floor).count();
            writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<10} |", floor, car, waiting)?;
        }
        writeln!(self.stdout, "+------------+------------+------------+\n")?;

        writeln!(self.stdout, "+-------------------------+")?;
        writeln!(self.stdout, "| STATE MACHINE           |")?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "STATE", status.car.behaviour.as_string())?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "TARGET", status.car.target_floor)?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "DIRECTION", status.car.direction.as_string())?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "RIDING", status.boarded_count())?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "TICK", status.tick)?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "QUEUE: {:?}", status.call_queue)?;

        Ok(())
    }
}
