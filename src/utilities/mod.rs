pub mod call_queue;
pub mod config;
pub mod debug;
pub mod direction;
pub mod elevator_event;
pub mod elevator_status;
pub mod error;
pub mod passengers;
pub mod request;
