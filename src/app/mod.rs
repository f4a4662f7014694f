//! Application core — pure domain logic, zero I/O.
//!
//! The switch poller and the top-level dispatch. All interaction with
//! hardware happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod events;
pub mod firmware;
pub mod lines;
pub mod poller;
pub mod ports;
