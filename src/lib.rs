//! idswitch firmware library.
//!
//! Polls three pulled-up switch inputs and runs the matching externally
//! linked emulate routine while a switch is held. Exposes the pure-logic
//! modules for integration testing; ATtiny13A register access lives in
//! `adapters::avr` and is only built for AVR targets.

#![cfg_attr(not(test), no_std)]
#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod mmcu;
pub mod pins;
pub mod trace;

pub use error::{Error, Result};
