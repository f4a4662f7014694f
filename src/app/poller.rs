//! Input poller — pull-up setup and the level-triggered poll iteration.
//!
//! ```text
//!  GpioPort ──▶ ┌──────────┐ ──▶ EmulatorPort
//!               │  Poller  │
//!               └──────────┘
//! ```
//!
//! Each [`poll`](Poller::poll) takes one PINB sample and runs the emulate
//! routine of every line that reads low, in the fixed order 0, 1, 2.
//! There is no debouncing and no edge detection: a routine runs on every
//! iteration for as long as its switch stays closed.

use heapless::Vec;

use crate::pins;

use super::lines::{LineId, LineLevels};
use super::ports::{EmulatorPort, GpioPort};

/// Outcome of one poll iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollReport {
    /// 1-based iteration number (wraps).
    pub iteration: u32,
    /// The sample the decisions were made on.
    pub levels: LineLevels,
    /// Lines whose routine ran, in invocation order.
    pub fired: Vec<LineId, { pins::LINE_COUNT }>,
}

/// Stateless with respect to the lines; only keeps counters.
#[derive(Debug, Default)]
pub struct Poller {
    iterations: u32,
    invocations: [u32; pins::LINE_COUNT],
}

impl Poller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the internal pull-ups on every switch input.
    ///
    /// Read-modify-write of PORTB: repeated calls leave the same bits set
    /// and nothing outside [`pins::LINE_MASK`] is touched.
    pub fn setup<G: GpioPort>(&mut self, gpio: &mut G) {
        gpio.enable_pull_ups(pins::LINE_MASK);
    }

    /// One iteration of the main loop.
    pub fn poll<G, E>(&mut self, gpio: &mut G, emulator: &mut E) -> PollReport
    where
        G: GpioPort,
        E: EmulatorPort,
    {
        self.iterations = self.iterations.wrapping_add(1);
        let levels = gpio.sample_lines();

        // A sample has at most LINE_COUNT active lines.
        let fired: Vec<LineId, { pins::LINE_COUNT }> = levels.active_lines().collect();
        for &line in &fired {
            self.fire(line, emulator);
        }

        PollReport {
            iteration: self.iterations,
            levels,
            fired,
        }
    }

    /// Run the routine for `line` unconditionally.
    pub fn fire<E: EmulatorPort>(&mut self, line: LineId, emulator: &mut E) {
        emulator.emulate(line);
        let count = &mut self.invocations[line.index()];
        *count = count.wrapping_add(1);
    }

    /// Poll iterations performed so far.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// How many times the routine for `line` has run.
    pub fn invocations(&self, line: LineId) -> u32 {
        self.invocations[line.index()]
    }
}
