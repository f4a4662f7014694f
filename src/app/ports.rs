//! Port traits — the hexagonal boundary between the poller and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Poller / Firmware (domain)
//! ```
//!
//! Driven adapters (PORTB registers, emulate routines, the CPU core, event
//! sinks) implement these traits. The [`Firmware`](super::firmware::Firmware)
//! and [`Poller`](super::poller::Poller) take them as generic arguments at
//! call sites, so the domain core never touches hardware directly.
//!
//! None of the ports are fallible: register accesses always succeed on
//! this class of hardware, and the emulate routines report nothing back.

use super::events::PollerEvent;
use super::lines::{LineId, LineLevels};

// ───────────────────────────────────────────────────────────────
// GPIO port (driven adapter: PORTB ↔ domain)
// ───────────────────────────────────────────────────────────────

/// Access to the PORTB register file.
pub trait GpioPort {
    /// OR `mask` into the pull-up (PORTB) register. Bits outside `mask`
    /// must be left as they are.
    fn enable_pull_ups(&mut self, mask: u8);

    /// One read of the input (PINB) register.
    fn sample_lines(&mut self) -> LineLevels;

    /// Current data-direction (DDRB) register. Diagnostic only.
    fn direction(&self) -> u8;
}

// ───────────────────────────────────────────────────────────────
// Emulator port (driven adapter: domain → external routines)
// ───────────────────────────────────────────────────────────────

/// The three externally defined emulate routines.
///
/// Calls are synchronous: the poller does not continue until `emulate`
/// returns. What a routine does is opaque to this crate.
pub trait EmulatorPort {
    fn emulate(&mut self, line: LineId);
}

// ───────────────────────────────────────────────────────────────
// Core port (driven adapter: domain → CPU control)
// ───────────────────────────────────────────────────────────────

/// CPU-level control used by single-shot mode to stop execution.
///
/// Sleeping with interrupts disabled never wakes up, which an instrumented
/// simulator reports as program termination. Hosted adapters record the
/// request and return so the boundary layer can exit the process.
pub trait CorePort {
    /// Clear the global interrupt flag.
    fn disable_interrupts(&mut self);

    /// Enter sleep.
    fn sleep_cpu(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The firmware emits structured [`PollerEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &PollerEvent);
}
