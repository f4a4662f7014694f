//! Outbound firmware events.
//!
//! The [`Firmware`](super::firmware::Firmware) emits these through the
//! [`EventSink`](super::ports::EventSink) port. They are observability
//! only; nothing in the poller depends on them being consumed.

use crate::config::RunMode;

use super::lines::LineId;

/// Structured events emitted by the firmware core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerEvent {
    /// Dispatch started; pull-ups are about to be configured.
    Started(RunMode),

    /// A line read low during a poll iteration and its routine ran.
    LineActive { line: LineId, iteration: u32 },

    /// Single-shot mode ran the routine for `line` without sampling.
    ShotFired(LineId),

    /// Single-shot mode is disabling interrupts and putting the core to sleep.
    Halting,
}
