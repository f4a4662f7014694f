//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing firmware events to the `log`
//! facade. Per-iteration line events go out at debug level since a held
//! switch produces one on every poll.

use log::{debug, info};

use crate::app::events::PollerEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`PollerEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &PollerEvent) {
        match event {
            PollerEvent::Started(mode) => {
                info!("START | mode={:?}", mode);
            }
            PollerEvent::LineActive { line, iteration } => {
                debug!("LINE  | {} low, iteration={}", line, iteration);
            }
            PollerEvent::ShotFired(line) => {
                info!("SHOT  | {} routine ran once", line);
            }
            PollerEvent::Halting => {
                info!("HALT  | interrupts off, core sleeping");
            }
        }
    }
}
