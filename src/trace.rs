//! Diagnostic register trace.
//!
//! An instrumented simulator can watch named registers while the firmware
//! runs. This firmware exposes exactly one: the PORTB data-direction
//! register. The trace is read-only and the poller never consults it.
//!
//! [`TraceRecorder`] keeps a fixed-capacity change log so the same build
//! can record on a host without allocating. A sample is stored only when
//! the value differs from the previous one; once the log is full further
//! changes are counted as dropped.

use heapless::Vec;

use crate::pins;

/// A register that can be traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    Ddrb,
}

impl Register {
    /// I/O space address.
    pub const fn io_addr(self) -> u8 {
        match self {
            Self::Ddrb => pins::DDRB_IO_ADDR,
        }
    }

    /// Data space address, as seen by a simulator.
    pub const fn data_addr(self) -> u16 {
        self.io_addr() as u16 + pins::IO_TO_DATA_OFFSET
    }
}

/// A named register exposed to the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceSymbol {
    pub name: &'static str,
    pub register: Register,
}

/// Every register this firmware publishes.
pub const TRACE_SYMBOLS: [TraceSymbol; 1] = [TraceSymbol {
    name: "DDRB_",
    register: Register::Ddrb,
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceSample {
    /// Poll iteration the value was observed at (0 = right after setup).
    pub iteration: u32,
    pub value: u8,
}

/// Change log for one traced register.
#[derive(Debug)]
pub struct TraceRecorder<const N: usize> {
    symbol: TraceSymbol,
    samples: Vec<TraceSample, N>,
    last: Option<u8>,
    dropped: u32,
}

impl<const N: usize> TraceRecorder<N> {
    pub fn new(symbol: TraceSymbol) -> Self {
        Self {
            symbol,
            samples: Vec::new(),
            last: None,
            dropped: 0,
        }
    }

    /// Record `value` if it changed. Returns `true` when a sample was stored.
    pub fn record(&mut self, iteration: u32, value: u8) -> bool {
        if self.last == Some(value) {
            return false;
        }
        self.last = Some(value);
        if self.samples.push(TraceSample { iteration, value }).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        true
    }

    pub fn symbol(&self) -> TraceSymbol {
        self.symbol
    }

    pub fn samples(&self) -> &[TraceSample] {
        &self.samples
    }

    /// Most recent observed value, stored or not.
    pub fn last_value(&self) -> Option<u8> {
        self.last
    }

    /// Changes that did not fit in the log.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl<const N: usize> Default for TraceRecorder<N> {
    fn default() -> Self {
        Self::new(TRACE_SYMBOLS[0])
    }
}
