//! Mock hardware adapters for integration tests.
//!
//! Every port call is appended to one shared [`Journal`], so tests can
//! assert on the interleaving of input samples, emulate calls, and core
//! control without touching real registers.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::collections::VecDeque;
use std::rc::Rc;

use idswitch::app::events::PollerEvent;
use idswitch::app::lines::{LineId, LineLevels};
use idswitch::app::ports::{CorePort, EmulatorPort, EventSink, GpioPort};

use embedded_hal::digital::{ErrorType, InputPin};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    PullUps(u8),
    Sample,
    Emulate(LineId),
    DisableInterrupts,
    Sleep,
}

#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Call>>>);

#[allow(dead_code)]
impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    /// Emulate calls only, in order.
    pub fn emulated(&self) -> Vec<LineId> {
        self.0
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Emulate(line) => Some(*line),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: Call) -> usize {
        self.0.borrow().iter().filter(|&&c| c == call).count()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

// ── ScriptedGpio ──────────────────────────────────────────────

/// Replays PINB samples from a script; once it runs out every line reads
/// high. PORTB is a real read-modify-write register.
pub struct ScriptedGpio {
    pub port: u8,
    pub ddr: u8,
    script: VecDeque<LineLevels>,
    journal: Journal,
}

#[allow(dead_code)]
impl ScriptedGpio {
    pub fn new(journal: &Journal) -> Self {
        Self {
            port: 0,
            ddr: 0,
            script: VecDeque::new(),
            journal: journal.clone(),
        }
    }

    pub fn with_port(mut self, port: u8) -> Self {
        self.port = port;
        self
    }

    pub fn then(mut self, levels: LineLevels) -> Self {
        self.script.push_back(levels);
        self
    }

    pub fn then_repeat(mut self, levels: LineLevels, n: usize) -> Self {
        self.script.extend(std::iter::repeat_n(levels, n));
        self
    }
}

impl GpioPort for ScriptedGpio {
    fn enable_pull_ups(&mut self, mask: u8) {
        self.journal.push(Call::PullUps(mask));
        self.port |= mask;
    }

    fn sample_lines(&mut self) -> LineLevels {
        self.journal.push(Call::Sample);
        self.script.pop_front().unwrap_or(LineLevels::IDLE)
    }

    fn direction(&self) -> u8 {
        self.ddr
    }
}

// ── SwitchPin ────────────────────────────────────────────────

/// A pulled-up `embedded_hal` input wired to a push button. Clones share
/// the button, so a test can keep one to press while the adapter owns
/// the other.
#[derive(Debug, Clone, Default)]
pub struct SwitchPin(Rc<Cell<bool>>);

#[allow(dead_code)]
impl SwitchPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self) {
        self.0.set(true);
    }

    pub fn release(&self) {
        self.0.set(false);
    }
}

impl ErrorType for SwitchPin {
    type Error = Infallible;
}

impl InputPin for SwitchPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }
}

// ── Emulator / core ───────────────────────────────────────────

pub struct RecordingEmulator(Journal);

impl RecordingEmulator {
    pub fn new(journal: &Journal) -> Self {
        Self(journal.clone())
    }
}

impl EmulatorPort for RecordingEmulator {
    fn emulate(&mut self, line: LineId) {
        self.0.push(Call::Emulate(line));
    }
}

pub struct RecordingCore(Journal);

impl RecordingCore {
    pub fn new(journal: &Journal) -> Self {
        Self(journal.clone())
    }
}

impl CorePort for RecordingCore {
    fn disable_interrupts(&mut self) {
        self.0.push(Call::DisableInterrupts);
    }

    fn sleep_cpu(&mut self) {
        self.0.push(Call::Sleep);
    }
}

// ── Event sink ───────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<PollerEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &PollerEvent) {
        self.events.push(*event);
    }
}
