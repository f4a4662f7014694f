//! Hosted simulation adapters.
//!
//! [`SimulatedPortB`] models the PORTB register file closely enough to
//! exercise the poller off-chip: pull-ups, floating inputs, and switches
//! that pull a line to ground. [`SimCore`] stands in for the CPU's
//! interrupt flag and sleep instruction, and [`LoggingEmulator`] for the
//! externally linked emulate routines.

use log::{info, trace};

use crate::app::lines::{LineId, LineLevels};
use crate::app::ports::{CorePort, EmulatorPort, GpioPort};
use crate::pins;

// ── PORTB register file ───────────────────────────────────────

/// PORTB, DDRB, and the physical state of the switches.
///
/// PINB is derived on every read. For each bit:
/// - output (DDRB=1): reads back the PORTB bit
/// - input, switch closed: reads 0
/// - input, pull-up on (PORTB=1): reads 1
/// - input, floating: reads 0
#[derive(Debug, Clone, Default)]
pub struct SimulatedPortB {
    port: u8,
    ddr: u8,
    closed: u8,
    reads: u32,
}

impl SimulatedPortB {
    /// Reset state: all inputs, no pull-ups, nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from explicit PORTB/DDRB values.
    pub fn with_registers(port: u8, ddr: u8) -> Self {
        Self {
            port,
            ddr,
            ..Self::default()
        }
    }

    /// Close the switch on `line` (pull it to ground).
    pub fn press(&mut self, line: LineId) {
        self.closed |= line.mask();
    }

    pub fn release(&mut self, line: LineId) {
        self.closed &= !line.mask();
    }

    /// Close exactly the switches in `lines`.
    pub fn set_pressed(&mut self, lines: &[LineId]) {
        self.closed = lines.iter().fold(0, |m, line| m | line.mask());
    }

    pub fn set_direction(&mut self, ddr: u8) {
        self.ddr = ddr;
    }

    pub fn port(&self) -> u8 {
        self.port
    }

    /// Current PINB value.
    pub fn pin(&self) -> u8 {
        let outputs = self.port & self.ddr;
        let inputs = self.port & !self.ddr & !self.closed;
        outputs | inputs
    }

    /// Number of PINB reads performed through [`GpioPort::sample_lines`].
    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl GpioPort for SimulatedPortB {
    fn enable_pull_ups(&mut self, mask: u8) {
        self.port |= mask;
        trace!("sim: PORTB |= 0x{:02x} -> 0x{:02x}", mask, self.port);
    }

    fn sample_lines(&mut self) -> LineLevels {
        self.reads = self.reads.wrapping_add(1);
        LineLevels::from_register(self.pin())
    }

    fn direction(&self) -> u8 {
        self.ddr
    }
}

// ── CPU core ─────────────────────────────────────────────────

/// Global interrupt flag and sleep state.
#[derive(Debug, Clone)]
pub struct SimCore {
    interrupts_enabled: bool,
    asleep: bool,
}

impl SimCore {
    pub fn new() -> Self {
        Self {
            interrupts_enabled: true,
            asleep: false,
        }
    }

    pub fn interrupts_enabled(&self) -> bool {
        self.interrupts_enabled
    }

    /// Asleep with interrupts off: nothing can wake the core again.
    pub fn is_halted(&self) -> bool {
        self.asleep && !self.interrupts_enabled
    }
}

impl Default for SimCore {
    fn default() -> Self {
        Self::new()
    }
}

impl CorePort for SimCore {
    fn disable_interrupts(&mut self) {
        self.interrupts_enabled = false;
    }

    fn sleep_cpu(&mut self) {
        self.asleep = true;
        if self.is_halted() {
            info!("sim: sleeping with interrupts off, core halted");
        }
    }
}

// ── Emulate routines ─────────────────────────────────────────

/// Host stand-in for `emulateid0..2`: logs and counts each call.
#[derive(Debug, Clone, Default)]
pub struct LoggingEmulator {
    calls: [u32; pins::LINE_COUNT],
}

impl LoggingEmulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self, line: LineId) -> u32 {
        self.calls[line.index()]
    }
}

impl EmulatorPort for LoggingEmulator {
    fn emulate(&mut self, line: LineId) {
        let count = &mut self.calls[line.index()];
        *count = count.wrapping_add(1);
        info!("emulate | id{} (call #{})", line.index(), count);
    }
}
