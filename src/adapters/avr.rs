//! ATtiny13A register adapters.
//!
//! Direct PORTB/CPU register access through `avr-device`, and the
//! link-time emulate routines. Only built for AVR targets with the `avr`
//! feature; everything else in the crate is target-independent.

use avr_device::attiny13a::{CPU, PORTB};
use avr_device::interrupt;

use crate::app::lines::{LineId, LineLevels};
use crate::app::ports::{CorePort, EmulatorPort, GpioPort};
use crate::mmcu::{MMCU_IMAGE, MMCU_LEN};

/// MCU name, clock and the DDRB trace entry for simavr.
#[used]
#[unsafe(link_section = ".mmcu")]
static MMCU: [u8; MMCU_LEN] = MMCU_IMAGE;

unsafe extern "C" {
    fn emulateid0();
    fn emulateid1();
    fn emulateid2();
}

pub struct AvrPortB {
    portb: PORTB,
}

impl AvrPortB {
    pub fn new(portb: PORTB) -> Self {
        Self { portb }
    }
}

impl GpioPort for AvrPortB {
    fn enable_pull_ups(&mut self, mask: u8) {
        // SAFETY: any bit pattern is valid for PORTB.
        self.portb.portb.modify(|r, w| unsafe { w.bits(r.bits() | mask) });
    }

    fn sample_lines(&mut self) -> LineLevels {
        LineLevels::from_register(self.portb.pinb.read().bits())
    }

    fn direction(&self) -> u8 {
        self.portb.ddrb.read().bits()
    }
}

pub struct AvrCore {
    cpu: CPU,
}

impl AvrCore {
    pub fn new(cpu: CPU) -> Self {
        Self { cpu }
    }
}

impl CorePort for AvrCore {
    fn disable_interrupts(&mut self) {
        interrupt::disable();
    }

    fn sleep_cpu(&mut self) {
        // Sleep mode bits keep their reset value (idle).
        self.cpu.mcucr.modify(|_, w| w.se().set_bit());
        avr_device::asm::sleep();
    }
}

/// Calls into the externally linked `emulateid0..2`.
pub struct LinkedEmulator;

impl EmulatorPort for LinkedEmulator {
    fn emulate(&mut self, line: LineId) {
        // SAFETY: the routines take no arguments and return nothing; they are
        // provided by the firmware image at link time.
        unsafe {
            match line {
                LineId::Line0 => emulateid0(),
                LineId::Line1 => emulateid1(),
                LineId::Line2 => emulateid2(),
            }
        }
    }
}
