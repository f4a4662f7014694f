//! embedded-hal adapter.
//!
//! Drives the poller from any three `embedded_hal::digital::InputPin`s,
//! for boards where a HAL crate owns the GPIO block. The pins must already
//! be configured as pull-up inputs (HAL crates encode this in the pin's
//! type state), so [`GpioPort::enable_pull_ups`] cannot touch a register.
//! It records the requested mask instead; [`HalLines::pull_ups`] reports it
//! so the caller can check setup asked for every line.
//!
//! Unlike a PINB read, the three levels are read one after the other.
//! A read error counts as the line's idle level (high).

use embedded_hal::digital::InputPin;
use log::{debug, trace};

use crate::app::lines::{LineId, LineLevels};
use crate::app::ports::GpioPort;
use crate::pins;

pub struct HalLines<P0, P1, P2> {
    line0: P0,
    line1: P1,
    line2: P2,
    pull_ups: u8,
}

impl<P0, P1, P2> HalLines<P0, P1, P2>
where
    P0: InputPin,
    P1: InputPin,
    P2: InputPin,
{
    pub fn new(line0: P0, line1: P1, line2: P2) -> Self {
        Self {
            line0,
            line1,
            line2,
            pull_ups: 0,
        }
    }

    /// Line bits setup has asked to be pulled up so far.
    pub fn pull_ups(&self) -> u8 {
        self.pull_ups
    }

    /// Give the pins back.
    pub fn release(self) -> (P0, P1, P2) {
        (self.line0, self.line1, self.line2)
    }
}

fn read_low<P: InputPin>(pin: &mut P, line: LineId) -> bool {
    pin.is_low().unwrap_or_else(|_| {
        trace!("hal: {} read failed, treating as high", line);
        false
    })
}

impl<P0, P1, P2> GpioPort for HalLines<P0, P1, P2>
where
    P0: InputPin,
    P1: InputPin,
    P2: InputPin,
{
    fn enable_pull_ups(&mut self, mask: u8) {
        debug_assert_eq!(mask & !pins::LINE_MASK, 0, "pull-up outside the switch lines");
        self.pull_ups |= mask & pins::LINE_MASK;
        debug!("hal: pull-ups 0x{:02x} set by pin configuration", self.pull_ups);
    }

    fn sample_lines(&mut self) -> LineLevels {
        let mut raw = LineLevels::IDLE.raw();
        if read_low(&mut self.line0, LineId::Line0) {
            raw &= !LineId::Line0.mask();
        }
        if read_low(&mut self.line1, LineId::Line1) {
            raw &= !LineId::Line1.mask();
        }
        if read_low(&mut self.line2, LineId::Line2) {
            raw &= !LineId::Line2.mask();
        }
        LineLevels::from_register(raw)
    }

    /// HAL-owned pins are inputs; the direction register is not visible here.
    fn direction(&self) -> u8 {
        0
    }
}
