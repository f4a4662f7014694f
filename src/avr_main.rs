//! idswitch — ATtiny13A entry point.
//!
//! Wires the register adapters to the firmware. The emulate routines are
//! provided at link time. Build with `--features avr` (add `single-shot`
//! for the simulator-exit variant).

#![no_std]
#![no_main]

use panic_halt as _;

use idswitch::adapters::avr::{AvrCore, AvrPortB, LinkedEmulator};
use idswitch::adapters::log_sink::LogEventSink;
use idswitch::app::firmware::{Exit, Firmware};
use idswitch::config::FirmwareConfig;

#[avr_device::entry]
fn main() -> ! {
    let Some(dp) = avr_device::attiny13a::Peripherals::take() else {
        halt();
    };

    // 64 bytes of SRAM: no trace log on the chip itself.
    let config = FirmwareConfig {
        trace: false,
        ..FirmwareConfig::default()
    };
    let Ok(mut firmware) = Firmware::<1>::new(config) else {
        halt();
    };

    let mut gpio = AvrPortB::new(dp.PORTB);
    let mut core = AvrCore::new(dp.CPU);
    let mut emulator = LinkedEmulator;
    let mut sink = LogEventSink::new();

    match firmware.run(&mut gpio, &mut emulator, &mut core, &mut sink) {
        Exit::Halted => halt(),
    }
}

fn halt() -> ! {
    avr_device::interrupt::disable();
    loop {
        avr_device::asm::sleep();
    }
}
