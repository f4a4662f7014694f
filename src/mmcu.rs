//! simavr firmware metadata (`.mmcu` ELF section).
//!
//! simavr reads a sequence of `tag, len, payload[len]` records from the
//! `.mmcu` section of the firmware ELF before it starts the core. This
//! firmware publishes the MCU name, its clock, and one VCD trace entry per
//! [`TRACE_SYMBOLS`] register. The image is built at compile time; the AVR
//! adapter places it in the section.
//!
//! Multi-byte values are little-endian and pointers are 16 bits wide, as on
//! the target.

use crate::config::{DEFAULT_CPU_HZ, MCU};
use crate::trace::{TRACE_SYMBOLS, TraceSymbol};

pub const TAG_NAME: u8 = 1;
pub const TAG_FREQUENCY: u8 = 2;
pub const TAG_VCD_TRACE: u8 = 14;

/// Fixed width of a VCD symbol name, NUL padded.
pub const VCD_NAME_LEN: usize = 32;

const NAME_RECORD_LEN: usize = 2 + MCU.len() + 1;
const FREQUENCY_RECORD_LEN: usize = 2 + 4;
// mask, 16-bit register address, name
const VCD_RECORD_LEN: usize = 2 + 1 + 2 + VCD_NAME_LEN;

pub const MMCU_LEN: usize =
    NAME_RECORD_LEN + FREQUENCY_RECORD_LEN + VCD_RECORD_LEN * TRACE_SYMBOLS.len();

/// The complete `.mmcu` payload.
pub const MMCU_IMAGE: [u8; MMCU_LEN] = build_image();

const fn put_str(buf: &mut [u8; MMCU_LEN], at: usize, s: &str) {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        buf[at + i] = bytes[i];
        i += 1;
    }
}

const fn put_vcd(buf: &mut [u8; MMCU_LEN], at: usize, symbol: TraceSymbol) {
    assert!(symbol.name.len() < VCD_NAME_LEN);
    let addr = symbol.register.data_addr().to_le_bytes();
    buf[at] = TAG_VCD_TRACE;
    buf[at + 1] = (VCD_RECORD_LEN - 2) as u8;
    // Mask 0: trace the whole register.
    buf[at + 2] = 0;
    buf[at + 3] = addr[0];
    buf[at + 4] = addr[1];
    put_str(buf, at + 5, symbol.name);
}

const fn build_image() -> [u8; MMCU_LEN] {
    let mut buf = [0u8; MMCU_LEN];

    buf[0] = TAG_NAME;
    buf[1] = (MCU.len() + 1) as u8;
    put_str(&mut buf, 2, MCU);

    let mut at = NAME_RECORD_LEN;
    let hz = DEFAULT_CPU_HZ.to_le_bytes();
    buf[at] = TAG_FREQUENCY;
    buf[at + 1] = 4;
    buf[at + 2] = hz[0];
    buf[at + 3] = hz[1];
    buf[at + 4] = hz[2];
    buf[at + 5] = hz[3];

    at += FREQUENCY_RECORD_LEN;
    let mut i = 0;
    while i < TRACE_SYMBOLS.len() {
        put_vcd(&mut buf, at, TRACE_SYMBOLS[i]);
        at += VCD_RECORD_LEN;
        i += 1;
    }

    buf
}
