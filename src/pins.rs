//! GPIO / register assignments for the ATtiny13A board.
//!
//! Single source of truth: the poller, the adapters, and the trace channel
//! all reference this module rather than hard-coding bit positions.

// ---------------------------------------------------------------------------
// Switch inputs (active-low, internal pull-up)
// ---------------------------------------------------------------------------

/// PB0: switch for emulate routine 0.
pub const LINE0_BIT: u8 = 0;
/// PB1: switch for emulate routine 1.
pub const LINE1_BIT: u8 = 1;
/// PB2: switch for emulate routine 2.
pub const LINE2_BIT: u8 = 2;

/// Number of monitored lines.
pub const LINE_COUNT: usize = 3;

/// All switch inputs as a PORTB bitmask.
pub const LINE_MASK: u8 = (1 << LINE0_BIT) | (1 << LINE1_BIT) | (1 << LINE2_BIT);

// ---------------------------------------------------------------------------
// Register addresses
// ---------------------------------------------------------------------------

/// DDRB, the only register published to the trace channel.
pub const DDRB_IO_ADDR: u8 = 0x17;

/// Offset from I/O space to data space on classic AVR cores.
pub const IO_TO_DATA_OFFSET: u16 = 0x20;
