//! Unified error type for the idswitch firmware.
//!
//! The poller itself cannot fail: register reads and writes are assumed to
//! succeed. Errors only arise around configuration, which is validated
//! before the firmware starts and encoded into a fixed EEPROM image.
//! All variants are `Copy` so they travel without allocation.

use core::fmt;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid.
    Config(&'static str),
    /// Configuration could not be encoded into the EEPROM image.
    Encode,
    /// EEPROM image could not be decoded into a configuration.
    Decode,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Encode => write!(f, "config image encode failed"),
            Self::Decode => write!(f, "config image decode failed"),
        }
    }
}

impl core::error::Error for Error {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
