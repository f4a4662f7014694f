//! Firmware configuration
//!
//! The run mode used to be a build-time switch. It is now a plain value so
//! one build can be driven in either mode; the host binary still picks its
//! default from the `single-shot` cargo feature.
//!
//! The configuration can be stored in EEPROM as a compact postcard image.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Target microcontroller.
pub const MCU: &str = "attiny13a";

/// System clock after the CLKPR prescaler (9.6 MHz / 64 ≈ 125 kHz).
pub const DEFAULT_CPU_HZ: u32 = 125_000;

/// EEPROM size of the ATtiny13A; a config image must fit in it.
pub const EEPROM_SIZE: usize = 64;

/// Top-level dispatch mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunMode {
    /// Set up, then poll the switches forever.
    Continuous,
    /// Set up, run emulate routine 0 once, then halt the core.
    SingleShot,
}

impl Default for RunMode {
    fn default() -> Self {
        if cfg!(feature = "single-shot") {
            Self::SingleShot
        } else {
            Self::Continuous
        }
    }
}

/// Core firmware configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareConfig {
    /// Dispatch mode selected for this run.
    pub mode: RunMode,
    /// System clock in Hz (informational; the poller is not timed)
    pub cpu_hz: u32,
    /// Sample DDRB into the diagnostic trace channel.
    pub trace: bool,
}

impl Default for FirmwareConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::default(),
            cpu_hz: DEFAULT_CPU_HZ,
            trace: true,
        }
    }
}

impl FirmwareConfig {
    /// Convenience constructor for a given mode with default settings.
    pub fn with_mode(mode: RunMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.cpu_hz == 0 {
            return Err(Error::Config("cpu_hz must be non-zero"));
        }
        Ok(())
    }

    /// Encode into `buf`, returning the used prefix.
    pub fn to_image<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8]> {
        self.validate()?;
        let used = postcard::to_slice(self, buf).map_err(|_| Error::Encode)?;
        if used.len() > EEPROM_SIZE {
            return Err(Error::Encode);
        }
        Ok(used)
    }

    /// Decode and validate an image previously written by [`to_image`](Self::to_image).
    pub fn from_image(bytes: &[u8]) -> Result<Self> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| Error::Decode)?;
        config.validate()?;
        Ok(config)
    }
}
