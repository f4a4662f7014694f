//! Fuzz target: `FirmwareConfig::from_image`
//!
//! Feeds arbitrary EEPROM contents to the config decoder. It must never
//! panic, and anything it accepts must be valid and re-encode to an image
//! that decodes to the same config.
//!
//! cargo fuzz run fuzz_config_image

#![no_main]

use idswitch::config::{EEPROM_SIZE, FirmwareConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(config) = FirmwareConfig::from_image(data) else {
        return;
    };
    assert!(config.validate().is_ok(), "decoder accepted an invalid config");

    let mut buf = [0u8; EEPROM_SIZE];
    let image = config.to_image(&mut buf).expect("valid config must encode");
    let again = FirmwareConfig::from_image(image).expect("re-encoded image must decode");
    assert_eq!(config, again);
});
