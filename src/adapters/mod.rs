//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements               | Connects to                   |
//! |------------|--------------------------|-------------------------------|
//! | `avr`      | GpioPort, CorePort       | ATtiny13A PORTB / MCUCR / SREG|
//! |            | EmulatorPort             | linked `emulateid0..2`        |
//! | `hal`      | GpioPort                 | any embedded-hal `InputPin`s  |
//! | `log_sink` | EventSink                | `log` facade                  |
//! | `sim`      | GpioPort, CorePort       | in-memory PORTB / CPU model   |
//! |            | EmulatorPort             | logging stand-in routines     |

#[cfg(all(target_arch = "avr", feature = "avr"))]
pub mod avr;
pub mod hal;
pub mod log_sink;
pub mod sim;
