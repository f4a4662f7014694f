//! idswitch — hosted simulation entry point.
//!
//! Runs the firmware against the simulated PORTB register file and
//! logging stand-ins for the emulate routines.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  SimulatedPortB   LoggingEmulator   SimCore   LogSink    │
//! │  (GpioPort)       (EmulatorPort)    (CorePort)(EventSink)│
//! │  ─────────────── Port Trait Boundary ──────────────────  │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │        Firmware  ─▶  Poller (setup / poll)         │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Built with `--features single-shot` the binary runs emulate routine 0
//! once and exits, which is how a test harness drives one routine.
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use idswitch::adapters::log_sink::LogEventSink;
use idswitch::adapters::sim::{LoggingEmulator, SimCore, SimulatedPortB};
use idswitch::app::firmware::{Exit, Firmware};
use idswitch::config::{FirmwareConfig, MCU};
use idswitch::trace::TraceRecorder;

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("╔══════════════════════════════════════╗");
    info!("║  idswitch v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Config ─────────────────────────────────────────────
    let config = FirmwareConfig::default();
    let mut firmware: Firmware = Firmware::new(config)?;
    info!(
        "Target: {} @ {} Hz, mode={:?}",
        MCU,
        firmware.config().cpu_hz,
        firmware.config().mode
    );

    // ── 3. Adapters ───────────────────────────────────────────
    let mut gpio = SimulatedPortB::new();
    let mut emulator = LoggingEmulator::new();
    let mut core = SimCore::new();
    let mut sink = LogEventSink::new();

    // ── 4. Dispatch ───────────────────────────────────────────
    match firmware.run(&mut gpio, &mut emulator, &mut core, &mut sink) {
        Exit::Halted => {
            log_trace(firmware.trace());
            info!("Core halted, exiting");
            std::process::exit(0);
        }
    }
}

fn log_trace<const N: usize>(trace: &TraceRecorder<N>) {
    let symbol = trace.symbol();
    for sample in trace.samples() {
        info!(
            "TRACE | {} @0x{:02x} = 0x{:02x} (iteration {})",
            symbol.name,
            symbol.register.data_addr(),
            sample.value,
            sample.iteration
        );
    }
    if trace.dropped() > 0 {
        info!("TRACE | {} changes dropped", trace.dropped());
    }
}
