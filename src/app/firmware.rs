//! Top-level dispatch — the firmware's `main` behaviour.
//!
//! [`Firmware`] owns the configuration, the [`Poller`] and the DDRB trace.
//! All I/O flows through port traits passed in at call sites, so both run
//! modes can be exercised on the host with mock adapters.
//!
//! ```text
//!               ┌── Continuous ──▶ setup ─▶ poll ─▶ poll ─▶ …   (never returns)
//!  run(mode) ───┤
//!               └── SingleShot ──▶ setup ─▶ routine 0 ─▶ cli ─▶ sleep ─▶ Exit::Halted
//! ```

use log::{debug, info, warn};

use crate::config::{FirmwareConfig, RunMode};
use crate::error::Result;
use crate::trace::TraceRecorder;

use super::events::PollerEvent;
use super::lines::LineId;
use super::poller::{PollReport, Poller};
use super::ports::{CorePort, EmulatorPort, EventSink, GpioPort};

/// Default depth of the DDRB change log.
pub const DEFAULT_TRACE_DEPTH: usize = 16;

/// How a run ended. Only single-shot mode ends at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Interrupts are off and the core was put to sleep. On hardware this
    /// is permanent; a hosted boundary layer should terminate the process.
    Halted,
}

pub struct Firmware<const TRACE_DEPTH: usize = DEFAULT_TRACE_DEPTH> {
    config: FirmwareConfig,
    poller: Poller,
    trace: TraceRecorder<TRACE_DEPTH>,
}

impl<const TRACE_DEPTH: usize> Firmware<TRACE_DEPTH> {
    /// Validate `config` and build an idle firmware instance.
    pub fn new(config: FirmwareConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            poller: Poller::new(),
            trace: TraceRecorder::default(),
        })
    }

    pub fn config(&self) -> &FirmwareConfig {
        &self.config
    }

    pub fn poller(&self) -> &Poller {
        &self.poller
    }

    pub fn trace(&self) -> &TraceRecorder<TRACE_DEPTH> {
        &self.trace
    }

    /// Dispatch on the configured [`RunMode`].
    ///
    /// In [`RunMode::Continuous`] this never returns.
    pub fn run<G, E, C, S>(
        &mut self,
        gpio: &mut G,
        emulator: &mut E,
        core: &mut C,
        sink: &mut S,
    ) -> Exit
    where
        G: GpioPort,
        E: EmulatorPort,
        C: CorePort,
        S: EventSink,
    {
        match self.config.mode {
            RunMode::Continuous => self.run_forever(gpio, emulator, sink),
            RunMode::SingleShot => self.run_single_shot(gpio, emulator, core, sink),
        }
    }

    /// Set up, then poll forever.
    pub fn run_forever<G, E, S>(&mut self, gpio: &mut G, emulator: &mut E, sink: &mut S) -> !
    where
        G: GpioPort,
        E: EmulatorPort,
        S: EventSink,
    {
        self.start(RunMode::Continuous, gpio, sink);
        loop {
            self.step(gpio, emulator, sink);
        }
    }

    /// Set up, run routine 0 once without looking at the inputs, then halt.
    pub fn run_single_shot<G, E, C, S>(
        &mut self,
        gpio: &mut G,
        emulator: &mut E,
        core: &mut C,
        sink: &mut S,
    ) -> Exit
    where
        G: GpioPort,
        E: EmulatorPort,
        C: CorePort,
        S: EventSink,
    {
        self.start(RunMode::SingleShot, gpio, sink);

        self.poller.fire(LineId::Line0, emulator);
        sink.emit(&PollerEvent::ShotFired(LineId::Line0));

        // Emitted first: on hardware nothing runs after the sleep.
        sink.emit(&PollerEvent::Halting);
        core.disable_interrupts();
        core.sleep_cpu();
        Exit::Halted
    }

    /// Set up, then poll exactly `iterations` times. Used by simulators and
    /// tests in place of the endless loop.
    ///
    /// Continuous mode only: a [`RunMode::SingleShot`] firmware never polls,
    /// so it does nothing here and reports zero polls. Use [`run`](Self::run)
    /// for single-shot.
    pub fn run_iterations<G, E, S>(
        &mut self,
        gpio: &mut G,
        emulator: &mut E,
        sink: &mut S,
        iterations: u32,
    ) -> u32
    where
        G: GpioPort,
        E: EmulatorPort,
        S: EventSink,
    {
        if self.config.mode != RunMode::Continuous {
            warn!("run_iterations: mode={:?} does not poll", self.config.mode);
            return 0;
        }

        self.start(RunMode::Continuous, gpio, sink);
        for _ in 0..iterations {
            self.step(gpio, emulator, sink);
        }
        debug!(
            "run_iterations: {} polls, invocations={:?}",
            iterations,
            LineId::ALL.map(|line| self.poller.invocations(line))
        );
        iterations
    }

    fn start<G: GpioPort, S: EventSink>(&mut self, mode: RunMode, gpio: &mut G, sink: &mut S) {
        info!("Firmware start: mode={:?}, clock={} Hz", mode, self.config.cpu_hz);
        sink.emit(&PollerEvent::Started(mode));
        self.poller.setup(gpio);
        self.sample_trace(gpio);
    }

    fn step<G, E, S>(&mut self, gpio: &mut G, emulator: &mut E, sink: &mut S) -> PollReport
    where
        G: GpioPort,
        E: EmulatorPort,
        S: EventSink,
    {
        let report = self.poller.poll(gpio, emulator);
        for &line in &report.fired {
            sink.emit(&PollerEvent::LineActive {
                line,
                iteration: report.iteration,
            });
        }
        self.sample_trace(gpio);
        report
    }

    fn sample_trace<G: GpioPort>(&mut self, gpio: &G) {
        if self.config.trace {
            self.trace.record(self.poller.iterations(), gpio.direction());
        }
    }
}
