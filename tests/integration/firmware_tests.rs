//! Integration tests: Firmware dispatch → ports (both run modes).

use idswitch::adapters::hal::HalLines;
use idswitch::adapters::log_sink::LogEventSink;
use idswitch::adapters::sim::{LoggingEmulator, SimCore, SimulatedPortB};
use idswitch::app::events::PollerEvent;
use idswitch::app::firmware::{Exit, Firmware};
use idswitch::app::lines::{LineId, LineLevels};
use idswitch::config::{FirmwareConfig, RunMode};
use idswitch::pins;

use crate::mock_hw::{
    Call, Journal, RecordingCore, RecordingEmulator, RecordingSink, ScriptedGpio, SwitchPin,
};

fn firmware(mode: RunMode) -> Firmware {
    Firmware::new(FirmwareConfig::with_mode(mode)).unwrap()
}

// ── Single-shot ──────────────────────────────────────────────

#[test]
fn single_shot_ignores_inputs_and_halts() {
    for bits in 0u8..8 {
        let journal = Journal::new();
        let mut gpio = ScriptedGpio::new(&journal).then(LineLevels::from_register(!bits));
        let mut emu = RecordingEmulator::new(&journal);
        let mut core = RecordingCore::new(&journal);
        let mut sink = RecordingSink::new();
        let mut fw = firmware(RunMode::SingleShot);

        let exit = fw.run(&mut gpio, &mut emu, &mut core, &mut sink);

        assert_eq!(exit, Exit::Halted);
        assert_eq!(
            journal.calls(),
            [
                Call::PullUps(pins::LINE_MASK),
                Call::Emulate(LineId::Line0),
                Call::DisableInterrupts,
                Call::Sleep,
            ],
            "inputs {bits:03b}"
        );
        assert_eq!(fw.poller().invocations(LineId::Line0), 1);
    }
}

#[test]
fn single_shot_event_sequence() {
    let journal = Journal::new();
    let mut sink = RecordingSink::new();
    let mut fw = firmware(RunMode::SingleShot);

    fw.run(
        &mut ScriptedGpio::new(&journal),
        &mut RecordingEmulator::new(&journal),
        &mut RecordingCore::new(&journal),
        &mut sink,
    );

    assert_eq!(
        sink.events,
        [
            PollerEvent::Started(RunMode::SingleShot),
            PollerEvent::ShotFired(LineId::Line0),
            PollerEvent::Halting,
        ]
    );
}

#[test]
fn single_shot_leaves_sim_core_halted() {
    let mut portb = SimulatedPortB::new();
    portb.press(LineId::Line1);
    let mut emu = LoggingEmulator::new();
    let mut core = SimCore::new();
    let mut fw = firmware(RunMode::SingleShot);

    let exit = fw.run(&mut portb, &mut emu, &mut core, &mut LogEventSink::new());

    assert_eq!(exit, Exit::Halted);
    assert!(core.is_halted());
    assert_eq!(emu.calls(LineId::Line0), 1);
    assert_eq!(emu.calls(LineId::Line1), 0);
    assert_eq!(portb.reads(), 0);
}

// ── Continuous (bounded) ─────────────────────────────────────

#[test]
fn continuous_polls_after_setup() {
    let journal = Journal::new();
    let mut gpio = ScriptedGpio::new(&journal)
        .then(LineLevels::with_active(&[LineId::Line1]))
        .then(LineLevels::IDLE)
        .then(LineLevels::with_active(&[LineId::Line0, LineId::Line1]));
    let mut emu = RecordingEmulator::new(&journal);
    let mut sink = RecordingSink::new();
    let mut fw = firmware(RunMode::Continuous);

    assert_eq!(fw.run_iterations(&mut gpio, &mut emu, &mut sink, 3), 3);

    assert_eq!(
        journal.calls(),
        [
            Call::PullUps(pins::LINE_MASK),
            Call::Sample,
            Call::Emulate(LineId::Line1),
            Call::Sample,
            Call::Sample,
            Call::Emulate(LineId::Line0),
            Call::Emulate(LineId::Line1),
        ]
    );
    assert_eq!(
        &sink.events[1..],
        &[
            PollerEvent::LineActive {
                line: LineId::Line1,
                iteration: 1,
            },
            PollerEvent::LineActive {
                line: LineId::Line0,
                iteration: 3,
            },
            PollerEvent::LineActive {
                line: LineId::Line1,
                iteration: 3,
            },
        ]
    );
    assert_eq!(journal.count(Call::DisableInterrupts), 0);
}

#[test]
fn continuous_never_touches_core() {
    let journal = Journal::new();
    let mut gpio = ScriptedGpio::new(&journal);
    let mut emu = RecordingEmulator::new(&journal);
    let mut fw = firmware(RunMode::Continuous);

    fw.run_iterations(&mut gpio, &mut emu, &mut RecordingSink::new(), 100);

    assert_eq!(journal.count(Call::Sample), 100);
    assert_eq!(journal.count(Call::Sleep), 0);
    assert!(journal.emulated().is_empty());
}

#[test]
fn bounded_run_of_single_shot_firmware_is_a_no_op() {
    let journal = Journal::new();
    let mut gpio = ScriptedGpio::new(&journal).then(LineLevels::with_active(&[LineId::Line1]));
    let mut emu = RecordingEmulator::new(&journal);
    let mut sink = RecordingSink::new();
    let mut fw = firmware(RunMode::SingleShot);

    assert_eq!(fw.run_iterations(&mut gpio, &mut emu, &mut sink, 1), 0);

    assert!(journal.calls().is_empty());
    assert!(sink.events.is_empty());
}

// ── embedded-hal pins ────────────────────────────────────────

#[test]
fn hal_pins_drive_the_firmware() {
    let (sw0, sw1, sw2) = (SwitchPin::new(), SwitchPin::new(), SwitchPin::new());
    let mut lines = HalLines::new(sw0.clone(), sw1, sw2.clone());
    let journal = Journal::new();
    let mut emu = RecordingEmulator::new(&journal);
    let mut sink = RecordingSink::new();
    let mut fw = firmware(RunMode::Continuous);

    sw2.press();
    fw.run_iterations(&mut lines, &mut emu, &mut sink, 2);
    sw2.release();
    sw0.press();
    fw.run_iterations(&mut lines, &mut emu, &mut sink, 1);

    assert_eq!(lines.pull_ups(), pins::LINE_MASK);
    assert_eq!(journal.emulated(), [LineId::Line2, LineId::Line2, LineId::Line0]);
}

// ── Trace channel ────────────────────────────────────────────

#[test]
fn ddrb_changes_are_traced() {
    let mut portb = SimulatedPortB::with_registers(0, 0b0000_0000);
    let mut emu = LoggingEmulator::new();
    let mut sink = RecordingSink::new();
    let config = FirmwareConfig::with_mode(RunMode::Continuous);
    let mut fw: Firmware<8> = Firmware::new(config).unwrap();

    fw.run_iterations(&mut portb, &mut emu, &mut sink, 2);
    portb.set_direction(0b0001_0000);
    fw.run_iterations(&mut portb, &mut emu, &mut sink, 1);

    let values: Vec<u8> = fw.trace().samples().iter().map(|s| s.value).collect();
    assert_eq!(values, [0b0000_0000, 0b0001_0000]);
    assert_eq!(fw.trace().dropped(), 0);
}
