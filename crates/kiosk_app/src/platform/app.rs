use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use kiosk_core::{update, KioskState, Msg, Screen};
use kiosk_logging::{kiosk_info, kiosk_trace};

use super::display;
use super::effects::EffectRunner;
use super::keypad::{KeySource, StdinKeypad};
use super::tone::ConsoleTone;
use super::{config, logging};

/// Keypad poll interval of the control loop.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How long the "Saved!" confirmation stays up before the menu returns.
const SAVED_DWELL: Duration = Duration::from_millis(1500);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::Both);

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = config::load(config_path.as_deref());
    kiosk_info!("kiosk starting; joke endpoint {}", config.joke_url);

    let runner = EffectRunner::new(&config, Box::new(ConsoleTone));
    let mut keypad = StdinKeypad::new();
    let mut state = KioskState::new();

    display::render(&state.view());

    let mut cycle: u64 = 0;
    loop {
        cycle += 1;
        kiosk_logging::set_poll_cycle(cycle);

        let Some(key) = keypad.poll() else {
            if keypad.at_eof() {
                break;
            }
            thread::sleep(POLL_INTERVAL);
            continue;
        };

        kiosk_trace!("cycle {}: key {:?}", kiosk_logging::poll_cycle(), key);
        state = dispatch(state, Msg::KeyPressed(key), &runner);
        thread::sleep(POLL_INTERVAL);
    }

    kiosk_info!("keypad input ended; shutting down");
    Ok(())
}

/// Applies one message, renders any state change, then runs the
/// resulting effects to completion and feeds their completion messages
/// back in. Everything here blocks; no key is observed meanwhile.
fn dispatch(state: KioskState, msg: Msg, runner: &EffectRunner) -> KioskState {
    if matches!(msg, Msg::RatingSaved) {
        display::render(&Screen::Saved);
        thread::sleep(SAVED_DWELL);
    }
    let (mut state, effects) = update(state, msg);

    if state.consume_dirty() {
        display::render(&state.view());
    }

    for effect in effects {
        if let Some(reply) = runner.run(effect) {
            state = dispatch(state, reply, runner);
        }
    }

    state
}
