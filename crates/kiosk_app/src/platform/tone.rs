use std::thread;
use std::time::Duration;

use kiosk_core::Tone;
use kiosk_logging::kiosk_debug;

/// Tone output collaborator. Playing a tone blocks the calling thread
/// for the tone's full on + pause duration.
pub trait ToneSink {
    fn play(&self, tone: &Tone);
}

/// Host stand-in for the buzzer: logs each tone and blocks for its
/// real duration, so feedback timing matches the device.
pub struct ConsoleTone;

impl ToneSink for ConsoleTone {
    fn play(&self, tone: &Tone) {
        kiosk_debug!("tone {} Hz for {} ms", tone.freq_hz, tone.on_ms);
        thread::sleep(Duration::from_millis(tone.on_ms));
        thread::sleep(Duration::from_millis(tone.pause_ms));
    }
}
