use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Key input collaborator: at most one key per poll; `None` means no
/// key event this cycle.
pub trait KeySource {
    fn poll(&mut self) -> Option<char>;
}

/// The 4x4 matrix keypad legend.
const VALID_KEYS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', '*', '#',
];

/// Host stand-in for the keypad: each accepted character typed on
/// stdin is one key event. EOF ends the session.
pub struct StdinKeypad {
    pending: VecDeque<char>,
    eof: bool,
}

impl StdinKeypad {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            eof: false,
        }
    }

    pub fn at_eof(&self) -> bool {
        self.eof
    }
}

impl KeySource for StdinKeypad {
    fn poll(&mut self) -> Option<char> {
        if let Some(key) = self.pending.pop_front() {
            return Some(key);
        }
        if self.eof {
            return None;
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => {
                self.eof = true;
                None
            }
            Ok(_) => {
                self.pending.extend(
                    line.chars()
                        .map(|c| c.to_ascii_uppercase())
                        .filter(|c| VALID_KEYS.contains(c)),
                );
                self.pending.pop_front()
            }
            Err(err) => {
                kiosk_logging::kiosk_warn!("keypad read failed: {}", err);
                self.eof = true;
                None
            }
        }
    }
}
