/// One step of the audible feedback pattern: a tone of `freq_hz` for
/// `on_ms`, then silence for `pause_ms`. Steps play strictly
/// sequentially and block the calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub freq_hz: u32,
    pub on_ms: u64,
    pub pause_ms: u64,
}

const fn tone(freq_hz: u32, on_ms: u64, pause_ms: u64) -> Tone {
    Tone {
        freq_hz,
        on_ms,
        pause_ms,
    }
}

/// Clamps a rating key into [1,5]. Keys below '1' map to 1, above '5'
/// to 5. The state machine only feeds '1'..'5', so clamping is a
/// safety net, not a reachable path in normal operation.
pub fn normalize_rating(key: char) -> u8 {
    let value = key as i64 - '0' as i64;
    value.clamp(1, 5) as u8
}

/// Fixed rating-to-pattern table. Pure and deterministic; the input is
/// clamped into [1,5] first.
pub fn pattern(rating: u8) -> Vec<Tone> {
    match rating.clamp(1, 5) {
        1 => vec![tone(700, 120, 200)],
        2 => vec![tone(800, 120, 150); 2],
        3 => vec![tone(1000, 120, 100); 3],
        4 => vec![
            tone(900, 120, 80),
            tone(1100, 120, 80),
            tone(1300, 120, 80),
            tone(1500, 150, 120),
        ],
        _ => [tone(1600, 100, 60), tone(1800, 200, 120)]
            .into_iter()
            .cycle()
            .take(12)
            .collect(),
    }
}
