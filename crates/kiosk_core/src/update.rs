use crate::state::Busy;
use crate::{normalize_rating, Category, Effect, KioskState, Mode, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Effects run synchronously in the platform layer, so a completion
/// message (`JokeReady`, `RatingSaved`, `RankingReady`) always arrives
/// before the next key event is observed.
pub fn update(mut state: KioskState, msg: Msg) -> (KioskState, Vec<Effect>) {
    let effects = match msg {
        Msg::KeyPressed(key) => handle_key(&mut state, key),
        Msg::JokeReady {
            primary,
            fetched_at,
        } => {
            if state.busy() == Some(Busy::FetchingJoke) {
                state.set_joke(primary, fetched_at);
            }
            Vec::new()
        }
        Msg::RatingSaved => {
            if state.busy() == Some(Busy::SavingRating) {
                state.finish_save();
            }
            Vec::new()
        }
        Msg::RankingReady { entries } => {
            // Entered regardless of fetch outcome; an empty list renders
            // as a bare leaderboard header.
            if state.busy() == Some(Busy::LoadingRanking) {
                state.show_ranking(entries);
            }
            Vec::new()
        }
        Msg::OperationAborted => {
            // An aborted effect must never leave the kiosk stuck on its
            // progress screen with every key being dropped.
            if state.busy().is_some() {
                state.return_to_menu();
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn handle_key(state: &mut KioskState, key: char) -> Vec<Effect> {
    if state.busy().is_some() {
        // No keys are observed while an effect runs; anything that still
        // arrives (e.g. replayed in tests) is dropped, not queued.
        return Vec::new();
    }

    match state.mode() {
        Mode::Menu => match key {
            'A' => {
                state.begin_ranking_load();
                vec![Effect::FetchRanking]
            }
            _ => match Category::from_menu_key(key) {
                Some(category) => {
                    state.begin_fetch(category);
                    vec![Effect::FetchJoke { category }]
                }
                None => Vec::new(),
            },
        },
        Mode::Rating => match key {
            '1'..='5' => {
                // Clamped once; feedback and logging see the same value.
                let rating = normalize_rating(key);
                match state.begin_save(rating) {
                    Some((category, joke)) => vec![
                        Effect::PlayFeedback { rating },
                        Effect::LogRating {
                            category,
                            joke,
                            rating,
                        },
                    ],
                    None => Vec::new(),
                }
            }
            '*' => {
                state.cancel_rating();
                Vec::new()
            }
            _ => Vec::new(),
        },
        Mode::Ranking => match key {
            '*' => {
                state.return_to_menu();
                Vec::new()
            }
            _ => Vec::new(),
        },
    }
}
