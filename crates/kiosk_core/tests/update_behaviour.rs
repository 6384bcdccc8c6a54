use std::sync::Once;

use kiosk_core::{update, Category, Effect, KioskState, Mode, Msg, Screen};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(kiosk_logging::initialize_for_tests);
}

fn press(state: KioskState, key: char) -> (KioskState, Vec<Effect>) {
    update(state, Msg::KeyPressed(key))
}

/// Drives the machine through a successful fetch into Rating mode.
fn fetch_joke(state: KioskState, key: char, primary: &str) -> KioskState {
    let (state, effects) = press(state, key);
    assert_eq!(effects.len(), 1);
    let (state, effects) = update(
        state,
        Msg::JokeReady {
            primary: primary.to_string(),
            fetched_at: "12:34".to_string(),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn menu_digit_selects_category_and_requests_fetch() {
    init_logging();
    let state = KioskState::new();

    let (state, effects) = press(state, '2');

    assert_eq!(
        effects,
        vec![Effect::FetchJoke {
            category: Category::Programming
        }]
    );
    assert_eq!(state.mode(), Mode::Menu);
    assert_eq!(
        state.view(),
        Screen::FetchingJoke {
            category: Category::Programming
        }
    );
}

#[test]
fn joke_ready_enters_rating_with_category_and_joke() {
    init_logging();
    let state = fetch_joke(KioskState::new(), '2', "Why do programmers prefer dark mode?");

    assert_eq!(state.mode(), Mode::Rating);
    assert_eq!(state.category(), Some(Category::Programming));
    assert_eq!(
        state.current_joke(),
        Some("Why do programmers prefer dark mode?")
    );
    assert_eq!(
        state.view(),
        Screen::Joke {
            category: Category::Programming,
            primary: "Why do programmers prefer dark mode?".to_string(),
            last_updated: Some("12:34".to_string()),
            saving: None,
        }
    );
}

#[test]
fn rating_key_plays_feedback_then_logs_same_value() {
    init_logging();
    let state = fetch_joke(KioskState::new(), '2', "A joke");

    let (state, effects) = press(state, '4');

    assert_eq!(
        effects,
        vec![
            Effect::PlayFeedback { rating: 4 },
            Effect::LogRating {
                category: Category::Programming,
                joke: "A joke".to_string(),
                rating: 4,
            },
        ]
    );
    // Still on the joke screen with the saving indicator until the log
    // send reports success.
    assert_eq!(state.mode(), Mode::Rating);
    match state.view() {
        Screen::Joke { saving, .. } => assert_eq!(saving, Some(4)),
        other => panic!("unexpected screen {other:?}"),
    }
}

#[test]
fn rating_saved_returns_to_menu() {
    init_logging();
    let state = fetch_joke(KioskState::new(), '1', "A joke");
    let (state, _effects) = press(state, '5');

    let (state, effects) = update(state, Msg::RatingSaved);

    assert!(effects.is_empty());
    assert_eq!(state.mode(), Mode::Menu);
    assert_eq!(state.category(), None);
    assert_eq!(state.current_joke(), None);
    assert_eq!(state.view(), Screen::Menu);
}

#[test]
fn star_in_rating_cancels_without_logging() {
    init_logging();
    let state = fetch_joke(KioskState::new(), '3', "A dark joke");

    let (state, effects) = press(state, '*');

    assert!(effects.is_empty());
    assert_eq!(state.mode(), Mode::Menu);
    assert_eq!(state.current_joke(), None);
}

#[test]
fn ranking_key_requests_fetch_and_enters_ranking_even_when_empty() {
    init_logging();
    let state = KioskState::new();

    let (state, effects) = press(state, 'A');
    assert_eq!(effects, vec![Effect::FetchRanking]);
    assert_eq!(state.view(), Screen::LoadingRanking);

    let (state, effects) = update(state, Msg::RankingReady { entries: vec![] });
    assert!(effects.is_empty());
    assert_eq!(state.mode(), Mode::Ranking);
    assert_eq!(state.view(), Screen::Ranking { rows: vec![] });

    let (state, effects) = press(state, '*');
    assert!(effects.is_empty());
    assert_eq!(state.mode(), Mode::Menu);
}

#[test]
fn unmapped_keys_are_ignored_in_every_mode() {
    init_logging();

    // Menu: '8', '9', '0', '#', 'B' do nothing.
    for key in ['8', '9', '0', '#', 'B'] {
        let (state, effects) = press(KioskState::new(), key);
        assert!(effects.is_empty(), "key {key:?} should be a no-op");
        assert_eq!(state.mode(), Mode::Menu);
    }

    // Rating: digits outside 1-5 and letters do nothing.
    let rated = fetch_joke(KioskState::new(), '4', "A pun");
    for key in ['6', '0', 'A', '#'] {
        let (state, effects) = press(rated.clone(), key);
        assert!(effects.is_empty(), "key {key:?} should be a no-op");
        assert_eq!(state.mode(), Mode::Rating);
    }

    // Ranking: everything except '*' does nothing.
    let (state, _) = press(KioskState::new(), 'A');
    let (ranking, _) = update(state, Msg::RankingReady { entries: vec![] });
    for key in ['1', 'A', '#'] {
        let (state, effects) = press(ranking.clone(), key);
        assert!(effects.is_empty(), "key {key:?} should be a no-op");
        assert_eq!(state.mode(), Mode::Ranking);
    }
}

#[test]
fn aborted_fetch_returns_to_menu_and_keeps_the_keypad_live() {
    init_logging();
    let (state, effects) = press(KioskState::new(), '2');
    assert_eq!(effects.len(), 1);

    // The fetch effect gave up instead of delivering a joke. The kiosk
    // must not stay on the progress screen dropping every key.
    let (state, effects) = update(state, Msg::OperationAborted);
    assert!(effects.is_empty());
    assert_eq!(state.mode(), Mode::Menu);
    assert_eq!(state.view(), Screen::Menu);

    let (state, effects) = press(state, '1');
    assert_eq!(
        effects,
        vec![Effect::FetchJoke {
            category: Category::Misc
        }]
    );
    assert_eq!(
        state.view(),
        Screen::FetchingJoke {
            category: Category::Misc
        }
    );
}

#[test]
fn aborted_save_returns_to_menu_and_keeps_the_keypad_live() {
    init_logging();
    let state = fetch_joke(KioskState::new(), '3', "A dark joke");
    let (state, _effects) = press(state, '4');

    let (state, effects) = update(state, Msg::OperationAborted);
    assert!(effects.is_empty());
    assert_eq!(state.mode(), Mode::Menu);
    assert_eq!(state.current_joke(), None);

    let (_state, effects) = press(state, 'A');
    assert_eq!(effects, vec![Effect::FetchRanking]);
}

#[test]
fn keys_arriving_while_busy_are_dropped() {
    init_logging();
    let (state, _effects) = press(KioskState::new(), '2');

    // A key replayed while the fetch effect is conceptually in flight
    // must not start a second fetch or change the selection.
    let (state, effects) = press(state, '5');
    assert!(effects.is_empty());
    assert_eq!(state.category(), Some(Category::Programming));
}
