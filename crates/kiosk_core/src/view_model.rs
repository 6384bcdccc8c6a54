use crate::{Category, RankingRow};

/// What the display collaborator should be showing. Derived from
/// [`crate::KioskState`]; rendering itself stays in the platform layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    /// Category selection menu.
    #[default]
    Menu,
    /// A joke fetch (and its retry loop) is in progress.
    FetchingJoke { category: Category },
    /// Joke on screen, waiting for a rating key or cancel.
    Joke {
        category: Category,
        primary: String,
        /// "HH:MM" label of the last successful fetch, if any.
        last_updated: Option<String>,
        /// Set while the rating log send (and its retry loop) runs.
        saving: Option<u8>,
    },
    /// Transient confirmation after a successful rating log; shown
    /// briefly before the menu returns.
    Saved,
    /// The single ranking attempt is in progress.
    LoadingRanking,
    /// Leaderboard screen; `rows` may be empty after a failed fetch.
    Ranking { rows: Vec<RankingRow> },
}
