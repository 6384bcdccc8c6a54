use crate::Category;

/// Blocking work requested by [`crate::update`]. The platform runner
/// executes each effect to completion before the next key is observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one joke for the category, retrying until success.
    FetchJoke { category: Category },
    /// Play the audible pattern for a rating in [1,5].
    PlayFeedback { rating: u8 },
    /// Send one rating record, retrying until success.
    LogRating {
        category: Category,
        joke: String,
        rating: u8,
    },
    /// Fetch the leaderboard once; failures degrade to an empty list.
    FetchRanking,
}
