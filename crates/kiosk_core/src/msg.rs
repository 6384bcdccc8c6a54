#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// One key event from the keypad collaborator ({0-9, A-D, *, #}).
    KeyPressed(char),
    /// Joke fetch completed. The fetcher retries until success, so this
    /// always carries a usable primary segment.
    JokeReady {
        primary: String,
        fetched_at: String,
    },
    /// The rating log send completed successfully.
    RatingSaved,
    /// Ranking fetch completed; `entries` is empty when the single
    /// attempt failed.
    RankingReady { entries: Vec<crate::RankingRow> },
    /// A joke fetch or rating log gave up before completing, e.g. on a
    /// misconfigured endpoint URL. Clears the in-flight marker so the
    /// keypad stays live.
    OperationAborted,
}
