use crate::view_model::Screen;

/// Modal UI state. A key event is interpreted only per the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Menu,
    Rating,
    Ranking,
}

/// Topic filter for joke selection. Immutable for one joke-rating cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Misc,
    Programming,
    Dark,
    Pun,
    Spooky,
    Christmas,
    Any,
}

impl Category {
    /// Wire label sent as the `category` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Misc => "Misc",
            Category::Programming => "Programming",
            Category::Dark => "Dark",
            Category::Pun => "Pun",
            Category::Spooky => "Spooky",
            Category::Christmas => "Christmas",
            Category::Any => "Any",
        }
    }

    /// Maps a menu digit ('1'..'7') to its category.
    pub fn from_menu_key(key: char) -> Option<Category> {
        match key {
            '1' => Some(Category::Misc),
            '2' => Some(Category::Programming),
            '3' => Some(Category::Dark),
            '4' => Some(Category::Pun),
            '5' => Some(Category::Spooky),
            '6' => Some(Category::Christmas),
            '7' => Some(Category::Any),
            _ => None,
        }
    }
}

/// One leaderboard row as received from the ranking endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    pub rank: u32,
    pub joke: String,
    pub rating: f64,
}

/// Blocking operation currently in flight. Display-only; the mode set
/// stays {Menu, Rating, Ranking} throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Busy {
    FetchingJoke,
    SavingRating,
    LoadingRanking,
}

/// The single owned session record. Exactly one instance exists for the
/// lifetime of the process and only [`crate::update`] mutates it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KioskState {
    mode: Mode,
    category: Option<Category>,
    /// Primary joke segment, retained for the logging payload.
    joke: Option<String>,
    pending_rating: Option<u8>,
    ranking: Vec<RankingRow>,
    last_updated: Option<String>,
    busy: Option<Busy>,
    dirty: bool,
}

impl KioskState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Primary joke text retained for logging; `Some` whenever mode = Rating.
    pub fn current_joke(&self) -> Option<&str> {
        self.joke.as_deref()
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> Screen {
        match self.mode {
            Mode::Menu => match self.busy {
                Some(Busy::FetchingJoke) => Screen::FetchingJoke {
                    category: self.category.unwrap_or(Category::Any),
                },
                Some(Busy::LoadingRanking) => Screen::LoadingRanking,
                _ => Screen::Menu,
            },
            Mode::Rating => Screen::Joke {
                category: self.category.unwrap_or(Category::Any),
                primary: self.joke.clone().unwrap_or_default(),
                last_updated: self.last_updated.clone(),
                saving: self.pending_rating,
            },
            Mode::Ranking => Screen::Ranking {
                rows: self.ranking.clone(),
            },
        }
    }

    pub(crate) fn begin_fetch(&mut self, category: Category) {
        self.category = Some(category);
        self.busy = Some(Busy::FetchingJoke);
        self.dirty = true;
    }

    pub(crate) fn set_joke(&mut self, primary: String, fetched_at: String) {
        self.joke = Some(primary);
        self.last_updated = Some(fetched_at);
        self.mode = Mode::Rating;
        self.busy = None;
        self.dirty = true;
    }

    /// Records the rating about to be logged and hands back the payload
    /// fields. `None` if no joke is on screen.
    pub(crate) fn begin_save(&mut self, rating: u8) -> Option<(Category, String)> {
        let category = self.category?;
        let joke = self.joke.clone()?;
        self.pending_rating = Some(rating);
        self.busy = Some(Busy::SavingRating);
        self.dirty = true;
        Some((category, joke))
    }

    pub(crate) fn finish_save(&mut self) {
        self.return_to_menu();
    }

    pub(crate) fn cancel_rating(&mut self) {
        self.return_to_menu();
    }

    pub(crate) fn begin_ranking_load(&mut self) {
        self.busy = Some(Busy::LoadingRanking);
        self.dirty = true;
    }

    pub(crate) fn show_ranking(&mut self, entries: Vec<RankingRow>) {
        self.ranking = entries;
        self.mode = Mode::Ranking;
        self.busy = None;
        self.dirty = true;
    }

    pub(crate) fn return_to_menu(&mut self) {
        self.mode = Mode::Menu;
        self.category = None;
        self.joke = None;
        self.pending_rating = None;
        self.ranking = Vec::new();
        self.busy = None;
        self.dirty = true;
    }

    pub(crate) fn busy(&self) -> Option<Busy> {
        self.busy
    }
}
