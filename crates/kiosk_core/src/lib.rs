//! Kiosk core: pure session state machine and view-model helpers.
mod effect;
mod feedback;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use feedback::{normalize_rating, pattern, Tone};
pub use msg::Msg;
pub use state::{Category, KioskState, Mode, RankingRow};
pub use update::update;
pub use view_model::Screen;
