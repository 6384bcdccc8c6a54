mod app;
mod config;
mod display;
mod effects;
mod keypad;
mod logging;
mod tone;

pub use app::run_app;
