//! PocketDesk library
//!
//! Five small interactive widgets (a counter, a todo list, a reaction-time
//! tester, an HSB color-guessing game and a Hangul pangram tracker) hosted
//! in one terminal UI. Widget logic lives in [`models`] and is independent of
//! the terminal; [`tui`] renders it and routes input.

// Module declarations
pub mod branding;
pub mod config;
pub mod logging;
pub mod models;
pub mod tui;
