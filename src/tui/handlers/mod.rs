//! Input handler modules for different TUI contexts.

pub mod main;
pub mod popups;

// Re-export handler functions
pub use main::handle_main_input;
pub use popups::handle_popup_input;
