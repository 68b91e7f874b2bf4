//! Input handlers for the alert popup and the help overlay.

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::tui::AppState;

/// Routes a key to whichever popup is open. Returns `Ok(false)`; popups never
/// quit the application.
pub fn handle_popup_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if state.alert.is_some() {
        // Any key dismisses an alert
        state.alert = None;
        return Ok(false);
    }

    if let Some(help) = state.help.as_mut() {
        if help.handle_input(key) {
            state.help = None;
        }
    }
    Ok(false)
}
