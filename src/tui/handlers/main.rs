//! Main input handler: shell shortcuts first, then the active widget.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::config::WidgetKind;
use crate::tui::AppState;

/// Handle a key with no popup open. Returns `Ok(true)` when the user quit.
pub fn handle_main_input(state: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::F(1) => state.open_help(),
        KeyCode::Char('n') if ctrl => state.switch_to(state.active.next()),
        KeyCode::Char('p') if ctrl => state.switch_to(state.active.previous()),
        KeyCode::Char(c @ '1'..='5') if alt => {
            let index = c as usize - '1' as usize;
            state.switch_to(WidgetKind::ALL[index]);
        }
        _ => state.dispatch_key(key, now),
    }
    Ok(false)
}
