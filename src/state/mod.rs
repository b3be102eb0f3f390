//! Global application state.

mod session;
mod session_actions;

pub use session::{SessionState, SessionStatus};
pub use session_actions::{
    add_profile, delete_profile, session_connect, session_disconnect, test_profile,
    update_profile,
};

use gpui::App;

/// Initialize all global state.
pub fn init(cx: &mut App) {
    SessionState::init(cx);
}
