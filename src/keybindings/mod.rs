//! Keyboard navigation and keybindings module.
//!
//! Global shortcuts (help, disconnect) plus bucket browser shortcuts
//! (refresh, create, paging).

pub mod actions;
pub mod bindings;

use gpui::App;

// Re-export action namespaces for convenience
pub use actions::buckets;
pub use actions::global;
pub use bindings::register_keybindings;

/// Initialize the keybindings system.
pub fn init(cx: &mut App) {
    register_keybindings(cx);
}
