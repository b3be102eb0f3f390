//! Default keybinding definitions.

use gpui::{App, KeyBinding};

use super::actions::buckets::*;
use super::actions::global::*;

/// Register all default keybindings with the application.
pub fn register_keybindings(cx: &mut App) {
    cx.bind_keys(global_bindings());
    cx.bind_keys(bucket_bindings());
}

/// Global keybindings that work in any context.
fn global_bindings() -> Vec<KeyBinding> {
    vec![
        // Session
        KeyBinding::new("cmd-shift-d", Disconnect, None),
        // Help
        KeyBinding::new("shift-/", ShowHelp, None), // ? key
        // Escape
        KeyBinding::new("escape", Escape, None),
    ]
}

/// Bucket browser keybindings.
fn bucket_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("r", Refresh, Some("BucketBrowser")),
        KeyBinding::new("n", NewBucket, Some("BucketBrowser")),
        KeyBinding::new("[", PrevPage, Some("BucketBrowser")),
        KeyBinding::new("]", NextPage, Some("BucketBrowser")),
    ]
}

/// Helper struct for displaying keybinding information in the help overlay.
#[derive(Clone)]
pub struct KeybindingInfo {
    pub key: &'static str,
    pub description: &'static str,
    pub context: Option<&'static str>,
}

/// Get all keybindings for display in help overlay.
pub fn get_all_keybindings() -> Vec<(&'static str, Vec<KeybindingInfo>)> {
    vec![
        (
            "Global",
            vec![
                KeybindingInfo {
                    key: "Cmd+Shift+D",
                    description: "Disconnect from server",
                    context: None,
                },
                KeybindingInfo {
                    key: "?",
                    description: "Show this help",
                    context: None,
                },
                KeybindingInfo {
                    key: "Esc",
                    description: "Close modal / overlay",
                    context: None,
                },
            ],
        ),
        (
            "Buckets",
            vec![
                KeybindingInfo {
                    key: "r",
                    description: "Refresh the listing",
                    context: Some("Buckets"),
                },
                KeybindingInfo {
                    key: "n",
                    description: "Create a bucket",
                    context: Some("Buckets"),
                },
                KeybindingInfo {
                    key: "[",
                    description: "Previous page",
                    context: Some("Buckets"),
                },
                KeybindingInfo {
                    key: "]",
                    description: "Next page",
                    context: Some("Buckets"),
                },
            ],
        ),
    ]
}
