//! Console session state management.
//!
//! This module manages the global state for the active console session:
//! which server the app is talking to and the saved profiles.

use gpui::*;

use crate::services::{api::ConsoleClient, store::{AppStore, ServerProfile}};

/// Connection status for the console session.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Disconnected,
    Connecting,
    Connected,
}

/// Global state for the console session.
pub struct SessionState {
    /// List of saved server profiles.
    pub saved_profiles: Vec<ServerProfile>,
    /// Profile the session is connected (or connecting) to.
    pub active_profile: Option<ServerProfile>,
    /// API client for the active session.
    pub client: Option<ConsoleClient>,
    /// Current session status.
    pub status: SessionStatus,
}

impl Global for SessionState {}

impl SessionState {
    /// Initialize the global session state.
    pub fn init(cx: &mut App) {
        let this = SessionState {
            saved_profiles: vec![],
            active_profile: None,
            client: None,
            status: SessionStatus::Disconnected,
        };
        cx.set_global(this);

        // Load saved profiles on startup
        cx.spawn(async move |cx| {
            if let Ok(store) = AppStore::singleton().await {
                if let Ok(profiles) = store.profiles().load_all().await {
                    let _ = cx.update_global::<SessionState, _>(|state, _cx| {
                        state.saved_profiles = profiles;
                    });
                }
            }
        })
        .detach();
    }

    /// Check if connected to a server.
    pub fn is_connected(&self) -> bool {
        matches!(self.status, SessionStatus::Connected)
    }

    /// Endpoint of the active session, for display.
    pub fn active_endpoint(&self) -> Option<String> {
        self.active_profile.as_ref().map(|p| p.endpoint.clone())
    }
}
