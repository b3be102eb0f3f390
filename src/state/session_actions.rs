//! Session state actions.
//!
//! This module contains actions that modify the global SessionState.

use gpui::*;

use crate::services::{
    api::ConsoleClient,
    store::{AppStore, ProfilesRepository, ServerProfile},
};

use super::session::{SessionState, SessionStatus};

fn build_client(profile: &ServerProfile) -> anyhow::Result<ConsoleClient> {
    let secret = ProfilesRepository::get_profile_secret(&profile.id).ok();
    ConsoleClient::new(&profile.endpoint, profile.access_key.clone(), secret)
}

/// Connect the session to a server profile.
///
/// The handshake is a minimal listing call; the browser is only shown once
/// it succeeds.
pub fn session_connect(profile: &ServerProfile, cx: &mut App) {
    let profile = profile.clone();

    let client = match build_client(&profile) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build client for {}: {}", profile.name, e);
            return;
        }
    };

    cx.update_global::<SessionState, _>(|state, _cx| {
        state.status = SessionStatus::Connecting;
        state.active_profile = Some(profile.clone());
    });

    cx.spawn(async move |cx| {
        let result = client.validate().await;

        let _ = cx.update_global::<SessionState, _>(|state, _cx| match result {
            Ok(_) => {
                state.client = Some(client);
                state.status = SessionStatus::Connected;
                tracing::info!("Connected to {}", profile.endpoint);
            }
            Err(e) => {
                state.client = None;
                state.status = SessionStatus::Disconnected;
                state.active_profile = None;
                tracing::error!("Failed to connect to {}: {}", profile.endpoint, e);
            }
        });
    })
    .detach();
}

/// Disconnect the current session.
pub fn session_disconnect(cx: &mut App) {
    cx.update_global::<SessionState, _>(|state, _cx| {
        state.client = None;
        state.status = SessionStatus::Disconnected;
        state.active_profile = None;
    });
}

/// Add a new server profile to the saved profiles.
pub fn add_profile(profile: ServerProfile, secret: Option<String>, cx: &mut App) {
    cx.spawn(async move |cx| {
        match AppStore::singleton().await {
            Ok(store) => {
                match store.profiles().create(&profile, secret.as_deref()).await {
                    Ok(_) => {
                        reload_profiles(&store, cx).await;
                        tracing::info!("Profile saved: {}", profile.name);
                    }
                    Err(e) => {
                        tracing::error!("Failed to save profile: {}", e);
                    }
                }
            }
            Err(e) => {
                tracing::error!("Failed to get app store: {}", e);
            }
        }
    })
    .detach();
}

/// Update an existing server profile.
pub fn update_profile(profile: ServerProfile, secret: Option<String>, cx: &mut App) {
    cx.spawn(async move |cx| {
        match AppStore::singleton().await {
            Ok(store) => {
                match store.profiles().update(&profile, secret.as_deref()).await {
                    Ok(_) => {
                        reload_profiles(&store, cx).await;
                        tracing::info!("Profile updated: {}", profile.name);
                    }
                    Err(e) => {
                        tracing::error!("Failed to update profile: {}", e);
                    }
                }
            }
            Err(e) => {
                tracing::error!("Failed to get app store: {}", e);
            }
        }
    })
    .detach();
}

/// Delete a server profile.
pub fn delete_profile(profile: ServerProfile, cx: &mut App) {
    cx.spawn(async move |cx| {
        match AppStore::singleton().await {
            Ok(store) => match store.profiles().delete(&profile.id).await {
                Ok(_) => {
                    reload_profiles(&store, cx).await;
                    tracing::info!("Profile deleted: {}", profile.name);
                }
                Err(e) => {
                    tracing::error!("Failed to delete profile: {}", e);
                }
            },
            Err(e) => {
                tracing::error!("Failed to get app store: {}", e);
            }
        }
    })
    .detach();
}

async fn reload_profiles(store: &AppStore, cx: &mut AsyncApp) {
    if let Ok(profiles) = store.profiles().load_all().await {
        let _ = cx.update_global::<SessionState, _>(|state, _cx| {
            state.saved_profiles = profiles;
        });
    }
}

/// Test a profile's endpoint and credentials without connecting.
pub async fn test_profile(profile: ServerProfile, secret: Option<String>) -> Result<(), String> {
    let secret = match secret {
        Some(secret) if !secret.is_empty() => Some(secret),
        _ => ProfilesRepository::get_profile_secret(&profile.id).ok(),
    };
    let client = ConsoleClient::new(&profile.endpoint, profile.access_key.clone(), secret)
        .map_err(|e| e.to_string())?;
    client.validate().await.map_err(|e| e.to_string())
}
