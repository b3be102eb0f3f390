//! Saved server profile types.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// A saved console endpoint.
///
/// The secret key is never part of this record; it lives in the system
/// keyring under the profile id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerProfile {
    /// Unique identifier for this profile.
    pub id: Uuid,
    /// User-friendly name for the server.
    pub name: String,
    /// Console endpoint URL, e.g. "http://localhost:9090".
    pub endpoint: String,
    /// Access key used for authentication.
    pub access_key: String,
}

impl ServerProfile {
    /// Create a new profile with a fresh id.
    pub fn new(name: String, endpoint: String, access_key: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            endpoint,
            access_key,
        }
    }

    /// Create a profile with a specific id (for loading from storage).
    pub fn with_id(id: Uuid, name: String, endpoint: String, access_key: String) -> Self {
        Self {
            id,
            name,
            endpoint,
            access_key,
        }
    }

    /// Validate the profile fields.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Profile name is required".to_string());
        }
        match Url::parse(&self.endpoint) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => {
                return Err(format!(
                    "Endpoint must be an http(s) URL, got scheme '{}'",
                    url.scheme()
                ))
            }
            Err(_) => return Err(format!("Invalid endpoint URL: {}", self.endpoint)),
        }
        if self.access_key.is_empty() {
            return Err("Access key is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_validation() {
        let profile = ServerProfile::new(
            "local".to_string(),
            "http://localhost:9090".to_string(),
            "admin".to_string(),
        );
        assert!(profile.validate().is_ok());

        let bad_scheme = ServerProfile::new(
            "local".to_string(),
            "ftp://localhost".to_string(),
            "admin".to_string(),
        );
        assert!(bad_scheme.validate().is_err());

        let no_key = ServerProfile::new(
            "local".to_string(),
            "https://play.example.com".to_string(),
            String::new(),
        );
        assert!(no_key.validate().is_err());
    }
}
