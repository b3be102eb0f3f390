//! Server profile repository using SQLite and system keyring.

use anyhow::{Context, Result};
#[cfg(feature = "keyring")]
use keyring::Entry;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::types::ServerProfile;

#[cfg(feature = "keyring")]
const KEYRING_SERVICE: &str = "bgui";

/// Repository for server profile CRUD operations.
///
/// Secret keys are stored in the system keyring, while profile metadata
/// (name, endpoint, access key) is stored in SQLite.
#[derive(Debug, Clone)]
pub struct ProfilesRepository {
    pool: SqlitePool,
}

impl ProfilesRepository {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ========== Keyring Methods (feature-gated) ==========

    #[cfg(feature = "keyring")]
    fn get_keyring_entry(profile_id: &Uuid) -> Result<Entry> {
        Entry::new(KEYRING_SERVICE, &profile_id.to_string())
            .context("Failed to create keyring entry")
    }

    #[cfg(feature = "keyring")]
    fn store_secret(profile_id: &Uuid, secret: &str) -> Result<()> {
        let entry = Self::get_keyring_entry(profile_id)?;
        entry
            .set_password(secret)
            .context("Failed to store secret in keyring")
    }

    #[cfg(not(feature = "keyring"))]
    fn store_secret(_profile_id: &Uuid, _secret: &str) -> Result<()> {
        tracing::warn!("Keyring feature disabled - secret will not be stored securely");
        Ok(())
    }

    #[cfg(feature = "keyring")]
    fn get_secret(profile_id: &Uuid) -> Result<String> {
        let entry = Self::get_keyring_entry(profile_id)?;
        entry
            .get_password()
            .context("Failed to retrieve secret from keyring")
    }

    #[cfg(not(feature = "keyring"))]
    fn get_secret(_profile_id: &Uuid) -> Result<String> {
        tracing::warn!("Keyring feature disabled - cannot retrieve stored secret");
        Ok(String::new())
    }

    #[cfg(feature = "keyring")]
    fn delete_secret(profile_id: &Uuid) -> Result<()> {
        let entry = Self::get_keyring_entry(profile_id)?;
        let _ = entry.delete_credential();
        Ok(())
    }

    #[cfg(not(feature = "keyring"))]
    fn delete_secret(_profile_id: &Uuid) -> Result<()> {
        Ok(())
    }

    // ========== CRUD Methods ==========

    /// Load all saved profiles from the database
    pub async fn load_all(&self) -> Result<Vec<ServerProfile>> {
        let rows = sqlx::query_as::<_, (String, String, String, String)>(
            "SELECT id, name, endpoint, access_key
             FROM profiles
             ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut profiles = Vec::new();
        for (id_str, name, endpoint, access_key) in rows {
            let id = Uuid::parse_str(&id_str).context("Invalid UUID in database")?;
            profiles.push(ServerProfile::with_id(id, name, endpoint, access_key));
        }

        Ok(profiles)
    }

    /// Create a new profile
    pub async fn create(&self, profile: &ServerProfile, secret: Option<&str>) -> Result<()> {
        if self.exists_by_name(&profile.name).await? {
            anyhow::bail!("A profile with the name '{}' already exists", profile.name);
        }

        if let Some(secret) = secret {
            if !secret.is_empty() {
                Self::store_secret(&profile.id, secret)?;
            }
        }

        sqlx::query(
            r#"
            INSERT INTO profiles (id, name, endpoint, access_key, updated_at)
            VALUES (?1, ?2, ?3, ?4, CURRENT_TIMESTAMP)
            "#,
        )
        .bind(profile.id.to_string())
        .bind(&profile.name)
        .bind(&profile.endpoint)
        .bind(&profile.access_key)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Update an existing profile
    pub async fn update(&self, profile: &ServerProfile, secret: Option<&str>) -> Result<()> {
        let existing =
            sqlx::query_scalar::<_, String>("SELECT id FROM profiles WHERE name = ?1 AND id != ?2")
                .bind(&profile.name)
                .bind(profile.id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        if existing.is_some() {
            anyhow::bail!("A profile with the name '{}' already exists", profile.name);
        }

        if let Some(secret) = secret {
            if !secret.is_empty() {
                Self::store_secret(&profile.id, secret)?;
            }
        }

        sqlx::query(
            r#"
            UPDATE profiles
            SET name = ?2, endpoint = ?3, access_key = ?4, updated_at = CURRENT_TIMESTAMP
            WHERE id = ?1
            "#,
        )
        .bind(profile.id.to_string())
        .bind(&profile.name)
        .bind(&profile.endpoint)
        .bind(&profile.access_key)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a profile by ID
    pub async fn delete(&self, id: &Uuid) -> Result<()> {
        Self::delete_secret(id)?;
        sqlx::query("DELETE FROM profiles WHERE id = ?1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Get secret for a profile from keyring (on-demand)
    pub fn get_profile_secret(profile_id: &Uuid) -> Result<String> {
        Self::get_secret(profile_id)
    }

    /// Check if a profile with the given name exists
    pub async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles WHERE name = ?1")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }
}
