//! Application data store.
//!
//! Owns the SQLite database that holds saved server profiles. The store is
//! a process-wide singleton; repositories hand out cheap clones of the pool.

use std::path::Path;

use anyhow::{Context, Result};
use async_lock::OnceCell;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};

use super::profiles::ProfilesRepository;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS profiles (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    endpoint TEXT NOT NULL,
    access_key TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Handle to the application database.
#[derive(Debug, Clone)]
pub struct AppStore {
    pool: SqlitePool,
}

impl AppStore {
    /// Get the shared store, opening the database on first use.
    pub async fn singleton() -> Result<AppStore> {
        static STORE: OnceCell<AppStore> = OnceCell::new();
        STORE
            .get_or_try_init(|| AppStore::open_default())
            .await
            .map(|store| store.clone())
    }

    async fn open_default() -> Result<AppStore> {
        let data_dir = dirs::data_dir()
            .context("Could not determine the platform data directory")?
            .join("bgui");
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
        Self::open_at(&data_dir.join("bgui.db")).await
    }

    /// Open a store backed by the database file at `path`.
    pub(crate) async fn open_at(path: &Path) -> Result<AppStore> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .with_context(|| format!("Failed to open database {}", path.display()))?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Repository for saved server profiles.
    pub fn profiles(&self) -> ProfilesRepository {
        ProfilesRepository::new(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::ServerProfile;

    #[test]
    fn test_profile_crud_round_trip() {
        smol::block_on(async {
            let dir = tempfile::tempdir().unwrap();
            let store = AppStore::open_at(&dir.path().join("test.db")).await.unwrap();
            let repo = store.profiles();

            let mut profile = ServerProfile::new(
                "local".to_string(),
                "http://localhost:9090".to_string(),
                "admin".to_string(),
            );
            repo.create(&profile, None).await.unwrap();
            assert!(repo.exists_by_name("local").await.unwrap());

            // Duplicate names are rejected
            let duplicate = ServerProfile::new(
                "local".to_string(),
                "http://other:9090".to_string(),
                "admin".to_string(),
            );
            assert!(repo.create(&duplicate, None).await.is_err());

            let loaded = repo.load_all().await.unwrap();
            assert_eq!(loaded.len(), 1);
            assert_eq!(loaded[0].endpoint, "http://localhost:9090");

            profile.endpoint = "http://localhost:9000".to_string();
            repo.update(&profile, None).await.unwrap();
            let loaded = repo.load_all().await.unwrap();
            assert_eq!(loaded[0].endpoint, "http://localhost:9000");

            repo.delete(&profile.id).await.unwrap();
            assert!(repo.load_all().await.unwrap().is_empty());
        });
    }
}
