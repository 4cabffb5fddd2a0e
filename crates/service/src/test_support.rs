//! Test doubles shared by this crate's tests and the server's integration tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use models::singer;
use tokio::sync::Mutex;

use crate::errors::ServiceError;
use crate::singer::repository::SingerRepository;

/// Map-backed repository with the same key semantics as the `Singers` table.
#[derive(Default)]
pub struct InMemorySingerRepository {
    rows: Mutex<BTreeMap<i64, singer::Model>>,
}

impl InMemorySingerRepository {
    pub async fn len(&self) -> usize { self.rows.lock().await.len() }
}

#[async_trait]
impl SingerRepository for InMemorySingerRepository {
    async fn insert(&self, row: singer::Model) -> Result<(), ServiceError> {
        let mut rows = self.rows.lock().await;
        if rows.contains_key(&row.singer_id) {
            return Err(ServiceError::Conflict(format!("duplicate key SingerId={}", row.singer_id)));
        }
        rows.insert(row.singer_id, row);
        Ok(())
    }

    async fn find(&self, singer_id: i64) -> Result<Option<singer::Model>, ServiceError> {
        Ok(self.rows.lock().await.get(&singer_id).cloned())
    }

    async fn update_first_name(
        &self,
        singer_id: i64,
        first_name: &str,
    ) -> Result<u64, ServiceError> {
        let mut rows = self.rows.lock().await;
        match rows.get_mut(&singer_id) {
            Some(row) => {
                row.first_name = first_name.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, singer_id: i64) -> Result<u64, ServiceError> {
        Ok(self.rows.lock().await.remove(&singer_id).map_or(0, |_| 1))
    }
}

/// Repository whose every call fails the way an unreachable database does.
pub struct UnavailableSingerRepository {
    pub detail: String,
}

#[async_trait]
impl SingerRepository for UnavailableSingerRepository {
    async fn insert(&self, _row: singer::Model) -> Result<(), ServiceError> {
        Err(ServiceError::Db(self.detail.clone()))
    }

    async fn find(&self, _singer_id: i64) -> Result<Option<singer::Model>, ServiceError> {
        Err(ServiceError::Db(self.detail.clone()))
    }

    async fn update_first_name(&self, _: i64, _: &str) -> Result<u64, ServiceError> {
        Err(ServiceError::Db(self.detail.clone()))
    }

    async fn delete(&self, _singer_id: i64) -> Result<u64, ServiceError> {
        Err(ServiceError::Db(self.detail.clone()))
    }
}

/// Process-unique id so concurrent database tests never collide.
pub fn unique_singer_id() -> i64 {
    static NEXT: AtomicI64 = AtomicI64::new(0);
    let base = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as i64)
        .unwrap_or(0);
    base.wrapping_mul(1000).wrapping_add(NEXT.fetch_add(1, Ordering::Relaxed)).abs()
}

#[cfg(test)]
mod live_db {
    use migration::MigratorTrait;
    use sea_orm::DatabaseConnection;
    use tokio::sync::OnceCell;

    // Ensure migrations run only once across the entire test process
    static MIGRATED: OnceCell<bool> = OnceCell::const_new();

    /// Connection to the test database, or `None` when tests should skip.
    pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
            return Ok(None);
        }
        let migrated = *MIGRATED
            .get_or_init(|| async {
                match models::db::connect().await {
                    Ok(db) => match migration::Migrator::up(&db, None).await {
                        Ok(()) => true,
                        Err(e) => {
                            eprintln!("skip: migrate up failed: {}", e);
                            false
                        }
                    },
                    Err(e) => {
                        eprintln!("skip: cannot connect to db: {}", e);
                        false
                    }
                }
            })
            .await;
        if !migrated {
            return Ok(None);
        }
        // Fresh connection for the current test's runtime
        Ok(Some(models::db::connect().await?))
    }
}

#[cfg(test)]
pub use live_db::get_db;
