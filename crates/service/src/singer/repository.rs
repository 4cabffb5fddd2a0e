use async_trait::async_trait;
use models::singer::{self, Entity as SingerEntity};
use sea_orm::sea_query::Expr;
use sea_orm::{
    AccessMode, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    IsolationLevel, QueryFilter, TransactionTrait,
};
use tracing::{debug, instrument};

use crate::errors::ServiceError;

/// Persistence seam for singers. Every method runs exactly one statement in
/// its own transaction.
#[async_trait]
pub trait SingerRepository: Send + Sync {
    /// Insert a new row; an existing key yields `ServiceError::Conflict`.
    async fn insert(&self, row: singer::Model) -> Result<(), ServiceError>;
    /// Look up a row inside a read-only snapshot.
    async fn find(&self, singer_id: i64) -> Result<Option<singer::Model>, ServiceError>;
    /// Returns the number of rows updated.
    async fn update_first_name(&self, singer_id: i64, first_name: &str)
        -> Result<u64, ServiceError>;
    /// Returns the number of rows deleted.
    async fn delete(&self, singer_id: i64) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmSingerRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmSingerRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl SingerRepository for SeaOrmSingerRepository {
    #[instrument(skip(self, row), fields(singer_id = row.singer_id))]
    async fn insert(&self, row: singer::Model) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        let inserted = insert_singer(&txn, row).await?;
        txn.commit().await?;
        debug!(rows_affected = inserted, "singer inserted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, singer_id: i64) -> Result<Option<singer::Model>, ServiceError> {
        let snapshot = self
            .db
            .begin_with_config(Some(IsolationLevel::RepeatableRead), Some(AccessMode::ReadOnly))
            .await?;
        let found = find_singer(&snapshot, singer_id).await?;
        snapshot.commit().await?;
        Ok(found)
    }

    #[instrument(skip(self, first_name))]
    async fn update_first_name(
        &self,
        singer_id: i64,
        first_name: &str,
    ) -> Result<u64, ServiceError> {
        let txn = self.db.begin().await?;
        let updated = update_first_name(&txn, singer_id, first_name).await?;
        txn.commit().await?;
        debug!(rows_affected = updated, "singer first name updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, singer_id: i64) -> Result<u64, ServiceError> {
        let txn = self.db.begin().await?;
        let deleted = delete_singer(&txn, singer_id).await?;
        txn.commit().await?;
        debug!(rows_affected = deleted, "singer deleted");
        Ok(deleted)
    }
}

// Statement helpers. They take the open transaction and every bound value as
// arguments; an early return drops the transaction, which rolls it back.

async fn insert_singer<C: ConnectionTrait>(
    conn: &C,
    row: singer::Model,
) -> Result<u64, ServiceError> {
    let rows = SingerEntity::insert(row.into_active_model())
        .exec_without_returning(conn)
        .await?;
    Ok(rows)
}

async fn find_singer<C: ConnectionTrait>(
    conn: &C,
    singer_id: i64,
) -> Result<Option<singer::Model>, ServiceError> {
    let found = SingerEntity::find_by_id(singer_id).one(conn).await?;
    Ok(found)
}

async fn update_first_name<C: ConnectionTrait>(
    conn: &C,
    singer_id: i64,
    first_name: &str,
) -> Result<u64, ServiceError> {
    let res = SingerEntity::update_many()
        .col_expr(singer::Column::FirstName, Expr::value(first_name.to_string()))
        .filter(singer::Column::SingerId.eq(singer_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

async fn delete_singer<C: ConnectionTrait>(conn: &C, singer_id: i64) -> Result<u64, ServiceError> {
    let res = SingerEntity::delete_by_id(singer_id).exec(conn).await?;
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, unique_singer_id};

    #[tokio::test]
    async fn seaorm_repository_round_trip() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmSingerRepository::new(db);
        let id = unique_singer_id();

        repo.insert(singer::new_singer(id, "Cat", "Meow")?).await?;
        let found = repo.find(id).await?.expect("inserted row");
        assert_eq!((found.first_name.as_str(), found.last_name.as_str()), ("Cat", "Meow"));

        assert_eq!(repo.update_first_name(id, "Bow").await?, 1);
        let found = repo.find(id).await?.expect("updated row");
        assert_eq!(found.first_name, "Bow");
        assert_eq!(found.last_name, "Meow");

        assert_eq!(repo.delete(id).await?, 1);
        assert!(repo.find(id).await?.is_none());
        assert_eq!(repo.delete(id).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_insert_is_conflict() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmSingerRepository::new(db);
        let id = unique_singer_id();

        repo.insert(singer::new_singer(id, "Cat", "Meow")?).await?;
        let err = repo.insert(singer::new_singer(id, "Dog", "Woof")?).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");

        // the original row is untouched
        let found = repo.find(id).await?.expect("original row");
        assert_eq!(found.first_name, "Cat");

        repo.delete(id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn bound_values_are_stored_literally() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmSingerRepository::new(db);
        let id = unique_singer_id();
        let hostile = "x'); DELETE FROM \"Singers\"; --";

        repo.insert(singer::new_singer(id, hostile, "O'Brien")?).await?;
        let found = repo.find(id).await?.expect("row");
        assert_eq!(found.first_name, hostile);
        assert_eq!(found.last_name, "O'Brien");

        repo.delete(id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_row_affects_nothing() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmSingerRepository::new(db);
        assert_eq!(repo.update_first_name(unique_singer_id(), "Nobody").await?, 0);
        Ok(())
    }
}
