use std::sync::Arc;

use models::singer;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::singer::domain::{CreateSingerInput, SingerNames, UpdateFirstNameInput};
use crate::singer::repository::SingerRepository;

/// Application service for the singers catalog.
/// Validates request input, then delegates one statement to the repository.
#[derive(Clone)]
pub struct SingerService {
    repo: Arc<dyn SingerRepository>,
}

fn require<T>(field: &str, value: Option<T>) -> Result<T, ServiceError> {
    value.ok_or_else(|| ServiceError::Validation(format!("{field} is required")))
}

impl SingerService {
    pub fn new(repo: Arc<dyn SingerRepository>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(singer_id = ?input.singer_id))]
    pub async fn create(&self, input: CreateSingerInput) -> Result<(), ServiceError> {
        let singer_id = require("singer_id", input.singer_id)?;
        let first_name = require("first_name", input.first_name)?;
        let last_name = require("last_name", input.last_name)?;
        let row = singer::new_singer(singer_id, &first_name, &last_name)?;

        self.repo.insert(row).await.map_err(|e| match e {
            ServiceError::Conflict(_) => {
                ServiceError::Conflict(format!("singer {singer_id} already exists"))
            }
            other => other,
        })?;
        info!(event = "singer_created", singer_id, "record inserted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, singer_id: Option<&str>) -> Result<SingerNames, ServiceError> {
        let singer_id = singer::parse_singer_id(singer_id)?;
        match self.repo.find(singer_id).await? {
            Some(row) => Ok(row.into()),
            None => Err(ServiceError::singer_not_found(singer_id)),
        }
    }

    #[instrument(skip(self, input))]
    pub async fn update_first_name(
        &self,
        singer_id: Option<&str>,
        input: UpdateFirstNameInput,
    ) -> Result<(), ServiceError> {
        let singer_id = singer::parse_singer_id(singer_id)?;
        let first_name = require("first_name", input.first_name)?;
        singer::validate_name("first_name", &first_name)?;

        let rows = self.repo.update_first_name(singer_id, &first_name).await?;
        if rows == 0 {
            return Err(ServiceError::singer_not_found(singer_id));
        }
        info!(event = "singer_updated", singer_id, rows_affected = rows, "record updated");
        Ok(())
    }

    /// Deleting an absent singer is not an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, singer_id: Option<&str>) -> Result<(), ServiceError> {
        let singer_id = singer::parse_singer_id(singer_id)?;
        let rows = self.repo.delete(singer_id).await?;
        info!(event = "singer_deleted", singer_id, rows_affected = rows, "record deleted");
        Ok(())
    }
}
