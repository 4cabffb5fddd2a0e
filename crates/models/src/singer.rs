use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Upper bound on `FirstName` / `LastName`, in characters.
pub const MAX_NAME_LEN: usize = 1024;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Singers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "SingerId")]
    pub singer_id: i64,
    #[sea_orm(column_name = "FirstName")]
    pub first_name: String,
    #[sea_orm(column_name = "LastName")]
    pub last_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} must not be blank")));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(ModelError::Validation(format!("{field} must be at most {MAX_NAME_LEN} characters")));
    }
    Ok(())
}

/// Parse a `singer_id` taken from a query string.
pub fn parse_singer_id(raw: Option<&str>) -> Result<i64, ModelError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ModelError::Validation("singer_id is required".into()))?;
    raw.parse::<i64>()
        .map_err(|_| ModelError::Validation(format!("singer_id must be an integer, got {raw:?}")))
}

/// Build a validated row for insertion.
pub fn new_singer(singer_id: i64, first_name: &str, last_name: &str) -> Result<Model, ModelError> {
    validate_name("first_name", first_name)?;
    validate_name("last_name", last_name)?;
    Ok(Model {
        singer_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    })
}
