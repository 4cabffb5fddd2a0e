use serde::{Deserialize, Serialize};

/// Body of `POST /add`. Fields are optional so that absence is reported as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateSingerInput {
    #[serde(default)]
    pub singer_id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Body of `PUT /update-first-name`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateFirstNameInput {
    #[serde(default)]
    pub first_name: Option<String>,
}

/// Query string carrying `singer_id`; parsed by the service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SingerIdQuery {
    #[serde(default)]
    pub singer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingerNames {
    pub first_name: String,
    pub last_name: String,
}

impl From<models::singer::Model> for SingerNames {
    fn from(m: models::singer::Model) -> Self {
        Self { first_name: m.first_name, last_name: m.last_name }
    }
}
