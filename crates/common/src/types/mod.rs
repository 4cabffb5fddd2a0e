use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Acknowledgement returned by every write endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Success {
    #[serde(rename = "Success")]
    pub success: bool,
}

impl Success {
    pub fn ok() -> Self { Self { success: true } }
}
