pub mod artist;
pub mod show;
pub mod venue;

use serde::{Deserialize, Serialize};

/// Body of the search endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub search_term: String,
}

/// Outcome of a create, update, or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MutationResponse {
    pub fn saved(id: i32, message: String) -> Self {
        Self {
            success: true,
            id: Some(id),
            message: Some(message),
        }
    }

    pub fn deleted() -> Self {
        Self {
            success: true,
            id: None,
            message: None,
        }
    }
}
