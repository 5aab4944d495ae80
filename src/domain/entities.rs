pub mod post;
pub mod project;
pub mod resource;

use serde::{Deserialize, Serialize};

/// Body returned by every create endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(message: &str, id: i64) -> Self {
        CreatedResponse { message: message.to_string(), id }
    }
}
