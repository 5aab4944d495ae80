use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

const CONTENT_REQUIRED: &str = "'content' field is required";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub content: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewPostRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[validate(
        required(message = "'content' field is required"),
        length(min = 1, message = "'content' field is required")
    )]
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

/// A validated post ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct PostInsert {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub content: String,
    pub description: Option<String>,
}

impl TryFrom<NewPostRequest> for PostInsert {
    type Error = validator::ValidationErrors;

    fn try_from(request: NewPostRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        let content = match request.content {
            Some(content) => content,
            None => {
                let mut errors = validator::ValidationErrors::new();
                let mut error = validator::ValidationError::new("required");
                error.message = Some(CONTENT_REQUIRED.into());
                errors.add("content", error);
                return Err(errors);
            }
        };

        Ok(PostInsert {
            title: request.title,
            date: request.date,
            content,
            description: request.description,
        })
    }
}
