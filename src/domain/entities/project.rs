use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub source_code: Option<String>,
    pub image_url: Option<String>,
    pub youtube_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct StackEntry {
    pub project_id: i64,
    pub technology: String,
}

/// A project as served by `GET /projects`, with its stack merged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub source_code: Option<String>,
    pub image_url: Option<String>,
    pub youtube_url: Option<String>,
    pub stack: Vec<String>,
}

impl Project {
    fn from_row(row: ProjectRow, stack: Vec<String>) -> Self {
        Project {
            id: row.id,
            title: row.title,
            short_description: row.short_description,
            description: row.description,
            link: row.link,
            source_code: row.source_code,
            image_url: row.image_url,
            youtube_url: row.youtube_url,
            stack,
        }
    }
}

/// Groups `entries` by project and attaches them to `rows`.
///
/// Project order follows `rows`; each stack keeps the order of `entries`.
/// Entries pointing at a project not present in `rows` are dropped.
pub fn merge_stacks(rows: Vec<ProjectRow>, entries: Vec<StackEntry>) -> Vec<Project> {
    let mut grouped: HashMap<i64, Vec<String>> = HashMap::new();
    for entry in entries {
        grouped.entry(entry.project_id).or_default().push(entry.technology);
    }

    rows.into_iter()
        .map(|row| {
            let stack = grouped.remove(&row.id).unwrap_or_default();
            Project::from_row(row, stack)
        })
        .collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProjectRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub source_code: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
}
