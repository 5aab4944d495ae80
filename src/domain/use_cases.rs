pub mod extractors;
pub mod posts;
pub mod projects;
pub mod resources;
