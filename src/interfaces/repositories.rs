pub mod post;
pub mod project;
pub mod resource;
pub mod sqlx_repo;
