pub mod home;
pub mod posts;
pub mod projects;
pub mod resources;
