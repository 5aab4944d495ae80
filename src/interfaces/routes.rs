use actix_web::web;

use crate::handlers::home::home;

mod json_error;
mod posts;
mod projects;
mod resources;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.configure(projects::config_routes)
        .configure(resources::config_routes)
        .configure(posts::config_routes);

    cfg.configure(json_error::config_routes);
}
