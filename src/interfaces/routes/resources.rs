use actix_web::web;

use crate::handlers::resources;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/resources")
            .route(web::get().to(resources::list_resources))
            .route(web::post().to(resources::create_resource))
    );
}
