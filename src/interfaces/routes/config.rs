use actix_web::web;

use crate::handlers::config;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/config")
            .service(
                web::resource("")
                    .route(web::get().to(config::get_config))
            )
            .service(
                web::resource("/skills")
                    .route(web::get().to(config::get_skills))
            )
            .service(
                web::resource("/projects")
                    .route(web::get().to(config::get_config_projects))
            )
    );
}
