use actix_web::web;

use crate::handlers::{home::home, json_error::configure_json_errors, system::health_check};

mod config;
mod contact;
mod projects;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .configure(projects::config_routes)
            .configure(config::config_routes)
            .configure(contact::config_routes)
    );

    cfg.configure(configure_json_errors);
}
