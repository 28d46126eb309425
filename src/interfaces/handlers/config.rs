use actix_web::{HttpResponse, Responder};

use crate::entities::site_config::SITE_CONFIG;

/// The config endpoints serve the in-memory document directly; there is no
/// I/O and no expected failure mode.
pub async fn get_config() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": &*SITE_CONFIG
    }))
}

pub async fn get_skills() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": &SITE_CONFIG.skills
    }))
}

pub async fn get_config_projects() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": &SITE_CONFIG.projects
    }))
}
