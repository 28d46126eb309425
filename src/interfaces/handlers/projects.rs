use actix_web::{web, HttpResponse, Responder};

use crate::{
    entities::project::{NewProject, ProjectFilters, UpdateProject},
    errors::AppError,
    AppState,
};

pub async fn list_projects(
    state: web::Data<AppState>,
    filters: web::Query<ProjectFilters>,
) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_projects(&filters).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "count": projects.len(),
        "data": projects
    })))
}

pub async fn get_project(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.get_project(&id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": project
    })))
}

pub async fn create_project(
    state: web::Data<AppState>,
    payload: web::Json<NewProject>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.create_project(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "message": "Project created successfully",
        "data": project
    })))
}

pub async fn update_project(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<UpdateProject>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .update_project(&id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Project updated successfully",
        "data": project
    })))
}

pub async fn delete_project(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state.project_handler.delete_project(&id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Project deleted successfully"
    })))
}
