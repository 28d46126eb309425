use actix_web::{web, HttpResponse, Responder};

use crate::{entities::contact::NewContactMessage, errors::AppError, AppState};

pub async fn submit_contact(
    state: web::Data<AppState>,
    form: web::Json<NewContactMessage>,
) -> Result<impl Responder, AppError> {
    let stored = state
        .contact_handler
        .submit_contact_message(form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "message": "Message sent successfully!",
        "data": stored
    })))
}

pub async fn list_contacts(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let contacts = state.contact_handler.list_contact_messages().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "count": contacts.len(),
        "data": contacts
    })))
}
