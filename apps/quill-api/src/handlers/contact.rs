//! Public contact form handler.

use actix_web::{HttpResponse, web};

use quill_core::domain::ContactMessage;
use quill_shared::dto::ContactRequest;
use quill_shared::{ApiResponse, FirstViolation};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/contact
pub async fn submit(
    state: web::Data<AppState>,
    body: web::Json<ContactRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate_first()?;

    let message = ContactMessage::new(req.name, req.email, req.subject, req.message);
    let saved = state.contacts.insert(message).await?;

    tracing::info!(message_id = %saved.id, "Contact message received");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        (),
        "Thanks for reaching out. We'll get back to you soon.",
    )))
}
