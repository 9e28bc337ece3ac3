//! Image upload handler.
//!
//! Uploads land in the file store immediately and are not tied to any post
//! save that follows. A post save that never happens leaves an orphaned
//! file, which is acceptable for editor workflows.

use actix_multipart::form::{MultipartForm, bytes::Bytes};
use actix_web::{HttpResponse, web};

use quill_core::ports::StorageError;
use quill_shared::dto::UploadResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(MultipartForm)]
pub struct UploadForm {
    #[multipart(limit = "8MiB")]
    pub file: Bytes,
}

/// POST /api/uploads
pub async fn upload_image(
    state: web::Data<AppState>,
    identity: Identity,
    form: MultipartForm<UploadForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let content_type = form
        .file
        .content_type
        .as_ref()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_default();

    if !content_type.starts_with("image/") {
        return Err(StorageError::UnsupportedType(format!(
            "Only images can be uploaded, got {content_type:?}"
        ))
        .into());
    }

    let filename = form.file.file_name.as_deref().unwrap_or("image");
    let stored = state
        .files
        .store(filename, form.file.data.to_vec())
        .await?;

    tracing::info!(
        user_id = %identity.user_id,
        file = %stored.name,
        "Image uploaded"
    );

    Ok(HttpResponse::Ok().json(UploadResponse {
        markdown: format!("![{}]({})", stored.name, stored.url),
        url: stored.url,
    }))
}
