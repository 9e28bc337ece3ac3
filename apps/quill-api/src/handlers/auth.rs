//! Authentication handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::User;
use quill_shared::dto::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
use quill_shared::{ApiResponse, FirstViolation};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn user_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        email: user.email.clone(),
        display_name: user.display_name.clone(),
        avatar_url: user.avatar_url.clone(),
        role: user.role.as_str().to_string(),
        created_at: user.created_at,
    }
}

fn auth_response(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let token = state
        .tokens
        .generate_token(user.id, &user.email, user.role)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.expiration_seconds() as u64,
        user: user_response(user),
    })
}

/// POST /api/auth/signup
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate_first()?;

    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let password_hash = state
        .passwords
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = User::new(req.email, password_hash, req.display_name);
    // A concurrent signup for the same address can still slip past the
    // pre-check; the unique index surfaces it as a conflict here.
    let saved = state.users.insert(user).await.map_err(|e| {
        if matches!(e, quill_core::error::RepoError::UniqueViolation(_)) {
            AppError::Conflict("Email already registered".to_string())
        } else {
            e.into()
        }
    })?;

    tracing::info!(user_id = %saved.id, "New user signed up");

    Ok(HttpResponse::Created().json(auth_response(&state, &saved)?))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate_first()?;

    // Unknown email and wrong password produce the same 401.
    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let valid = state
        .passwords
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized);
    }

    Ok(HttpResponse::Ok().json(auth_response(&state, &user)?))
}

/// POST /api/auth/logout
///
/// Tokens are stateless; there is nothing to revoke server-side. The
/// client discards its copy and this endpoint acknowledges.
pub async fn logout() -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "Logged out")))
}

/// GET /api/auth/me - Protected route
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    // A valid token for a deleted account is no longer a valid session.
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(HttpResponse::Ok().json(user_response(&user)))
}
