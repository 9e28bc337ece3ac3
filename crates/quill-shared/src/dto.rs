//! Data Transfer Objects - request/response types for the API.
//!
//! Request types carry their validation schema as `validator` rules and
//! report the first violated rule via [`FirstViolation`].

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::validation::FirstViolation;

/// URL-safe slug charset: lowercase alphanumerics and hyphens.
pub static SLUG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[validate(
        length(min = 1, message = "Slug is required"),
        regex(
            path = *SLUG_PATTERN,
            message = "Slug may only contain lowercase letters, digits and hyphens"
        )
    )]
    pub slug: String,

    /// Posts are drafts unless explicitly published.
    #[serde(default)]
    pub published: bool,

    #[validate(length(max = 300, message = "Excerpt must be at most 300 characters"))]
    pub excerpt: Option<String>,

    pub category: Option<String>,

    pub tags: Option<Vec<String>>,
}

impl FirstViolation for CreatePostRequest {
    const FIELD_ORDER: &'static [&'static str] = &["title", "content", "slug", "excerpt"];
}

/// Partial update of a post. Absent fields keep their stored values.
/// The update path accepts longer titles than create (legacy contract).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: Option<String>,

    #[validate(
        length(min = 1, message = "Slug is required"),
        regex(
            path = *SLUG_PATTERN,
            message = "Slug may only contain lowercase letters, digits and hyphens"
        )
    )]
    pub slug: Option<String>,

    pub published: Option<bool>,

    #[validate(length(max = 300, message = "Excerpt must be at most 300 characters"))]
    pub excerpt: Option<String>,

    pub category: Option<String>,

    pub tags: Option<Vec<String>>,
}

impl FirstViolation for UpdatePostRequest {
    const FIELD_ORDER: &'static [&'static str] = &["title", "content", "slug", "excerpt"];
}

/// Request to render a sanitized preview of post content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    pub content: String,
}

/// Sanitized preview markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub html: String,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author metadata composed into the post detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorInfo {
    pub id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Detail view: the post plus its author's public metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorInfo>,
}

/// One page of posts plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub pagination: crate::response::PageMeta,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// Request to login. The login path only checks presence and minimum
/// length; complexity rules apply at signup.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl FirstViolation for LoginRequest {
    const FIELD_ORDER: &'static [&'static str] = &["email", "password"];
}

/// Request to sign up a new account.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(custom(function = password_complexity))]
    pub password: String,

    #[validate(must_match(other = password, message = "Passwords do not match"))]
    pub confirm_password: String,

    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub display_name: String,

    #[validate(custom(function = terms_accepted))]
    pub agree_to_terms: bool,
}

impl FirstViolation for SignupRequest {
    const FIELD_ORDER: &'static [&'static str] = &[
        "email",
        "password",
        "confirm_password",
        "display_name",
        "agree_to_terms",
    ];
}

/// Signup password rules: at least 8 characters with upper, lower, digit
/// and special character. First failing rule wins.
fn password_complexity(password: &str) -> Result<(), ValidationError> {
    let fail = |msg: &'static str| ValidationError::new("password").with_message(msg.into());

    if password.len() < 8 {
        return Err(fail("Password must be at least 8 characters"));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(fail("Password must contain an uppercase letter"));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(fail("Password must contain a lowercase letter"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(fail("Password must contain a digit"));
    }
    if password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(fail("Password must contain a special character"));
    }
    Ok(())
}

fn terms_accepted(agree: &bool) -> Result<(), ValidationError> {
    if *agree {
        Ok(())
    } else {
        Err(ValidationError::new("terms").with_message("You must agree to the terms of use".into()))
    }
}

/// Public profile of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Successful authentication: a bearer token plus the user it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

/// Public contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl FirstViolation for ContactRequest {
    const FIELD_ORDER: &'static [&'static str] = &["name", "email", "subject", "message"];
}

// ---------------------------------------------------------------------------
// Uploads
// ---------------------------------------------------------------------------

/// Result of an image upload: the public URL and a ready-to-append
/// markdown reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
    pub markdown: String,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Dashboard headline numbers. Placeholder fixtures until view tracking
/// exists; see the dashboard handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_posts: u64,
    pub total_views: u64,
    pub total_users: u64,
    pub posts_growth: f64,
    pub views_growth: f64,
    pub last_updated: DateTime<Utc>,
}

/// One day of mock traffic for the dashboard chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub views: u64,
    pub visitors: u64,
    pub engagement: f64,
}
