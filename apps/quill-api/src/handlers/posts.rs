//! Post CRUD, listing and preview handlers.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use quill_core::domain::{Post, User};
use quill_core::ports::{PostQuery, PostSort, PostStatusFilter};
use quill_infra::sanitize::clean_preview;
use quill_shared::dto::{
    AuthorInfo, CreatePostRequest, PostDetailResponse, PostListResponse, PostResponse,
    PreviewRequest, PreviewResponse, UpdatePostRequest,
};
use quill_shared::{ApiResponse, FirstViolation, PageMeta};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::revalidate::{self, LIST_PREFIX, PAGE_TTL};
use crate::state::AppState;

const DEFAULT_LIMIT: u64 = 10;
const MAX_LIMIT: u64 = 100;

/// Raw listing query parameters as they arrive on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub q: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub status: Option<String>,
}

/// Translate wire parameters into a repository query. Unknown `sort` or
/// `status` values are rejected rather than silently defaulted.
fn to_query(params: &ListParams) -> Result<PostQuery, AppError> {
    let sort = match params.sort.as_deref() {
        None | Some("latest") => PostSort::Latest,
        Some("oldest") => PostSort::Oldest,
        Some("title") => PostSort::Title,
        Some(other) => {
            return Err(AppError::BadRequest(format!("Unknown sort: {other}")));
        }
    };

    let status = match params.status.as_deref() {
        None | Some("all") => PostStatusFilter::All,
        Some("published") => PostStatusFilter::Published,
        Some("draft") => PostStatusFilter::Draft,
        Some(other) => {
            return Err(AppError::BadRequest(format!("Unknown status: {other}")));
        }
    };

    let search = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(String::from);

    let category = params
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from);

    Ok(PostQuery {
        page: params.page.unwrap_or(1).max(1),
        limit: params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        search,
        category,
        sort,
        status,
        author_id: None,
    })
}

/// Cache key for one listing page. Every component of the query is part of
/// the key so distinct queries never collide.
fn list_cache_key(query: &PostQuery) -> String {
    format!(
        "{LIST_PREFIX}{}:{}:{}:{}:{:?}:{:?}",
        query.page,
        query.limit,
        query.search.as_deref().unwrap_or(""),
        query.category.as_deref().unwrap_or(""),
        query.sort,
        query.status,
    )
}

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        author_id: post.author_id.to_string(),
        title: post.title,
        content: post.content,
        slug: post.slug,
        published: post.published,
        excerpt: post.excerpt,
        category: post.category,
        tags: post.tags,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

fn author_info(user: User) -> AuthorInfo {
    AuthorInfo {
        id: user.id.to_string(),
        display_name: user.display_name,
        avatar_url: user.avatar_url,
    }
}

/// Serve a cached JSON payload untouched, or build one and cache it.
async fn cached_json(
    state: &AppState,
    key: &str,
    build: impl std::future::Future<Output = AppResult<String>>,
) -> AppResult<HttpResponse> {
    if let Some(cached) = state.cache.get(key).await {
        return Ok(HttpResponse::Ok()
            .content_type("application/json")
            .body(cached));
    }

    let body = build.await?;
    if let Err(e) = state.cache.set(key, &body, Some(PAGE_TTL)).await {
        tracing::warn!(key = %key, "Failed to cache response: {e}");
    }

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

/// GET /api/posts
pub async fn list(
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> AppResult<HttpResponse> {
    let query = to_query(&params)?;
    let key = list_cache_key(&query);

    cached_json(&state, &key, async {
        let page = state.posts.list(&query).await?;
        let response = PostListResponse {
            posts: page.posts.into_iter().map(post_response).collect(),
            pagination: PageMeta::new(query.page, query.limit, page.total),
        };
        serde_json::to_string(&response).map_err(|e| AppError::Internal(e.to_string()))
    })
    .await
}

async fn detail_body(state: &AppState, post: Post) -> AppResult<String> {
    let author = state
        .users
        .find_by_id(post.author_id)
        .await?
        .map(author_info);

    let response = PostDetailResponse {
        post: post_response(post),
        author,
    };
    serde_json::to_string(&response).map_err(|e| AppError::Internal(e.to_string()))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let key = revalidate::detail_key(id);

    cached_json(&state, &key, async {
        let post = state
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
        detail_body(&state, post).await
    })
    .await
}

/// GET /api/posts/slug/{slug}
pub async fn get_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let key = revalidate::slug_key(&slug);

    cached_json(&state, &key, async {
        let post = state
            .posts
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
        detail_body(&state, post).await
    })
    .await
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate_first()?;

    let mut post = Post::new(identity.user_id, req.title, req.content, req.slug);
    post.published = req.published;
    post.excerpt = req.excerpt;
    post.category = req.category;
    post.tags = req.tags;

    let saved = state.posts.insert(post).await.map_err(|e| {
        if matches!(e, quill_core::error::RepoError::UniqueViolation(_)) {
            AppError::Conflict("A post with this slug already exists".to_string())
        } else {
            e.into()
        }
    })?;

    tracing::info!(post_id = %saved.id, slug = %saved.slug, "Post created");
    revalidate::fire_listing_invalidation(&state.cache);

    Ok(HttpResponse::Created().json(post_response(saved)))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    req.validate_first()?;

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    if !post.is_owned_by(identity.user_id) {
        return Err(AppError::Forbidden);
    }

    // The old slug's cached page must go away if the slug changes.
    let old_slug = post.slug.clone();

    if let Some(title) = req.title {
        post.title = title;
    }
    if let Some(content) = req.content {
        post.content = content;
    }
    if let Some(slug) = req.slug {
        post.slug = slug;
    }
    if let Some(published) = req.published {
        post.published = published;
    }
    if req.excerpt.is_some() {
        post.excerpt = req.excerpt;
    }
    if req.category.is_some() {
        post.category = req.category;
    }
    if req.tags.is_some() {
        post.tags = req.tags;
    }
    post.updated_at = Utc::now();

    let saved = state.posts.update(post).await.map_err(|e| {
        if matches!(e, quill_core::error::RepoError::UniqueViolation(_)) {
            AppError::Conflict("A post with this slug already exists".to_string())
        } else {
            e.into()
        }
    })?;

    tracing::info!(post_id = %saved.id, "Post updated");
    revalidate::fire_post_invalidation(&state.cache, saved.id, &[&old_slug, &saved.slug]);

    Ok(HttpResponse::Ok().json(post_response(saved)))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    if !post.is_owned_by(identity.user_id) {
        return Err(AppError::Forbidden);
    }

    state.posts.delete(id).await?;

    tracing::info!(post_id = %id, "Post deleted");
    revalidate::fire_post_invalidation(&state.cache, id, &[&post.slug]);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "Post deleted")))
}

/// POST /api/posts/preview
///
/// Renders untrusted draft content through the allow-list sanitizer so the
/// editor can show it inline.
pub async fn preview(
    _identity: Identity,
    body: web::Json<PreviewRequest>,
) -> AppResult<HttpResponse> {
    let html = clean_preview(&body.content);
    Ok(HttpResponse::Ok().json(PreviewResponse { html }))
}
