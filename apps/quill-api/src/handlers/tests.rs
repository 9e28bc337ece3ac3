//! Handler integration tests against in-memory doubles.
//!
//! Every test builds a fresh `AppState` whose repositories are plain
//! `Mutex<Vec<_>>` stores, so tests exercise the full HTTP path
//! (routing, extraction, validation, status mapping) without a database.

use std::sync::{Arc, Mutex};

use actix_web::{App, http::StatusCode, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};
use uuid::Uuid;

use quill_core::domain::{ContactMessage, Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{
    ContactRepository, PasswordService, PostPage, PostQuery, PostRepository, PostSort,
    PostStatusFilter, TokenService, UserRepository,
};
use quill_infra::{
    Argon2PasswordService, InMemoryCache, JwtConfig, JwtTokenService, LocalFileStore,
};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Repository doubles
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MemoryPosts(Mutex<Vec<Post>>);

#[async_trait]
impl PostRepository for MemoryPosts {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.0.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn list(&self, query: &PostQuery) -> Result<PostPage, RepoError> {
        let posts = self.0.lock().unwrap();
        let mut matches: Vec<Post> = posts
            .iter()
            .filter(|p| {
                let status_ok = match query.status {
                    PostStatusFilter::All => true,
                    PostStatusFilter::Published => p.published,
                    PostStatusFilter::Draft => !p.published,
                };
                let search_ok = query.search.as_deref().is_none_or(|q| {
                    let q = q.to_lowercase();
                    p.title.to_lowercase().contains(&q) || p.content.to_lowercase().contains(&q)
                });
                let category_ok = query
                    .category
                    .as_deref()
                    .is_none_or(|c| p.category.as_deref() == Some(c));
                let author_ok = query.author_id.is_none_or(|id| p.author_id == id);
                status_ok && search_ok && category_ok && author_ok
            })
            .cloned()
            .collect();

        match query.sort {
            PostSort::Latest => matches.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            PostSort::Oldest => matches.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            PostSort::Title => matches.sort_by(|a, b| a.title.cmp(&b.title)),
        }

        let total = matches.len() as u64;
        let page = matches
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit as usize)
            .collect();
        Ok(PostPage { posts: page, total })
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.0.lock().unwrap();
        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(RepoError::UniqueViolation("posts_slug_key".to_string()));
        }
        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.0.lock().unwrap();
        if posts.iter().any(|p| p.id != post.id && p.slug == post.slug) {
            return Err(RepoError::UniqueViolation("posts_slug_key".to_string()));
        }
        let stored = posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(RepoError::NotFound)?;
        *stored = post.clone();
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.0.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[derive(Default)]
struct MemoryUsers(Mutex<Vec<User>>);

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.0.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.0.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepoError::UniqueViolation("users_email_key".to_string()));
        }
        users.push(user.clone());
        Ok(user)
    }
}

#[derive(Default)]
struct MemoryContacts(Mutex<Vec<ContactMessage>>);

#[async_trait]
impl ContactRepository for MemoryContacts {
    async fn insert(&self, message: ContactMessage) -> Result<ContactMessage, RepoError> {
        self.0.lock().unwrap().push(message.clone());
        Ok(message)
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

struct Harness {
    state: AppState,
    posts: Arc<MemoryPosts>,
    users: Arc<MemoryUsers>,
    contacts: Arc<MemoryContacts>,
}

fn harness() -> Harness {
    let posts = Arc::new(MemoryPosts::default());
    let users = Arc::new(MemoryUsers::default());
    let contacts = Arc::new(MemoryContacts::default());

    let upload_dir = std::env::temp_dir().join(format!("quill-api-test-{}", Uuid::new_v4()));

    let state = AppState {
        posts: posts.clone(),
        users: users.clone(),
        contacts: contacts.clone(),
        cache: Arc::new(InMemoryCache::new()),
        tokens: Arc::new(JwtTokenService::new(JwtConfig {
            secret: "handler-test-secret".to_string(),
            expiration_hours: 1,
            issuer: "quill-test".to_string(),
        })),
        passwords: Arc::new(Argon2PasswordService::new()),
        files: Arc::new(LocalFileStore::new(upload_dir, "http://localhost/uploads")),
    };

    Harness {
        state,
        posts,
        users,
        contacts,
    }
}

macro_rules! init_app {
    ($state:expr) => {{
        let tokens: web::Data<Arc<dyn TokenService>> = web::Data::new($state.tokens.clone());
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .app_data(tokens)
                .configure(super::configure_routes),
        )
        .await
    }};
}

impl Harness {
    /// Insert a user directly into the store and return them with a token.
    async fn seed_user(&self, email: &str) -> (User, String) {
        let hash = self.state.passwords.hash("Abcdef1!").unwrap();
        let user = User::new(email.to_string(), hash, "Test Author".to_string());
        let user = self.users.insert(user).await.unwrap();
        let token = self
            .state
            .tokens
            .generate_token(user.id, &user.email, user.role)
            .unwrap();
        (user, format!("Bearer {token}"))
    }

    async fn seed_post(&self, author_id: Uuid, title: &str, slug: &str, published: bool) -> Post {
        let mut post = Post::new(
            author_id,
            title.to_string(),
            "Some content".to_string(),
            slug.to_string(),
        );
        post.published = published;
        self.posts.insert(post).await.unwrap()
    }

    async fn seed_post_in_category(&self, author_id: Uuid, slug: &str, category: &str) -> Post {
        let mut post = Post::new(
            author_id,
            slug.to_string(),
            "Some content".to_string(),
            slug.to_string(),
        );
        post.published = true;
        post.category = Some(category.to_string());
        self.posts.insert(post).await.unwrap()
    }
}

fn create_body(title: &str, slug: &str) -> Value {
    json!({ "title": title, "content": "Hello world", "slug": slug })
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn create_post_requires_auth() {
    let h = harness();
    let app = init_app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(create_body("Hello", "hello"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(h.posts.0.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn create_then_fetch_round_trip() {
    let h = harness();
    let (user, auth) = h.seed_user("author@example.com").await;
    let app = init_app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", auth))
        .set_json(create_body("Hello", "hello"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["author_id"], user.id.to_string());
    assert_eq!(created["published"], false);

    let id = created["id"].as_str().unwrap();
    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let detail: Value = test::read_body_json(resp).await;
    assert_eq!(detail["title"], "Hello");
    assert_eq!(detail["author"]["display_name"], "Test Author");
}

#[actix_web::test]
async fn fetch_by_slug_returns_detail() {
    let h = harness();
    let (user, _) = h.seed_user("author@example.com").await;
    h.seed_post(user.id, "Hello", "hello-world", true).await;
    let app = init_app!(h.state);

    let req = test::TestRequest::get()
        .uri("/api/posts/slug/hello-world")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let detail: Value = test::read_body_json(resp).await;
    assert_eq!(detail["slug"], "hello-world");

    let req = test::TestRequest::get()
        .uri("/api/posts/slug/no-such-post")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn empty_title_is_rejected_without_side_effects() {
    let h = harness();
    let (_, auth) = h.seed_user("author@example.com").await;
    let app = init_app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", auth))
        .set_json(create_body("", "hello"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["field"], "title");
    assert!(h.posts.0.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn invalid_slug_is_rejected() {
    let h = harness();
    let (_, auth) = h.seed_user("author@example.com").await;
    let app = init_app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", auth))
        .set_json(create_body("Hello", "Hello World!"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["field"], "slug");
}

#[actix_web::test]
async fn duplicate_slug_conflicts_and_keeps_first_post() {
    let h = harness();
    let (user, auth) = h.seed_user("author@example.com").await;
    h.seed_post(user.id, "First", "taken", true).await;
    let app = init_app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", auth))
        .set_json(create_body("Second", "taken"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let posts = h.posts.0.lock().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "First");
}

#[actix_web::test]
async fn non_owner_cannot_update_or_delete() {
    let h = harness();
    let (owner, _) = h.seed_user("owner@example.com").await;
    let (_, intruder_auth) = h.seed_user("intruder@example.com").await;
    let post = h.seed_post(owner.id, "Mine", "mine", true).await;
    let app = init_app!(h.state);

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", post.id))
        .insert_header(("Authorization", intruder_auth.clone()))
        .set_json(json!({ "title": "Stolen" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{}", post.id))
        .insert_header(("Authorization", intruder_auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let posts = h.posts.0.lock().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Mine");
}

#[actix_web::test]
async fn owner_update_bumps_updated_at() {
    let h = harness();
    let (owner, auth) = h.seed_user("owner@example.com").await;
    let post = h.seed_post(owner.id, "Draft", "draft-post", false).await;
    let app = init_app!(h.state);

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", post.id))
        .insert_header(("Authorization", auth))
        .set_json(json!({ "title": "Final", "published": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["title"], "Final");
    assert_eq!(updated["published"], true);
    // Content was absent from the request, so it is unchanged.
    assert_eq!(updated["content"], "Some content");

    let stored = &h.posts.0.lock().unwrap()[0];
    assert!(stored.updated_at > post.updated_at);
}

#[actix_web::test]
async fn update_of_missing_post_is_not_found() {
    let h = harness();
    let (_, auth) = h.seed_user("owner@example.com").await;
    let app = init_app!(h.state);

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", Uuid::new_v4()))
        .insert_header(("Authorization", auth))
        .set_json(json!({ "title": "Ghost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn pagination_splits_twenty_five_records_into_three_pages() {
    let h = harness();
    let (user, _) = h.seed_user("author@example.com").await;
    for i in 0..25 {
        h.seed_post(user.id, &format!("Post {i}"), &format!("post-{i}"), true)
            .await;
    }
    let app = init_app!(h.state);

    let req = test::TestRequest::get()
        .uri("/api/posts?page=2&limit=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 10);
    assert_eq!(body["pagination"]["page"], 2);
    assert_eq!(body["pagination"]["total"], 25);
    assert_eq!(body["pagination"]["total_pages"], 3);
}

#[actix_web::test]
async fn draft_filter_returns_only_drafts() {
    let h = harness();
    let (user, _) = h.seed_user("author@example.com").await;
    h.seed_post(user.id, "Live", "live", true).await;
    h.seed_post(user.id, "WIP", "wip", false).await;
    let app = init_app!(h.state);

    let req = test::TestRequest::get()
        .uri("/api/posts?status=draft")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;

    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["slug"], "wip");
}

#[actix_web::test]
async fn category_filter_returns_only_matching_posts() {
    let h = harness();
    let (user, _) = h.seed_user("author@example.com").await;
    h.seed_post_in_category(user.id, "rust-tips", "engineering").await;
    h.seed_post_in_category(user.id, "team-news", "company").await;
    h.seed_post(user.id, "Uncategorized", "uncategorized", true)
        .await;
    let app = init_app!(h.state);

    let req = test::TestRequest::get()
        .uri("/api/posts?category=engineering")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["slug"], "rust-tips");
    assert_eq!(body["pagination"]["total"], 1);
}

#[actix_web::test]
async fn unknown_sort_is_a_bad_request() {
    let h = harness();
    let app = init_app!(h.state);

    let req = test::TestRequest::get()
        .uri("/api/posts?sort=popularity")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn preview_sanitizes_scripts() {
    let h = harness();
    let (_, auth) = h.seed_user("author@example.com").await;
    let app = init_app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/posts/preview")
        .insert_header(("Authorization", auth))
        .set_json(json!({ "content": "<p>ok</p><script>alert(1)</script>" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let html = body["html"].as_str().unwrap();
    assert!(html.contains("<p>ok</p>"));
    assert!(!html.contains("script"));
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

fn signup_body(email: &str, password: &str) -> Value {
    json!({
        "email": email,
        "password": password,
        "confirm_password": password,
        "display_name": "New Author",
        "agree_to_terms": true,
    })
}

#[actix_web::test]
async fn signup_issues_a_usable_token() {
    let h = harness();
    let app = init_app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("new@example.com", "Abcdef1!"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["role"], "author");
    let token = body["access_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let me: Value = test::read_body_json(resp).await;
    assert_eq!(me["email"], "new@example.com");
}

#[actix_web::test]
async fn signup_rejects_weak_password() {
    let h = harness();
    let app = init_app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("new@example.com", "alllowercase1!"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["field"], "password");
    assert!(h.users.0.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn signup_rejects_duplicate_email() {
    let h = harness();
    h.seed_user("taken@example.com").await;
    let app = init_app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("taken@example.com", "Abcdef1!"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(h.users.0.lock().unwrap().len(), 1);
}

#[actix_web::test]
async fn login_rejects_wrong_password() {
    let h = harness();
    h.seed_user("author@example.com").await;
    let app = init_app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "author@example.com", "password": "WrongPass1!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Same status for an unknown address.
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "nobody@example.com", "password": "WrongPass1!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn login_with_correct_password_succeeds() {
    let h = harness();
    h.seed_user("author@example.com").await;
    let app = init_app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "author@example.com", "password": "Abcdef1!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "Bearer");
    assert!(body["expires_in"].as_u64().unwrap() > 0);
}

#[actix_web::test]
async fn me_requires_a_token() {
    let h = harness();
    let app = init_app!(h.state);

    let req = test::TestRequest::get().uri("/api/auth/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn logout_acknowledges() {
    let h = harness();
    let app = init_app!(h.state);

    let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn contact_submission_is_stored_as_new() {
    let h = harness();
    let app = init_app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Reader",
            "email": "reader@example.com",
            "subject": "Hi",
            "message": "Loved the last post.",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = h.contacts.0.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].subject, "Hi");
}

#[actix_web::test]
async fn contact_missing_subject_is_rejected() {
    let h = harness();
    let app = init_app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Reader",
            "email": "reader@example.com",
            "subject": "",
            "message": "Hello",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["field"], "subject");
    assert!(h.contacts.0.lock().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn dashboard_requires_auth_and_serves_fixtures() {
    let h = harness();
    let (_, auth) = h.seed_user("author@example.com").await;
    let app = init_app!(h.state);

    let req = test::TestRequest::get()
        .uri("/api/dashboard/stats")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/dashboard/stats")
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_posts"], 150);
    assert_eq!(body["total_views"], 25000);

    let req = test::TestRequest::get()
        .uri("/api/dashboard/chart?range=30d")
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let chart: Value = test::read_body_json(resp).await;
    assert_eq!(chart.as_array().unwrap().len(), 30);
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn health_reports_ok() {
    let h = harness();
    let app = init_app!(h.state);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}
