//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, extension::postgres::PgExpr};
use sea_orm::{
    ColumnTrait, Condition, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, SqlErr,
};
use uuid::Uuid;

use quill_core::domain::{ContactMessage, Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{
    ContactRepository, PostPage, PostQuery, PostRepository, PostSort, PostStatusFilter,
    UserRepository,
};

use super::entity::contact::ActiveModel as ContactActiveModel;
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use sea_orm::ActiveModelTrait;

/// Translate SeaORM failures into the repository error taxonomy.
/// Unique violations get their own variant so handlers can answer 409.
fn map_db_err(e: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(msg)) = e.sql_err() {
        return RepoError::UniqueViolation(msg);
    }
    match e {
        DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(err) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub(super) fn filtered(query: &PostQuery) -> sea_orm::Select<PostEntity> {
        let mut select = PostEntity::find();

        // ILIKE, not LIKE: search is case-insensitive.
        if let Some(q) = query.search.as_deref().filter(|q| !q.is_empty()) {
            let pattern = format!("%{q}%");
            select = select.filter(
                Condition::any()
                    .add(Expr::col(post::Column::Title).ilike(pattern.as_str()))
                    .add(Expr::col(post::Column::Content).ilike(pattern.as_str())),
            );
        }

        if let Some(category) = query.category.as_deref() {
            select = select.filter(post::Column::Category.eq(category));
        }

        match query.status {
            PostStatusFilter::All => {}
            PostStatusFilter::Published => {
                select = select.filter(post::Column::Published.eq(true));
            }
            PostStatusFilter::Draft => {
                select = select.filter(post::Column::Published.eq(false));
            }
        }

        if let Some(author_id) = query.author_id {
            select = select.filter(post::Column::AuthorId.eq(author_id));
        }

        select
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self, query: &PostQuery) -> Result<PostPage, RepoError> {
        let filtered = Self::filtered(query);

        let total = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        let ordered = match query.sort {
            PostSort::Latest => filtered.order_by_desc(post::Column::CreatedAt),
            PostSort::Oldest => filtered.order_by_asc(post::Column::CreatedAt),
            PostSort::Title => filtered.order_by_asc(post::Column::Title),
        };

        let rows = ordered
            .offset(query.offset())
            .limit(query.limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PostPage {
            posts: rows.into_iter().map(Into::into).collect(),
            total,
        })
    }

    async fn insert(&self, entity: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = entity.into();
        let model = active.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn update(&self, entity: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = entity.into();
        let model = active.update(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

/// PostgreSQL user repository.
pub struct PostgresUserRepository {
    db: DbConn,
}

impl PostgresUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask the local part when logging to keep PII out of logs.
        let masked = match email.find('@') {
            Some(at) => format!("{}***{}", &email[..1.min(at)], &email[at..]),
            None => "***".to_string(),
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, entity: User) -> Result<User, RepoError> {
        let active: user::ActiveModel = entity.into();
        let model = active.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }
}

/// PostgreSQL contact message repository.
pub struct PostgresContactRepository {
    db: DbConn,
}

impl PostgresContactRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn insert(&self, message: ContactMessage) -> Result<ContactMessage, RepoError> {
        let active: ContactActiveModel = message.into();
        let model = active.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }
}
