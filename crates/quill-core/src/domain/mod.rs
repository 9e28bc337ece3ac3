//! Domain entities - the core business objects.

mod comment;
mod contact;
mod post;
mod user;

pub use comment::{Comment, CommentStatus};
pub use contact::{ContactMessage, ContactStatus};
pub use post::Post;
pub use user::{Role, User};
