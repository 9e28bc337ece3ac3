//! SeaORM entities and their domain conversions.

pub mod contact;
pub mod post;
pub mod user;
