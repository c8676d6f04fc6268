//! Database models and repositories

pub mod models;
pub mod user_repository;

pub use models::{LocatableUser, NewUser, ProfileUpdate, User};
pub use user_repository::UserRepository;
