//! User persistence. Handlers only see the `UserStore` contract.

use async_trait::async_trait;

use crate::types::{
    error::AppError,
    user::{NewUser, User},
};

pub mod memory;
pub mod postgres_service;
pub mod user;

/// Username-keyed access to user records.
///
/// `get_by_username` distinguishes three results: `Ok(Some(_))` for a found
/// record, `Ok(None)` for an absent one and `Err(_)` when the lookup itself
/// failed. Implementations must hand back whole records, never a partially
/// written one, and lookups for different usernames must not interfere.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Fails with `AppError::AlreadyExists` when the username is taken.
    async fn create_user(&self, user: NewUser) -> Result<(), AppError>;
}
