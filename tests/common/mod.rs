#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use user_auth::{
    db::UserStore,
    types::{
        error::AppError,
        user::{NewUser, User},
    },
};

pub mod client;

type GetByUsernameFn = dyn Fn(&str) -> Result<Option<User>, AppError> + Send + Sync;
type CreateUserFn = dyn Fn(NewUser) -> Result<(), AppError> + Send + Sync;

/// Store double whose behaviour is set per test. Unset hooks report an
/// absent user and accept every write.
#[derive(Default)]
pub struct UsersStoreMock {
    pub get_by_username_func: Option<Box<GetByUsernameFn>>,
    pub create_user_func: Option<Box<CreateUserFn>>,
}

impl UsersStoreMock {
    pub fn on_get_by_username<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<Option<User>, AppError> + Send + Sync + 'static,
    {
        self.get_by_username_func = Some(Box::new(f));
        self
    }

    pub fn on_create_user<F>(mut self, f: F) -> Self
    where
        F: Fn(NewUser) -> Result<(), AppError> + Send + Sync + 'static,
    {
        self.create_user_func = Some(Box::new(f));
        self
    }

    pub fn returning_user(username: &str, password: &str) -> Self {
        let user = User {
            username: username.to_string(),
            password: password.to_string(),
        };
        Self::default().on_get_by_username(move |_| Ok(Some(user.clone())))
    }

    pub fn failing() -> Self {
        Self::default()
            .on_get_by_username(|_| Err(AppError::Store("store offline".into())))
            .on_create_user(|_| Err(AppError::Store("store offline".into())))
    }

    pub fn into_store(self) -> Arc<dyn UserStore> {
        Arc::new(self)
    }
}

#[async_trait]
impl UserStore for UsersStoreMock {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        match &self.get_by_username_func {
            Some(f) => f(username),
            None => Ok(None),
        }
    }

    async fn create_user(&self, user: NewUser) -> Result<(), AppError> {
        match &self.create_user_func {
            Some(f) => f(user),
            None => Ok(()),
        }
    }
}
