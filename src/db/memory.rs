use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::UserStore;
use crate::types::{
    error::AppError,
    user::{NewUser, User},
};

/// Process-local store used when no database is configured.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|u| (u.username.clone(), u))
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<(), AppError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(AppError::AlreadyExists);
        }
        users.insert(
            user.username.clone(),
            User {
                username: user.username,
                password: user.password,
            },
        );
        Ok(())
    }
}
