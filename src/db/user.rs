use async_trait::async_trait;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as UserEntity};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr};
use tracing::error;

use crate::db::{postgres_service::PostgresService, UserStore};
use crate::types::{
    error::AppError,
    user::{NewUser, User},
};
use crate::utils::token;

impl PostgresService {
    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(UserEntity::find()
            .filter(Column::Username.eq(username))
            .count(&self.db)
            .await?
            > 0)
    }
}

#[async_trait]
impl UserStore for PostgresService {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let found = UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!(username, error = %e, "user lookup failed");
                AppError::Db(e)
            })?;

        Ok(found.map(User::from))
    }

    async fn create_user(&self, payload: NewUser) -> Result<(), AppError> {
        if self.user_exists_by_username(&payload.username).await? {
            return Err(AppError::AlreadyExists);
        }
        let now = Utc::now();

        let inserted = UserEntity::insert(UserActive {
            id: Set(token::new_id()),
            username: Set(payload.username),
            password: Set(payload.password),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.db)
        .await;

        inserted.map(|_| ()).map_err(insert_error)
    }
}

/// A unique violation here means a concurrent signup won the race for the name.
fn insert_error(e: DbErr) -> AppError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::AlreadyExists,
        _ => {
            error!(error = %e, "user insert failed");
            AppError::Db(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_constraint_insert_errors_stay_db_errors() {
        for e in [DbErr::RecordNotInserted, DbErr::Custom("connection reset".into())] {
            assert!(matches!(insert_error(e), AppError::Db(_)));
        }
    }
}
