use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Responder};
use tracing::{debug, info, warn};

use crate::db::UserStore;
use crate::types::{
    error::AppError,
    user::{Credentials, NewUser, UserToken},
};
use crate::utils::token::{RandomTokenIssuer, TokenIssuer};

/// Result of a single authentication attempt.
///
/// A store failure is not an outcome; it is returned as `Err(AppError)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NotFound,
    Unauthorized,
    Authenticated(UserToken),
}

impl Responder for Outcome {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse {
        match self {
            Outcome::NotFound => HttpResponse::NotFound().finish(),
            Outcome::Unauthorized => HttpResponse::Unauthorized().finish(),
            Outcome::Authenticated(token) => HttpResponse::Created().json(token),
        }
    }
}

/// Stateless credential checker. Holds only its collaborators.
#[derive(Clone)]
pub struct AuthenticationSvc {
    store: Arc<dyn UserStore>,
    tokens: Arc<dyn TokenIssuer>,
}

impl AuthenticationSvc {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self::with_issuer(store, Arc::new(RandomTokenIssuer))
    }

    pub fn with_issuer(store: Arc<dyn UserStore>, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self { store, tokens }
    }

    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Outcome, AppError> {
        let user = match self.store.get_by_username(&credentials.username).await? {
            Some(user) => user,
            None => {
                info!(username = %credentials.username, "authentication failed: unknown user");
                return Ok(Outcome::NotFound);
            }
        };

        // plaintext, verbatim comparison
        if user.password != credentials.password {
            warn!(username = %credentials.username, "authentication failed: password mismatch");
            return Ok(Outcome::Unauthorized);
        }

        let token = self.tokens.issue();
        if token.is_empty() {
            return Err(AppError::Internal("token issuer returned an empty token".into()));
        }

        info!(username = %credentials.username, "user authenticated");
        Ok(Outcome::Authenticated(UserToken { token }))
    }

    /// Persists a new user. A request carrying no username has nothing to
    /// key a record on and is acknowledged without a store write.
    pub async fn register(&self, user: NewUser) -> Result<(), AppError> {
        if user.username.is_empty() {
            debug!("create request without a username, nothing stored");
            return Ok(());
        }
        let username = user.username.clone();
        self.store.create_user(user).await?;
        info!(username = %username, "user created");
        Ok(())
    }
}
