use actix_web::{post, web};
use tracing::error;

use crate::service::authentication::{AuthenticationSvc, Outcome};
use crate::types::error::AppError;
use crate::types::user::Credentials;

#[post("/authenticate")]
async fn authenticate(
    svc: web::Data<AuthenticationSvc>,
    body: web::Bytes,
) -> Result<Outcome, AppError> {
    let credentials: Credentials = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    svc.authenticate(&credentials).await.map_err(|e| {
        error!(username = %credentials.username, error = %e, "authentication aborted");
        e
    })
}
