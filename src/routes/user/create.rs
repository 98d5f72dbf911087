use actix_web::{post, web};

use crate::routes::user::decode_body_lenient;
use crate::service::authentication::AuthenticationSvc;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{NewUser, UserCreateRes};

#[post("")]
async fn create(
    svc: web::Data<AuthenticationSvc>,
    body: web::Bytes,
) -> ApiResult<UserCreateRes> {
    let user: NewUser = decode_body_lenient(&body);

    svc.register(user).await?;

    Ok(ApiResponse::Created(UserCreateRes {
        message: "User created".to_string(),
    }))
}
