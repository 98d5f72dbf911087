use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;

use crate::types::error::AppError;

/// Successful bodies; failures travel as `AppError`.
pub enum ApiResponse<T> {
    EmptyOk,
    Created(T),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
            ApiResponse::Created(v) => HttpResponse::Created().json(v),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
