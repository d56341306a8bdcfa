use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const INTERNAL_SERVER_ERROR_DETAIL: &str = "Internal server error";
pub const SUBMISSION_FAILED_DETAIL: &str = "Error al procesar el formulario";

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_DETAIL)
}

pub fn error(code: StatusCode, detail: impl Serialize) -> Response {
    (code, Json(ApiError { detail })).into_response()
}

#[derive(Serialize)]
pub struct ApiError<D> {
    pub detail: D,
}
