use std::sync::Arc;

use escolaryx_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use escolaryx_models::contact::ContactSubmission;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use tracing::error;

use crate::{
    errors::{error, SUBMISSION_FAILED_DETAIL},
    models::contact::{ApiAcknowledgment, ApiContactSubmission},
};

pub const ACKNOWLEDGMENT: &str = "Formulario recibido. Se ha enviado un correo de verificación.";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    payload: Result<Json<ApiContactSubmission>, JsonRejection>,
) -> Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return error(rejection.status(), rejection.body_text()),
    };

    let submission = match ContactSubmission::try_from(payload) {
        Ok(submission) => submission,
        Err(violations) => return error(StatusCode::UNPROCESSABLE_ENTITY, violations),
    };

    match service.submit(submission).await {
        Ok(()) => Json(ApiAcknowledgment {
            message: ACKNOWLEDGMENT,
        })
        .into_response(),
        Err(ContactSubmitError::Schedule(err)) => {
            error!("Failed to schedule confirmation email: {err:#}");
            error(StatusCode::INTERNAL_SERVER_ERROR, SUBMISSION_FAILED_DETAIL)
        }
    }
}
