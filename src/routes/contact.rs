use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, info, warn};
use validator::Validate;

use crate::mail::ContactSubmission;
use crate::routes::AppState;

/// Wire shape shared by every relay outcome.
#[derive(Debug, Serialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/contact - relay one submission as one email.
///
/// 200 on delivery, 400 on a rejected payload, 500 when the transport
/// fails at any step. Exactly one delivery attempt per request; the
/// response is not written until the relay has accepted or rejected the
/// message.
pub async fn action(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Response {
    if let Err(errors) = submission.validate() {
        warn!(%errors, "rejected contact submission");
        return (
            StatusCode::BAD_REQUEST,
            Json(RelayResponse {
                success: false,
                message: "Invalid submission",
                error: Some(errors.to_string()),
            }),
        )
            .into_response();
    }

    info!(
        name = %submission.name,
        email = %submission.email,
        "received contact form submission"
    );

    match state.mailer.send_submission(&submission) {
        Ok(()) => (
            StatusCode::OK,
            Json(RelayResponse {
                success: true,
                message: "Email sent successfully!",
                error: None,
            }),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "failed to relay contact submission");

            let detail = state
                .config
                .contact
                .expose_errors
                .then(|| err.to_string());

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RelayResponse {
                    success: false,
                    message: "Failed to send email",
                    error: detail,
                }),
            )
                .into_response()
        }
    }
}
