use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// Logs the cause and answers with a generic 500; the cause never reaches the client.
pub(crate) fn handle_internal_server_error(e: &anyhow::Error, message: &str) -> Response {
    error!(error = ?e, "unhandled error occurred.");
    (StatusCode::INTERNAL_SERVER_ERROR, error_payload("INTERNAL_SERVER_ERROR", message)).into_response()
}

#[derive(Serialize, Debug)]
pub(crate) struct ErrorPayload<'a> {
    code: &'a str,
    error: &'a str,
}

pub(crate) fn error_payload<'a>(code: &'a str, error: &'a str) -> Json<ErrorPayload<'a>> {
    Json(ErrorPayload { code, error })
}

#[derive(Serialize, Debug)]
pub(crate) struct MessagePayload<'a> {
    message: &'a str,
}

pub(crate) fn message_payload(message: &str) -> Json<MessagePayload<'_>> {
    Json(MessagePayload { message })
}
