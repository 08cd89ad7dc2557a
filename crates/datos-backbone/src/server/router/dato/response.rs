use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::{
    application::dato::{self, data::DatoData},
    server::response::{error_payload, handle_internal_server_error},
};

#[derive(Serialize, Debug)]
pub(super) struct DatoResponse {
    pub id: i32,
    pub nombre: String,
    pub valor: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DatoData> for DatoResponse {
    fn from(value: DatoData) -> Self {
        Self {
            id: value.id,
            nombre: value.nombre,
            valor: value.valor,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Serialize, Debug)]
pub(super) struct MutatedDatoResponse {
    #[serde(flatten)]
    pub dato: DatoResponse,
    pub message: &'static str,
}

pub(super) struct DatoNotExistsErrorResponse;

impl IntoResponse for DatoNotExistsErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::NOT_FOUND, error_payload("DATO_NOT_EXISTS", "Dato no encontrado")).into_response()
    }
}

pub(super) struct InvalidRequestErrorResponse;

impl IntoResponse for InvalidRequestErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, error_payload("INVALID_REQUEST", "Solicitud inválida")).into_response()
    }
}

/// Failure of one dato endpoint. `message` is the operation-specific text used for 500s.
pub(super) enum DatoErrorResponse {
    Application { error: dato::Error, message: &'static str },
    InvalidRequest(String),
}

impl DatoErrorResponse {
    pub(super) fn failed_to(message: &'static str) -> impl FnOnce(dato::Error) -> Self {
        move |error| Self::Application { error, message }
    }
}

impl From<PathRejection> for DatoErrorResponse {
    fn from(value: PathRejection) -> Self {
        Self::InvalidRequest(value.body_text())
    }
}

impl From<JsonRejection> for DatoErrorResponse {
    fn from(value: JsonRejection) -> Self {
        Self::InvalidRequest(value.body_text())
    }
}

impl IntoResponse for DatoErrorResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Application { error: dato::Error::Anyhow(e), message } => {
                handle_internal_server_error(&e, message)
            }
            Self::Application { error: dato::Error::DatoNotExists, .. } => DatoNotExistsErrorResponse.into_response(),
            Self::Application { error: dato::Error::InvalidNombre, .. } => {
                debug!("rejected dato with invalid nombre.");
                InvalidRequestErrorResponse.into_response()
            }
            Self::InvalidRequest(reason) => {
                debug!(reason = %reason, "rejected malformed dato request.");
                InvalidRequestErrorResponse.into_response()
            }
        }
    }
}
