use std::sync::Arc;

use axum::{
    debug_handler,
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    application::{
        dato::{
            command::{CreatingDatoCommand, UpdatingDatoCommand},
            DatoUseCase,
        },
        Application,
    },
    server::response::message_payload,
};

use self::{
    request::DatoRequest,
    response::{DatoErrorResponse, DatoResponse, MutatedDatoResponse},
};

mod request;
mod response;

pub(crate) fn router(application: Arc<Application>) -> axum::Router {
    Router::new()
        .route("/api/datos", get(handle_get_datos).post(handle_post_dato))
        .route("/api/datos/", get(handle_get_datos).post(handle_post_dato))
        .route("/api/datos/:id", get(handle_get_dato).put(handle_put_dato).delete(handle_delete_dato))
        .with_state(application)
}

#[debug_handler]
async fn handle_get_datos(
    State(application): State<Arc<Application>>,
) -> Result<impl IntoResponse, DatoErrorResponse> {
    let datos = application.dato().get_all().await.map_err(DatoErrorResponse::failed_to("Error al obtener datos"))?;

    let payload: Vec<DatoResponse> = datos.into_iter().map(DatoResponse::from).collect();

    Ok((StatusCode::OK, Json(payload)))
}

#[debug_handler]
async fn handle_get_dato(
    path: Result<Path<i32>, PathRejection>,
    State(application): State<Arc<Application>>,
) -> Result<impl IntoResponse, DatoErrorResponse> {
    let Path(id) = path?;

    let dato =
        application.dato().get_by_id(id).await.map_err(DatoErrorResponse::failed_to("Error al obtener el dato"))?;

    Ok((StatusCode::OK, Json(DatoResponse::from(dato))))
}

#[debug_handler]
async fn handle_post_dato(
    State(application): State<Arc<Application>>,
    payload: Result<Json<DatoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, DatoErrorResponse> {
    let Json(payload) = payload?;

    let dato =
        application.dato().create(payload.into()).await.map_err(DatoErrorResponse::failed_to("Error al crear el dato"))?;

    Ok((StatusCode::CREATED, Json(MutatedDatoResponse { dato: dato.into(), message: "Dato creado exitosamente" })))
}

impl From<DatoRequest> for CreatingDatoCommand {
    fn from(value: DatoRequest) -> Self {
        Self { nombre: value.nombre, valor: value.valor }
    }
}

#[debug_handler]
async fn handle_put_dato(
    path: Result<Path<i32>, PathRejection>,
    State(application): State<Arc<Application>>,
    payload: Result<Json<DatoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, DatoErrorResponse> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let dato = application
        .dato()
        .update(id, payload.into())
        .await
        .map_err(DatoErrorResponse::failed_to("Error al actualizar el dato"))?;

    Ok((StatusCode::OK, Json(MutatedDatoResponse { dato: dato.into(), message: "Dato actualizado exitosamente" })))
}

impl From<DatoRequest> for UpdatingDatoCommand {
    fn from(value: DatoRequest) -> Self {
        Self { nombre: value.nombre, valor: value.valor }
    }
}

#[debug_handler]
async fn handle_delete_dato(
    path: Result<Path<i32>, PathRejection>,
    State(application): State<Arc<Application>>,
) -> Result<impl IntoResponse, DatoErrorResponse> {
    let Path(id) = path?;

    application.dato().delete(id).await.map_err(DatoErrorResponse::failed_to("Error al eliminar el dato"))?;

    Ok((StatusCode::OK, message_payload("Dato eliminado exitosamente")))
}
