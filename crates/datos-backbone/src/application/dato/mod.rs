use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::dato::{Dato, DatoService, Error as DatoServiceError};

use self::{
    command::{CreatingDatoCommand, UpdatingDatoCommand},
    data::DatoData,
};

pub mod command;
pub mod data;

#[async_trait]
pub(crate) trait DatoUseCase {
    async fn get_all(&self) -> Result<Vec<DatoData>>;
    async fn get_by_id(&self, id: i32) -> Result<DatoData>;
    async fn create(&self, cmd: CreatingDatoCommand) -> Result<DatoData>;
    async fn update(&self, id: i32, cmd: UpdatingDatoCommand) -> Result<DatoData>;
    async fn delete(&self, id: i32) -> Result<()>;
}

pub(crate) struct DatoUseCaseImpl {
    database_connection: Arc<DatabaseConnection>,
    dato_service: Arc<dyn DatoService + Sync + Send>,
}

impl DatoUseCaseImpl {
    pub fn new(database_connection: Arc<DatabaseConnection>, dato_service: Arc<dyn DatoService + Sync + Send>) -> Self {
        Self { database_connection, dato_service }
    }
}

#[async_trait]
impl DatoUseCase for DatoUseCaseImpl {
    async fn get_all(&self) -> Result<Vec<DatoData>> {
        let datos = self.dato_service.list_all(&self.database_connection).await?;

        Ok(datos.into_iter().map(DatoData::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<DatoData> {
        let dato = self.dato_service.get_by_id(&self.database_connection, id).await?.ok_or(Error::DatoNotExists)?;

        Ok(dato.into())
    }

    async fn create(&self, cmd: CreatingDatoCommand) -> Result<DatoData> {
        let dato = self.dato_service.create(&self.database_connection, &cmd.nombre, cmd.valor).await?;

        Ok(dato.into())
    }

    async fn update(&self, id: i32, cmd: UpdatingDatoCommand) -> Result<DatoData> {
        let dato = self
            .dato_service
            .update(&self.database_connection, id, &cmd.nombre, cmd.valor)
            .await?
            .ok_or(Error::DatoNotExists)?;

        Ok(dato.into())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        if !self.dato_service.delete(&self.database_connection, id).await? {
            return Err(Error::DatoNotExists);
        }

        Ok(())
    }
}

impl From<Dato> for DatoData {
    fn from(value: Dato) -> Self {
        Self {
            id: value.id,
            nombre: value.nombre,
            valor: value.valor,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("dato not exists")]
    DatoNotExists,
    #[error("invalid nombre")]
    InvalidNombre,
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl From<DatoServiceError> for Error {
    fn from(value: DatoServiceError) -> Self {
        match value {
            DatoServiceError::Anyhow(e) => e.into(),
            DatoServiceError::InvalidNombre => Self::InvalidNombre,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
