use chrono::{DateTime, Utc};

mod dato_service;

#[cfg(test)]
pub(crate) use dato_service::MockDatoService;
pub(crate) use dato_service::{DatoService, PostgresDatoService};

const NOMBRE_MAX_LENGTH: usize = 255;

/// One row of the `datos` table.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Dato {
    pub id: i32,
    pub nombre: String,
    pub valor: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::database::dato::Model> for Dato {
    fn from(value: crate::database::dato::Model) -> Self {
        Self {
            id: value.id,
            nombre: value.nombre,
            valor: value.valor,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

pub(crate) fn validate_nombre(nombre: &str) -> Result<()> {
    if nombre.trim().is_empty() || nombre.chars().count() > NOMBRE_MAX_LENGTH {
        return Err(Error::InvalidNombre);
    }

    Ok(())
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum Error {
    #[error("nombre must be non-empty and at most 255 characters")]
    InvalidNombre,

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl From<sea_orm::DbErr> for Error {
    fn from(value: sea_orm::DbErr) -> Self {
        Self::Anyhow(value.into())
    }
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
