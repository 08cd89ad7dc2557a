use async_trait::async_trait;
use chrono::Utc;
#[cfg(test)]
use mockall::automock;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait as _, ActiveValue, ColumnTrait as _, DatabaseConnection, EntityTrait,
    QueryFilter as _, QueryOrder as _,
};
use tracing::info;

use super::{validate_nombre, Dato, Result};

/// Data access for `datos`. Every operation is a single parameterized statement.
#[cfg_attr(test, automock)]
#[async_trait]
pub(crate) trait DatoService {
    async fn list_all(&self, connection: &DatabaseConnection) -> Result<Vec<Dato>>;
    async fn get_by_id(&self, connection: &DatabaseConnection, id: i32) -> Result<Option<Dato>>;
    async fn create(&self, connection: &DatabaseConnection, nombre: &str, valor: i32) -> Result<Dato>;
    /// Returns `None` when no row has the given id.
    async fn update(&self, connection: &DatabaseConnection, id: i32, nombre: &str, valor: i32)
        -> Result<Option<Dato>>;
    /// Returns `false` when no row has the given id.
    async fn delete(&self, connection: &DatabaseConnection, id: i32) -> Result<bool>;
}

pub(crate) struct PostgresDatoService;

#[async_trait]
impl DatoService for PostgresDatoService {
    async fn list_all(&self, connection: &DatabaseConnection) -> Result<Vec<Dato>> {
        use crate::database::dato::{Column, Entity};

        let models = Entity::find().order_by_asc(Column::Id).all(connection).await?;

        Ok(models.into_iter().map(Dato::from).collect())
    }

    async fn get_by_id(&self, connection: &DatabaseConnection, id: i32) -> Result<Option<Dato>> {
        use crate::database::dato::Entity;

        let model = Entity::find_by_id(id).one(connection).await?;

        Ok(model.map(Dato::from))
    }

    async fn create(&self, connection: &DatabaseConnection, nombre: &str, valor: i32) -> Result<Dato> {
        use crate::database::dato::ActiveModel;

        validate_nombre(nombre)?;

        let now = Utc::now();
        let model = ActiveModel {
            id: ActiveValue::NotSet,
            nombre: ActiveValue::Set(nombre.to_owned()),
            valor: ActiveValue::Set(valor),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(connection)
        .await?;

        info!("dato(id: {}) created.", model.id);

        Ok(model.into())
    }

    async fn update(
        &self,
        connection: &DatabaseConnection,
        id: i32,
        nombre: &str,
        valor: i32,
    ) -> Result<Option<Dato>> {
        use crate::database::dato::{Column, Entity};

        validate_nombre(nombre)?;

        let updated = Entity::update_many()
            .col_expr(Column::Nombre, Expr::value(nombre))
            .col_expr(Column::Valor, Expr::value(valor))
            .filter(Column::Id.eq(id))
            .exec_with_returning(connection)
            .await?;

        let Some(model) = updated.into_iter().next() else {
            return Ok(None);
        };

        info!("dato(id: {id}) updated.");

        Ok(Some(model.into()))
    }

    async fn delete(&self, connection: &DatabaseConnection, id: i32) -> Result<bool> {
        use crate::database::dato::Entity;

        let result = Entity::delete_by_id(id).exec(connection).await?;
        if result.rows_affected == 0 {
            return Ok(false);
        }

        info!("dato(id: {id}) deleted.");

        Ok(true)
    }
}
