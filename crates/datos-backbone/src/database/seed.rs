use chrono::Utc;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};
use tracing::info;

use super::dato;

pub(crate) const SEED_DATOS: [(&str, i32); 5] =
    [("Ventas", 200), ("Clientes", 150), ("Productos", 75), ("Ingresos", 320), ("Pedidos", 185)];

/// Inserts the example rows in one statement, only when `datos` has no rows yet.
/// Returns the number of inserted rows.
pub async fn seed_if_empty<C>(connection: &C) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let count = dato::Entity::find().count(connection).await?;
    if count > 0 {
        info!("datos already has {count} rows, skipping seed.");
        return Ok(0);
    }

    let now = Utc::now();
    let inserted = dato::Entity::insert_many(SEED_DATOS.iter().map(|(nombre, valor)| dato::ActiveModel {
        id: ActiveValue::NotSet,
        nombre: ActiveValue::Set((*nombre).to_owned()),
        valor: ActiveValue::Set(*valor),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }))
    .exec_without_returning(connection)
    .await?;

    info!("{inserted} example datos inserted.");

    Ok(inserted)
}
