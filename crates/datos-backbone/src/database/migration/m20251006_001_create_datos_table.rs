use async_trait::async_trait;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveIden)]
pub enum Datos {
    Table,
    Id,
    Nombre,
    Valor,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Datos::Table)
                    .if_not_exists()
                    .col(pk_auto(Datos::Id))
                    .col(string_len(Datos::Nombre, 255))
                    .col(integer(Datos::Valor))
                    .col(timestamp_with_time_zone(Datos::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Datos::UpdatedAt).default(Expr::current_timestamp()))
                    .take(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Datos::Table)
                    .if_not_exists()
                    .name("idx_datos_nombre")
                    .col(Datos::Nombre)
                    .take(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Datos::Table)
                    .if_not_exists()
                    .name("idx_datos_created_at")
                    .col(Datos::CreatedAt)
                    .take(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Datos::Table).if_exists().take()).await
    }
}
