use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Table};
use tracing::info;

use crate::{
    application::init_database_connection,
    config::ApplicationConfig,
    database,
    domain::dato::{Dato, DatoService, PostgresDatoService},
};

/// Creates the `datos` schema, seeds it when empty and prints the resulting rows.
pub(super) async fn run(config: &ApplicationConfig) -> anyhow::Result<()> {
    info!("connecting to {}:{}/{}", config.database.host, config.database.port, config.database.database_name);
    let connection = init_database_connection(config).await?;

    database::migrate(connection.as_ref()).await?;
    info!("datos table and indexes are ready.");

    database::seed_if_empty(connection.as_ref()).await?;

    let datos = PostgresDatoService.list_all(&connection).await?;
    println!("{}", render_table(&datos));

    info!("database initialized.");
    Ok(())
}

fn render_table(datos: &[Dato]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(vec!["ID", "Nombre", "Valor", "Created At", "Updated At"]);

    for dato in datos {
        table.add_row(vec![
            Cell::new(dato.id),
            Cell::new(&dato.nombre),
            Cell::new(dato.valor),
            Cell::new(dato.created_at.to_rfc3339()),
            Cell::new(dato.updated_at.to_rfc3339()),
        ]);
    }

    table
}

#[cfg(test)]
mod test {
    use chrono::Utc;

    use super::render_table;
    use crate::domain::dato::Dato;

    #[test]
    fn when_rendering_datos_then_every_row_is_in_the_table() {
        let now = Utc::now();
        let datos = vec![
            Dato { id: 1, nombre: "Ventas".to_owned(), valor: 200, created_at: now, updated_at: now },
            Dato { id: 2, nombre: "Clientes".to_owned(), valor: 150, created_at: now, updated_at: now },
        ];

        let rendered = render_table(&datos).to_string();

        assert!(rendered.contains("Ventas"));
        assert!(rendered.contains("Clientes"));
        assert!(rendered.contains("150"));
        assert_eq!(render_table(&datos).row_count(), 2);
    }
}
