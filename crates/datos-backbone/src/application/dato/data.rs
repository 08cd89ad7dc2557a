use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DatoData {
    pub id: i32,
    pub nombre: String,
    pub valor: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
