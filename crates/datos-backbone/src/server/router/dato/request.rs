use serde::{de::Error as _, Deserialize, Deserializer};

#[derive(Deserialize, Debug)]
pub(super) struct DatoRequest {
    pub nombre: String,
    #[serde(deserialize_with = "deserialize_valor")]
    pub valor: i32,
}

/// Accepts `valor` as a JSON integer or as a string holding one.
fn deserialize_valor<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Valor {
        Integer(i64),
        Text(String),
    }

    match Valor::deserialize(deserializer)? {
        Valor::Integer(valor) => i32::try_from(valor).map_err(D::Error::custom),
        Valor::Text(valor) => valor.trim().parse::<i32>().map_err(D::Error::custom),
    }
}
