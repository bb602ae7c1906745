use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `equipo` table, as the REST routes read and write it.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Equipo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_equipo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localidad: Option<String>,
}
