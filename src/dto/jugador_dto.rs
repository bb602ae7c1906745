use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `jugador` table. `canastas` is the score the
/// `canastas/{n}` route filters on.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, Default, PartialEq)]
pub struct Jugador {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canastas: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asistencias: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rebotes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posicion: Option<String>,
}
