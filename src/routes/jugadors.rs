use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sqlx::SqlitePool;
use tracing::info;

use crate::dto::jugador_dto::Jugador;
use crate::error::ApiError;

/**
 * GET request to get all the players.
 */
pub async fn get_jugadors(
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<Vec<Jugador>>, ApiError> {
    info!("Fetching players.");

    let jugadors = sqlx::query_as::<_, Jugador>("SELECT * FROM jugador ORDER BY id")
        .fetch_all(&pool)
        .await?;

    Ok(Json(jugadors))
}

/**
 * GET request for the players with at least `canastas` baskets, best first.
 */
pub async fn get_jugadors_by_canastas(
    Extension(pool): Extension<SqlitePool>,
    Path(canastas): Path<i64>,
) -> Result<Json<Vec<Jugador>>, ApiError> {
    info!("Fetching players with at least {} canastas.", canastas);

    let jugadors = sqlx::query_as::<_, Jugador>(
        "SELECT * FROM jugador WHERE canastas >= ? ORDER BY canastas DESC, id",
    )
    .bind(canastas)
    .fetch_all(&pool)
    .await?;

    Ok(Json(jugadors))
}

/**
 * GET request to get one player by id.
 */
pub async fn get_jugador(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Jugador>, ApiError> {
    info!("Fetching player {}", id);

    let jugador = sqlx::query_as::<_, Jugador>("SELECT * FROM jugador WHERE id = ?")
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(jugador))
}

/**
 * POST request to create a new player.
 */
pub async fn create_jugador(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<Jugador>,
) -> Result<Response, ApiError> {
    if payload.id.is_some() {
        return Err(ApiError::BadRequest(
            "A new jugador cannot already have an ID".to_string(),
        ));
    }

    insert_jugador(&pool, &payload).await
}

/**
 * PUT request to update a player. A player without id is created instead.
 */
pub async fn update_jugador(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<Jugador>,
) -> Result<Response, ApiError> {
    let Some(id) = payload.id else {
        return insert_jugador(&pool, &payload).await;
    };

    info!("Updating player {}", id);

    let jugador = sqlx::query_as::<_, Jugador>(
        r#"
        UPDATE jugador
        SET nombre = ?, canastas = ?, asistencias = ?, rebotes = ?, posicion = ?
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&payload.nombre)
    .bind(payload.canastas)
    .bind(payload.asistencias)
    .bind(payload.rebotes)
    .bind(&payload.posicion)
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or(ApiError::NotFound)?;

    Ok((StatusCode::OK, Json(jugador)).into_response())
}

/**
 * DELETE request to delete a player by id.
 */
pub async fn delete_jugador(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    info!("Deleting player {}", id);

    let result = sqlx::query("DELETE FROM jugador WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::OK)
}

async fn insert_jugador(pool: &SqlitePool, payload: &Jugador) -> Result<Response, ApiError> {
    info!("Creating player {:?}", payload.nombre);

    let jugador = sqlx::query_as::<_, Jugador>(
        r#"
        INSERT INTO jugador (nombre, canastas, asistencias, rebotes, posicion)
        VALUES (?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&payload.nombre)
    .bind(payload.canastas)
    .bind(payload.asistencias)
    .bind(payload.rebotes)
    .bind(&payload.posicion)
    .fetch_one(pool)
    .await?;

    let location = format!("/api/jugadors/{}", jugador.id.unwrap_or_default());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(jugador),
    )
        .into_response())
}
