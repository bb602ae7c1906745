use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sqlx::SqlitePool;
use tracing::info;

use crate::dto::equipo_dto::Equipo;
use crate::error::ApiError;

/**
 * GET request to get all the teams.
 */
pub async fn get_equipos(
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<Vec<Equipo>>, ApiError> {
    info!("Fetching teams.");

    let equipos = sqlx::query_as::<_, Equipo>("SELECT * FROM equipo ORDER BY id")
        .fetch_all(&pool)
        .await?;

    Ok(Json(equipos))
}

/**
 * GET request to get one team by id.
 */
pub async fn get_equipo(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Equipo>, ApiError> {
    info!("Fetching team {}", id);

    let equipo = sqlx::query_as::<_, Equipo>("SELECT * FROM equipo WHERE id = ?")
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(equipo))
}

/**
 * POST request to create a new team.
 */
pub async fn create_equipo(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<Equipo>,
) -> Result<Response, ApiError> {
    if payload.id.is_some() {
        return Err(ApiError::BadRequest(
            "A new equipo cannot already have an ID".to_string(),
        ));
    }

    insert_equipo(&pool, &payload).await
}

/**
 * PUT request to update a team. A team without id is created instead.
 */
pub async fn update_equipo(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<Equipo>,
) -> Result<Response, ApiError> {
    let Some(id) = payload.id else {
        return insert_equipo(&pool, &payload).await;
    };

    info!("Updating team {}", id);

    let equipo = sqlx::query_as::<_, Equipo>(
        r#"
        UPDATE equipo
        SET nombre_equipo = ?, localidad = ?
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&payload.nombre_equipo)
    .bind(&payload.localidad)
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or(ApiError::NotFound)?;

    Ok((StatusCode::OK, Json(equipo)).into_response())
}

/**
 * DELETE request to delete a team by id.
 */
pub async fn delete_equipo(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    info!("Deleting team {}", id);

    let result = sqlx::query("DELETE FROM equipo WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::OK)
}

async fn insert_equipo(pool: &SqlitePool, payload: &Equipo) -> Result<Response, ApiError> {
    info!("Creating team {:?}", payload.nombre_equipo);

    let equipo = sqlx::query_as::<_, Equipo>(
        r#"
        INSERT INTO equipo (nombre_equipo, localidad)
        VALUES (?, ?)
        RETURNING *
        "#,
    )
    .bind(&payload.nombre_equipo)
    .bind(&payload.localidad)
    .fetch_one(pool)
    .await?;

    let location = format!("/api/equipos/{}", equipo.id.unwrap_or_default());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(equipo),
    )
        .into_response())
}
