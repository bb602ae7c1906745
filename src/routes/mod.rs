use axum::{
    extract::Extension,
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod equipos;
pub mod health;
pub mod jugadors;

/// The REST surface the controllers talk to.
pub fn router(pool: SqlitePool) -> Router {
    // The page is served from a different origin while developing.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/equipos",
            get(equipos::get_equipos)
                .post(equipos::create_equipo)
                .put(equipos::update_equipo),
        )
        .route(
            "/api/equipos/{id}",
            get(equipos::get_equipo).delete(equipos::delete_equipo),
        )
        .route(
            "/api/jugadors",
            get(jugadors::get_jugadors)
                .post(jugadors::create_jugador)
                .put(jugadors::update_jugador),
        )
        .route(
            "/api/jugadors/{id}",
            get(jugadors::get_jugador).delete(jugadors::delete_jugador),
        )
        .route(
            "/api/jugadors/canastas/{canastas}",
            get(jugadors::get_jugadors_by_canastas),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(pool))
}
