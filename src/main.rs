use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jugador_equipo::{config::ServerConfig, db, routes};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    let pool = db::connect(&config.database_url)
        .await
        .expect("Could not connect to SQLite");

    info!("Connected to sqlite database.");

    let app = routes::router(pool);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    info!("Started server on {}.", addr);

    axum::serve(listener, app).await.expect("Server error");
}
