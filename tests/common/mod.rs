#![allow(dead_code)]

use axum::Router;
use jugador_equipo::{AppContext, SharedContext};
use tokio::net::TcpListener;

/// Serves `app` on an ephemeral local port and returns a context pointing at it.
pub async fn serve(app: Router) -> SharedContext {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    AppContext::new(format!("http://{}", addr)).unwrap().shared()
}

/// A context whose base URL has nothing listening behind it.
pub async fn unreachable() -> SharedContext {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    AppContext::new(format!("http://{}", addr)).unwrap().shared()
}
