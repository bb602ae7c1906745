mod common;

use jugador_equipo::{
    db,
    dto::record::Record,
    error::ClientError,
    routes,
    services::resources::{EquipoResource, JugadorResource},
    PlayerController, SharedContext, TeamController,
};
use serde_json::{json, Value};

async fn server() -> SharedContext {
    let pool = db::connect_in_memory().await.unwrap();
    common::serve(routes::router(pool)).await
}

fn jugador(nombre: &str, canastas: i64) -> Record {
    Record::new().with("nombre", nombre).with("canastas", canastas)
}

#[tokio::test]
async fn saved_players_show_up_in_the_lists() {
    let ctx = server().await;
    let teams = TeamController::new(ctx.clone());

    teams.save(&jugador("Pau", 12)).await;
    teams.save(&jugador("Marc", 4)).await;
    teams.save(&jugador("Rudy", 9)).await;
    assert!(!teams.is_saving.get().await);

    let players = PlayerController::init(ctx).await;
    let nombres: Vec<_> = players
        .jugadores
        .get()
        .await
        .iter()
        .filter_map(|j| j.get("nombre").and_then(Value::as_str).map(str::to_string))
        .collect();
    assert_eq!(nombres, vec!["Pau", "Marc", "Rudy"]);

    players.canastas_top.set("9".to_string()).await;
    players.load_top().await;
    let top: Vec<_> = players
        .jugadores
        .get()
        .await
        .iter()
        .map(|j| (j.as_map()["nombre"].clone(), j.as_map()["canastas"].clone()))
        .collect();
    assert_eq!(top, vec![(json!("Pau"), json!(12)), (json!("Rudy"), json!(9))]);
}

#[tokio::test]
async fn non_numeric_threshold_leaves_the_list_alone() {
    let ctx = server().await;
    TeamController::new(ctx.clone()).save(&jugador("Pau", 12)).await;

    let players = PlayerController::init(ctx).await;
    let before = players.jugadores.get().await;
    assert_eq!(before.len(), 1);

    players.filter_by_threshold("undefined").await;

    assert_eq!(players.jugadores.get().await, before);
}

#[tokio::test]
async fn rejected_save_still_resets_the_flag() {
    let ctx = server().await;
    let teams = TeamController::new(ctx.clone());

    teams.save(&jugador("Pau", 12).with("id", 1)).await;

    assert!(!teams.is_saving.get().await);
    assert!(JugadorResource::new(ctx).query().await.unwrap().is_empty());
}

#[tokio::test]
async fn teams_round_trip_through_the_resource() {
    let ctx = server().await;
    let resource = EquipoResource::new(ctx.clone());

    let created = resource
        .save(&Record::new().with("nombreEquipo", "AAAAA").with("localidad", "AAAAA"))
        .await
        .unwrap();
    let id = created.id().unwrap().as_i64().unwrap();

    let teams = TeamController::new(ctx);
    teams.load_teams().await;
    assert_eq!(teams.equipos.get().await, vec![created.clone()]);

    let updated = resource
        .update(&created.clone().with("localidad", "BBBBB"))
        .await
        .unwrap();
    assert_eq!(updated.get("localidad"), Some(&json!("BBBBB")));
    assert_eq!(resource.get(id).await.unwrap(), updated);

    resource.delete(id).await.unwrap();
    let err = resource.get(id).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Status { status, .. } if status == reqwest::StatusCode::NOT_FOUND
    ));
}

#[tokio::test]
async fn player_resource_crud() {
    let ctx = server().await;
    let resource = JugadorResource::new(ctx);

    let created = resource.save(&jugador("Pau", 12)).await.unwrap();
    let id = created.id().unwrap().as_i64().unwrap();

    let updated = resource.update(&created.clone().with("rebotes", 6)).await.unwrap();
    assert_eq!(updated.get("rebotes"), Some(&json!(6)));

    assert!(resource.by_canastas(13).await.unwrap().is_empty());
    assert_eq!(resource.by_canastas(12).await.unwrap(), vec![updated]);

    resource.delete(id).await.unwrap();
    assert!(resource.delete(id).await.is_err());
}
