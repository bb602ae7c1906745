use tracing::{info, warn};

use crate::context::SharedContext;
use crate::dto::record::Record;
use crate::services::resources::{EquipoResource, JugadorResource};
use crate::services::view_state::ViewState;

/// Team listing plus the player form.
///
/// `equipos` holds the last team list that arrived; `jugador` is the record
/// the form edits; `is_saving` is up while a save is outstanding so the
/// view can disable the submit button.
pub struct TeamController {
    equipo_resource: EquipoResource,
    jugador_resource: JugadorResource,
    pub equipos: ViewState<Vec<Record>>,
    pub jugador: ViewState<Record>,
    pub is_saving: ViewState<bool>,
}

impl TeamController {
    pub fn new(ctx: SharedContext) -> Self {
        Self {
            equipo_resource: EquipoResource::new(ctx.clone()),
            jugador_resource: JugadorResource::new(ctx),
            equipos: ViewState::default(),
            jugador: ViewState::default(),
            is_saving: ViewState::new(false),
        }
    }

    /// Replaces `equipos` with the server's list. A failed request keeps
    /// the old list.
    pub async fn load_teams(&self) {
        info!("Fetching teams.");

        match self.equipo_resource.query().await {
            Ok(equipos) => self.equipos.set(equipos).await,
            Err(e) => warn!("Could not load teams: {}", e),
        }
    }

    /// POSTs `jugador` and keeps `is_saving` up until the server answers.
    ///
    /// The outcome is not propagated: success and failure both just lower
    /// the flag.
    pub async fn save(&self, jugador: &Record) {
        self.is_saving.set(true).await;

        match self.jugador_resource.save(jugador).await {
            Ok(saved) => info!("Saved player {:?}", saved.id()),
            Err(e) => warn!("Could not save player: {}", e),
        }

        self.is_saving.set(false).await;
    }

    /// Saves whatever the form currently holds.
    pub async fn save_form(&self) {
        let jugador = self.jugador.get().await;
        self.save(&jugador).await;
    }
}
