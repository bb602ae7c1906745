use std::fmt::Display;

use tracing::{info, warn};

use crate::context::SharedContext;
use crate::dto::record::Record;
use crate::services::resources::JugadorResource;
use crate::services::view_state::ViewState;

/// Player list with the "top scorers" filter.
///
/// `canastas_top` is the raw threshold the user typed. Every fetch, filtered
/// or not, overwrites `jugadores`; whichever response lands last wins.
pub struct PlayerController {
    resource: JugadorResource,
    pub jugadores: ViewState<Vec<Record>>,
    pub canastas_top: ViewState<String>,
}

impl PlayerController {
    pub fn new(ctx: SharedContext) -> Self {
        Self {
            resource: JugadorResource::new(ctx),
            jugadores: ViewState::default(),
            canastas_top: ViewState::default(),
        }
    }

    /// Builds the controller and loads the full list, as the page does when
    /// it opens.
    pub async fn init(ctx: SharedContext) -> Self {
        let controller = Self::new(ctx);
        controller.load_all().await;
        controller
    }

    pub async fn load_all(&self) {
        info!("Fetching players.");

        match self.resource.query().await {
            Ok(jugadores) => self.jugadores.set(jugadores).await,
            Err(e) => warn!("Could not load players: {}", e),
        }
    }

    /// Swaps the list for the players with at least `threshold` baskets.
    /// The threshold is not checked here; the server rejects junk.
    pub async fn filter_by_threshold(&self, threshold: impl Display) {
        info!("Fetching players with at least {} canastas.", threshold);

        match self.resource.by_canastas(threshold).await {
            Ok(jugadores) => self.jugadores.set(jugadores).await,
            Err(e) => warn!("Could not filter players: {}", e),
        }
    }

    /// Filters by the threshold currently held in `canastas_top`.
    pub async fn load_top(&self) {
        let threshold = self.canastas_top.get().await;
        self.filter_by_threshold(threshold).await;
    }
}
