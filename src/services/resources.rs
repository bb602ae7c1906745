use std::fmt::Display;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::context::SharedContext;
use crate::dto::record::Record;
use crate::error::ClientError;

const EQUIPOS: &str = "api/equipos";
const JUGADORS: &str = "api/jugadors";

/// Sends the request and turns any non-2xx answer into an error.
async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status { status, body });
    }

    Ok(response)
}

async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    Ok(send(request).await?.json().await?)
}

/**
 * Client for `api/equipos`. Teams are opaque to the client, so every call
 * speaks in [`Record`]s.
 */
#[derive(Debug, Clone)]
pub struct EquipoResource {
    ctx: SharedContext,
}

impl EquipoResource {
    pub fn new(ctx: SharedContext) -> Self {
        Self { ctx }
    }

    pub async fn query(&self) -> Result<Vec<Record>, ClientError> {
        let url = self.ctx.url(EQUIPOS);
        debug!("GET {}", url);
        fetch(self.ctx.http().get(url)).await
    }

    pub async fn get(&self, id: impl Display) -> Result<Record, ClientError> {
        let url = self.ctx.url(&format!("{}/{}", EQUIPOS, id));
        debug!("GET {}", url);
        fetch(self.ctx.http().get(url)).await
    }

    pub async fn save(&self, equipo: &Record) -> Result<Record, ClientError> {
        let url = self.ctx.url(EQUIPOS);
        debug!("POST {}", url);
        fetch(self.ctx.http().post(url).json(equipo)).await
    }

    pub async fn update(&self, equipo: &Record) -> Result<Record, ClientError> {
        let url = self.ctx.url(EQUIPOS);
        debug!("PUT {}", url);
        fetch(self.ctx.http().put(url).json(equipo)).await
    }

    pub async fn delete(&self, id: impl Display) -> Result<(), ClientError> {
        let url = self.ctx.url(&format!("{}/{}", EQUIPOS, id));
        debug!("DELETE {}", url);
        send(self.ctx.http().delete(url)).await?;
        Ok(())
    }
}

/**
 * Client for `api/jugadors`, including the score filter.
 */
#[derive(Debug, Clone)]
pub struct JugadorResource {
    ctx: SharedContext,
}

impl JugadorResource {
    pub fn new(ctx: SharedContext) -> Self {
        Self { ctx }
    }

    pub async fn query(&self) -> Result<Vec<Record>, ClientError> {
        let url = self.ctx.url(JUGADORS);
        debug!("GET {}", url);
        fetch(self.ctx.http().get(url)).await
    }

    pub async fn get(&self, id: impl Display) -> Result<Record, ClientError> {
        let url = self.ctx.url(&format!("{}/{}", JUGADORS, id));
        debug!("GET {}", url);
        fetch(self.ctx.http().get(url)).await
    }

    /// Players scoring at least `threshold`. The threshold goes into the
    /// path verbatim, whatever it renders as.
    pub async fn by_canastas(&self, threshold: impl Display) -> Result<Vec<Record>, ClientError> {
        let url = self.ctx.url(&format!("{}/canastas/{}", JUGADORS, threshold));
        debug!("GET {}", url);
        fetch(self.ctx.http().get(url)).await
    }

    pub async fn save(&self, jugador: &Record) -> Result<Record, ClientError> {
        let url = self.ctx.url(JUGADORS);
        debug!("POST {}", url);
        fetch(self.ctx.http().post(url).json(jugador)).await
    }

    pub async fn update(&self, jugador: &Record) -> Result<Record, ClientError> {
        let url = self.ctx.url(JUGADORS);
        debug!("PUT {}", url);
        fetch(self.ctx.http().put(url).json(jugador)).await
    }

    pub async fn delete(&self, id: impl Display) -> Result<(), ClientError> {
        let url = self.ctx.url(&format!("{}/{}", JUGADORS, id));
        debug!("DELETE {}", url);
        send(self.ctx.http().delete(url)).await?;
        Ok(())
    }
}
