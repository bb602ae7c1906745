use std::sync::Arc;

use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Everything the controllers need to talk to the API.
///
/// Built once at startup and only read afterwards; hand out clones of a
/// [`SharedContext`] rather than building another one.
#[derive(Debug, Clone)]
pub struct AppContext {
    base_url: String,
    http: Client,
}

pub type SharedContext = Arc<AppContext>;

impl AppContext {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().build()?;

        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(config.base_url.clone())
    }

    pub fn shared(self) -> SharedContext {
        Arc::new(self)
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Resolves an API path such as `api/jugadors` against the base URL.
    /// The path is appended as is.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_a_single_slash() {
        let ctx = AppContext::new("http://localhost:3000/").unwrap();
        assert_eq!(ctx.url("api/equipos"), "http://localhost:3000/api/equipos");
        assert_eq!(ctx.url("/api/equipos"), "http://localhost:3000/api/equipos");

        let ctx = AppContext::new("http://localhost:3000").unwrap();
        assert_eq!(ctx.url("api/jugadors"), "http://localhost:3000/api/jugadors");
    }

    #[test]
    fn built_from_client_config() {
        let config = ClientConfig::from_lookup(|key| match key {
            "API_BASE_URL" => Some("https://example.org/app/".to_string()),
            _ => None,
        })
        .unwrap();

        let ctx = AppContext::from_config(&config).unwrap().shared();
        assert_eq!(ctx.url("api/equipos"), "https://example.org/app/api/equipos");
    }

    #[test]
    fn default_client_config_targets_local_server() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        let ctx = AppContext::from_config(&config).unwrap();
        assert_eq!(ctx.url("api/jugadors"), "http://127.0.0.1:3000/api/jugadors");
    }

    #[test]
    fn environment_config_yields_a_usable_context() {
        let config = ClientConfig::from_env().unwrap();
        let ctx = AppContext::from_config(&config).unwrap();
        assert!(ctx.url("api/equipos").ends_with("/api/equipos"));
    }

    #[test]
    fn keeps_a_base_path() {
        let ctx = AppContext::new("https://example.org/app").unwrap();
        assert_eq!(
            ctx.url("api/jugadors/canastas/8"),
            "https://example.org/app/api/jugadors/canastas/8"
        );
    }

    #[test]
    fn does_not_touch_the_path() {
        let ctx = AppContext::new("http://localhost").unwrap();
        assert_eq!(
            ctx.url("api/jugadors/canastas/undefined"),
            "http://localhost/api/jugadors/canastas/undefined"
        );
    }
}
