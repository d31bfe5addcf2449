//! RoboHash client for fetching and saving avatars.

mod fetch;
mod save;

use url::Url;

use crate::config::RoboHashClientConfig;
use crate::error::RoboHashResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::request::RoboHashRequestBuilder;
use crate::url::build_request_url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default RoboHash client using the reqwest HTTP backend.
pub type DefaultRoboHashClient = RoboHashClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the RoboHash avatar service.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use [`DefaultRoboHashClient`] for production code.
pub struct RoboHashClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultRoboHashClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &RoboHashClientConfig) -> RoboHashResult<Self> {
        let backend = ReqwestBackend::new(config)?;
        Self::with_backend(config, backend)
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> RoboHashResult<Self> {
        Self::new(&RoboHashClientConfig::default())
    }
}

impl<B: HttpBackend> RoboHashClient<B> {
    /// Create a client that sends requests through `backend`.
    pub fn with_backend(config: &RoboHashClientConfig, backend: B) -> RoboHashResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self { backend, base_url })
    }

    /// The base URL requests are rendered against.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Render the request URL for `builder` against this client's base URL.
    pub fn build_request_url(&self, builder: &RoboHashRequestBuilder) -> RoboHashResult<Url> {
        build_request_url(&self.base_url, builder)
    }
}
