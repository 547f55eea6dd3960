//! API server state

use std::sync::Arc;

use crate::upstream::{CrimeClient, UpstreamTransport};
use crate::Result;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Client for the upstream provider, shared by all requests
    pub client: CrimeClient,
}

impl AppState {
    pub fn new(client: CrimeClient) -> Self {
        Self { client }
    }

    /// Create state around an arbitrary transport
    pub fn with_transport(transport: Arc<dyn UpstreamTransport>) -> Result<Self> {
        Ok(Self::new(CrimeClient::new(transport)?))
    }
}
