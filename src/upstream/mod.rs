//! Upstream crime-data provider
//!
//! [`CrimeClient`] owns the request shape (base URL, `location`, `limit`) and
//! response decoding. The actual HTTP exchange sits behind
//! [`UpstreamTransport`] so tests can swap in [`mock::MockTransport`].

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::types::{CrimeEvent, EventsEnvelope};
use crate::{Error, Result};

pub mod http;
pub mod mock;

/// Events endpoint of the provider
pub const UPSTREAM_BASE_URL: &str = "https://brottsplatskartan.se/api/events/";

/// Number of events requested per call
pub const EVENT_LIMIT: u32 = 5;

/// Location used by the endpoints that take no `city`
pub const DEFAULT_LOCATION: &str = "helsingborg";

/// Raw reply from the provider, before any status or body checks
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Bytes,
}

/// Transport used to reach the provider
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    /// Issue a GET for `url`. Only transport-level failures are errors; any
    /// HTTP status is returned as a reply.
    async fn get(&self, url: &Url) -> Result<UpstreamReply>;
}

/// Typed client for the provider's events endpoint
#[derive(Clone)]
pub struct CrimeClient {
    transport: Arc<dyn UpstreamTransport>,
    base_url: Url,
    limit: u32,
}

impl CrimeClient {
    pub fn new(transport: Arc<dyn UpstreamTransport>) -> Result<Self> {
        Ok(Self {
            transport,
            base_url: Url::parse(UPSTREAM_BASE_URL)?,
            limit: EVENT_LIMIT,
        })
    }

    /// URL for the events of `location`. The location is form-encoded, so
    /// `&`, `=` or spaces in a city cannot inject extra parameters.
    pub fn events_url(&self, location: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("location", location)
            .append_pair("limit", &self.limit.to_string());
        url
    }

    /// Fetch the latest events for `location`, in provider order.
    pub async fn fetch_events(&self, location: &str) -> Result<Vec<CrimeEvent>> {
        let url = self.events_url(location);
        tracing::debug!(%url, "Fetching upstream events");

        let reply = self.transport.get(&url).await?;
        if !(200..300).contains(&reply.status) {
            return Err(Error::status(reply.status));
        }

        let envelope: EventsEnvelope = serde_json::from_slice(&reply.body)?;
        Ok(envelope.data)
    }
}
