//! reqwest-backed upstream transport

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::{Error, Result};

use super::{UpstreamReply, UpstreamTransport};

/// Transport over a shared [`reqwest::Client`] connection pool
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport. Without `timeout` the request waits as long as the
    /// connection stays open.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(map_reqwest_error)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamTransport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<UpstreamReply> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        Ok(UpstreamReply { status, body })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout
    } else {
        Error::network(err.to_string())
    }
}
