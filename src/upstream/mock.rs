//! Scripted in-memory transport
//!
//! Replies are handed out in the order they were pushed. Every request URL is
//! recorded so callers can assert on what would have gone over the wire.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::{Error, Result};

use super::{UpstreamReply, UpstreamTransport};

#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<UpstreamReply>>>,
    requests: Mutex<Vec<Url>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply with the given status and raw body.
    pub fn push_json(&self, status: u16, body: impl Into<String>) {
        self.push(Ok(UpstreamReply {
            status,
            body: Bytes::from(body.into()),
        }));
    }

    /// Queue a transport failure.
    pub fn push_error(&self, err: Error) {
        self.push(Err(err));
    }

    fn push(&self, reply: Result<UpstreamReply>) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(reply);
    }

    /// Number of requests issued so far
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// URLs of all requests issued so far, oldest first
    pub fn requests(&self) -> Vec<Url> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl UpstreamTransport for MockTransport {
    async fn get(&self, url: &Url) -> Result<UpstreamReply> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.clone());

        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(Error::network("no scripted reply left")))
    }
}
