//! Shared HTTP client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `HttpClient` is built at startup and provided through context. Every
//! request it issues carries the client's default headers, which is how the
//! session token reaches the API as `Authorization: Bearer <token>`.
//!
//! Client-side (hydrate): requests go out via `gloo-net`.
//! Server-side (SSR): request helpers return [`HttpError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::{Arc, PoisonError, RwLock};

pub const AUTHORIZATION: &str = "Authorization";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Format a bearer credential.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Ordered header map; names compare case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultHeaders {
    entries: Vec<(String, String)>,
}

impl DefaultHeaders {
    pub fn set(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some(entry) => entry.1 = value.to_owned(),
            None => self.entries.push((name.to_owned(), value.to_owned())),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(n, _)| n.eq_ignore_ascii_case(name))?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// HTTP client shared across the app. Clones share default headers.
#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    base_url: String,
    defaults: Arc<RwLock<DefaultHeaders>>,
}

impl HttpClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), defaults: Arc::default() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL with an absolute API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn set_default_header(&self, name: &str, value: &str) {
        self.defaults.write().unwrap_or_else(PoisonError::into_inner).set(name, value);
    }

    #[must_use]
    pub fn default_header(&self, name: &str) -> Option<String> {
        self.defaults
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .map(str::to_owned)
    }

    pub fn remove_default_header(&self, name: &str) -> Option<String> {
        self.defaults.write().unwrap_or_else(PoisonError::into_inner).remove(name)
    }

    /// Snapshot of the headers applied to every request.
    #[must_use]
    pub fn default_headers(&self) -> DefaultHeaders {
        self.defaults.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn install_bearer_token(&self, token: &str) {
        self.set_default_header(AUTHORIZATION, &bearer(token));
    }

    pub fn clear_authorization(&self) {
        self.remove_default_header(AUTHORIZATION);
    }

    #[cfg(feature = "hydrate")]
    fn with_defaults(&self, mut builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        for (name, value) in self.default_headers().iter() {
            builder = builder.header(name, value);
        }
        builder
    }

    /// `POST` a JSON body and decode a JSON reply.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses, or undecodable bodies.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(path);
            log::debug!("POST {url}");
            let resp = self
                .with_defaults(gloo_net::http::Request::post(&url))
                .json(body)
                .map_err(|e| HttpError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| HttpError::Transport(e.to_string()))?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(HttpError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, HttpError> {
    if !resp.ok() {
        return Err(HttpError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| HttpError::Decode(e.to_string()))
}
