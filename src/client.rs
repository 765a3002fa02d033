//! HTTP client for CouchDB-compatible servers.

use std::fmt;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::query::ViewQuery;
use crate::view::ViewResult;

/// URL scheme used to reach the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
  #[default]
  Http,
  Https,
}

impl fmt::Display for Scheme {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Scheme::Http => write!(f, "http"),
      Scheme::Https => write!(f, "https"),
    }
  }
}

/// Connection parameters for a CouchDB-compatible server.
///
/// Immutable once handed to the client. No validation is performed on
/// construction; a bad host or port surfaces when a request is attempted.
#[derive(Debug, Clone)]
pub struct ClientConfig {
  pub host: String,
  pub port: u16,
  pub scheme: Scheme,
  pub username: String,
  pub password: String,
}

impl ClientConfig {
  /// Config for `host:5984` over plain http. Most servers run here.
  pub fn new(
    host: impl Into<String>,
    username: impl Into<String>,
    password: impl Into<String>,
  ) -> Self {
    Self {
      host: host.into(),
      port: 5984,
      scheme: Scheme::Http,
      username: username.into(),
      password: password.into(),
    }
  }

  /// Override the port (443 for hosted Cloudant over https).
  pub fn with_port(mut self, port: u16) -> Self {
    self.port = port;
    self
  }

  /// Override the scheme.
  pub fn with_scheme(mut self, scheme: Scheme) -> Self {
    self.scheme = scheme;
    self
  }

  fn base_url(&self) -> String {
    format!("{}://{}:{}", self.scheme, self.host, self.port)
  }
}

/// Client for querying a CouchDB-compatible document store over HTTP.
///
/// Every operation is a single authenticated GET round trip; the client
/// keeps no state between calls beyond its read-only configuration, so it
/// can be shared freely across tasks.
#[derive(Debug, Clone)]
pub struct DocStoreClient {
  http: reqwest::Client,
  config: ClientConfig,
}

impl DocStoreClient {
  /// Client for `host:5984` over plain http.
  ///
  /// Prefer a generated API key over master account credentials.
  pub fn new(
    host: impl Into<String>,
    username: impl Into<String>,
    password: impl Into<String>,
  ) -> Self {
    Self::with_config(ClientConfig::new(host, username, password))
  }

  /// Client with explicit connection parameters.
  pub fn with_config(config: ClientConfig) -> Self {
    Self {
      http: reqwest::Client::new(),
      config,
    }
  }

  /// Connection parameters this client was built with.
  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  /// GET `/` — server and software version info.
  pub async fn account_info(&self) -> Result<Value> {
    self.fetch("/").await
  }

  /// GET `/_all_dbs` — names of all databases the credentials can see.
  ///
  /// The server answers with a bare JSON array rather than an object, so
  /// the body decodes straight into a string vector.
  pub async fn databases(&self) -> Result<Vec<String>> {
    self.fetch("/_all_dbs").await
  }

  /// GET an arbitrary path and decode the response as JSON.
  ///
  /// This is the call to use for views and documents, e.g.
  /// `/dbname/_design/app/_view/all`.
  pub async fn get(&self, path: &str) -> Result<Value> {
    self.fetch(path).await
  }

  /// Run a view query and decode the response into a typed [`ViewResult`].
  pub async fn query_view(&self, query: &ViewQuery) -> Result<ViewResult> {
    self.fetch(&query.compile()).await
  }

  /// Single fetch path behind every operation: build the URL, GET with
  /// basic auth, decode the 200 body as JSON. Credentials are attached
  /// per request and only ever sent to the configured host:port, since
  /// all paths are resolved against it.
  async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    let url = format!("{}{}", self.config.base_url(), path);

    let response = self
      .http
      .get(&url)
      .basic_auth(&self.config.username, Some(&self.config.password))
      .send()
      .await
      .map_err(|e| {
        warn!("GET {path} failed: {e}");
        Error::Transport(e)
      })?;

    let status = response.status();
    if status != StatusCode::OK {
      // Only 200s carry a usable body; everything else is reported as-is.
      warn!("GET {path} returned {}", status.as_u16());
      return Err(Error::HttpStatus {
        status: status.as_u16(),
      });
    }

    let body = response.text().await?;
    let decoded = serde_json::from_str(&body).map_err(|e| {
      warn!("GET {path} returned a body that is not valid JSON: {e}");
      Error::Parse(e.to_string())
    })?;

    debug!("GET {path} succeeded");
    Ok(decoded)
  }
}
