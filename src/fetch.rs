//! HTTP retrieval of the source dataset.
//!
//! The pipeline's only suspension point lives here. The client sits behind
//! a trait so tests and alternative transports can stand in for the real
//! network.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Request, Response};

#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

/// Plain [`reqwest::Client`] transport.
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: Request) -> reqwest::Result<Response> {
        self.0.execute(req).await
    }
}

/// Fetches the raw dataset bytes from `url`.
///
/// A non-success HTTP status is an error: the caller treats any fetch
/// failure as terminal for the whole load.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client
        .execute(req)
        .await?
        .error_for_status()
        .with_context(|| format!("fetching {url}"))?;

    Ok(resp.bytes().await?.to_vec())
}
