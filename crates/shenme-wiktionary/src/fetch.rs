use reqwest::StatusCode;

/// Retrieves the raw text of an article
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the body at `address`
    async fn fetch(&self, address: &str) -> Result<String, FetchError>;
}

#[async_trait::async_trait]
impl<'a, T: PageFetcher + ?Sized> PageFetcher for &'a T {
    async fn fetch(&self, address: &str) -> Result<String, FetchError> {
        (**self).fetch(address).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Could not construct HTTP client: {0}")]
    BuildClient(#[source] reqwest::Error),

    #[error("Cannot download page: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Bad status code {0}")]
    Status(u16),

    #[error("Cannot read the body: {0}")]
    Body(#[source] reqwest::Error),
}

/// [`PageFetcher`] over HTTP
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Wiktionary rejects requests without a descriptive user agent, so one is required.
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::BuildClient)?;

        Ok(Self::with_client(client))
    }

    /// Use a pre-configured client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, address: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(address)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(FetchError::Body)?;
        tracing::debug!(bytes = body.len(), "fetched page");

        Ok(body)
    }
}
