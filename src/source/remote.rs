//! Remote JSON endpoint

use super::DataSource;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::Employee;
use async_trait::async_trait;
use tracing::debug;

/// Public members list the directory points at when nothing else is set
pub const DEFAULT_ENDPOINT: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Fetches the directory with a single GET
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: HttpClient,
    url: String,
}

impl HttpDataSource {
    /// Create a source for `url` using a default client
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_config(url, HttpClientConfig::default())
    }

    /// Create a source for `url` with a custom client configuration
    pub fn with_config(url: impl Into<String>, config: HttpClientConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClient::with_config(config)?,
            url: url.into(),
        })
    }

    /// Endpoint this source reads from
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch_all(&self) -> Result<Vec<Employee>> {
        let records: Vec<Employee> = self.client.get_json(&self.url).await?;
        debug!("Fetched {} records from {}", records.len(), self.url);
        Ok(records)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
