use crate::domain::ports::FactProvider;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Returned whenever the trivia service cannot produce a fact in time.
pub const NO_FACT_FALLBACK: &str = "No fun fact available";

/// numbersapi.com client. The timeout is enforced at the client level, so a
/// slow upstream resolves to the fallback string instead of hanging a request.
#[derive(Debug, Clone)]
pub struct NumbersApiClient {
    client: Client,
    base_url: String,
}

impl NumbersApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl FactProvider for NumbersApiClient {
    async fn fetch(&self, n: i64) -> String {
        let url = format!("{}/{}/math", self.base_url, n);
        tracing::debug!("Fetching fun fact from: {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                // Timeouts and transport errors both land here.
                tracing::debug!("Fun fact request failed: {}", e);
                return NO_FACT_FALLBACK.to_string();
            }
        };

        tracing::debug!("Fun fact response status: {}", response.status());

        if !response.status().is_success() {
            return NO_FACT_FALLBACK.to_string();
        }

        match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Failed to read fun fact body: {}", e);
                NO_FACT_FALLBACK.to_string()
            }
        }
    }
}
