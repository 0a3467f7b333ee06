use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// Success payload of the classify endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResponse {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<String>,
    pub digit_sum: u32,
    pub fun_fact: String,
}

/// Error payload of the classify endpoint (400 responses).
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub invalid_input: Option<String>,
}

pub struct NumberApiClient {
    client: Client,
    base_url: String,
}

impl NumberApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Classify a number, decoding the success schema.
    ///
    /// Non-success statuses are surfaced as errors carrying the raw body
    /// so callers can inspect the structured 400 payload.
    pub async fn classify(
        &self,
        number: &str,
    ) -> Result<ClassificationResponse, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .get(format!("{}/api/classify-number", self.base_url))
            .query(&[("number", number)])
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("API returned error status {}: {}", status, text).into());
        }

        match serde_json::from_str::<ClassificationResponse>(&text) {
            Ok(classification) => Ok(classification),
            Err(e) => Err(e.into()),
        }
    }

    /// Perform a raw classify request, leaving status and body handling
    /// to the caller.
    pub async fn classify_raw(&self, number: &str) -> Result<Response, reqwest::Error> {
        self.client
            .get(format!("{}/api/classify-number", self.base_url))
            .query(&[("number", number)])
            .send()
            .await
    }
}
