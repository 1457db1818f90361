use crate::adapters::auth::TokenProvider;
use crate::domain::model::{Range, ValueInputOption};
use crate::domain::ports::ValueStore;
use crate::utils::error::{Result, RosterError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Shape of `values.get` responses; `values` is absent for empty ranges.
#[derive(Debug, Deserialize)]
struct ValueRangeResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct ValueRangeBody {
    values: Vec<Vec<String>>,
}

/// Google Sheets v4 `values` client. One HTTP round-trip per operation; the
/// request timeout bounds hung store calls so a stuck request cannot pin an
/// HTTP handler forever.
pub struct SheetsClient {
    client: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    token: TokenProvider,
}

impl SheetsClient {
    pub fn new(spreadsheet_id: &str, token: TokenProvider, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(SheetsClient {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
            token,
        })
    }

    /// Points the client at a different API host. Tests use this to target
    /// a local mock server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn values_url(&self, range: &Range, suffix: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}{}",
            self.base_url, self.spreadsheet_id, range, suffix
        )
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!("sheets API returned {}: {}", status, body);
        Err(RosterError::StoreError {
            status: status.as_u16(),
            body: body.chars().take(200).collect(),
        })
    }
}

#[async_trait]
impl ValueStore for SheetsClient {
    async fn get(&self, range: &Range) -> Result<Vec<Vec<String>>> {
        let url = self.values_url(range, "");
        let token = self.token.bearer_token(&self.client).await?;

        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).bearer_auth(token).send().await?;
        let parsed: ValueRangeResponse = Self::check(response).await?.json().await?;
        Ok(parsed.values)
    }

    async fn append(
        &self,
        range: &Range,
        rows: Vec<Vec<String>>,
        input: ValueInputOption,
    ) -> Result<()> {
        let url = self.values_url(range, ":append");
        let token = self.token.bearer_token(&self.client).await?;

        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .query(&[("valueInputOption", input.as_str())])
            .json(&ValueRangeBody { values: rows })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn update(
        &self,
        range: &Range,
        rows: Vec<Vec<String>>,
        input: ValueInputOption,
    ) -> Result<()> {
        let url = self.values_url(range, "");
        let token = self.token.bearer_token(&self.client).await?;

        tracing::debug!("PUT {}", url);
        let response = self
            .client
            .put(&url)
            .bearer_auth(token)
            .query(&[("valueInputOption", input.as_str())])
            .json(&ValueRangeBody { values: rows })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
