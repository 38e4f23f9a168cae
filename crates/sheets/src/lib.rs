//! Ledger store client for the Google Sheets v4 `values` API.
//!
//! The client is thin: it appends and reads rows, nothing is cached. Every
//! request carries a pre-issued OAuth bearer token installed as a default
//! header; token issuance and refresh live outside this process.

use async_trait::async_trait;
use engine::{HEADER, LedgerStore, StoreError};
use reqwest::{Client, Response, header};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Client for one ledger tab of one spreadsheet.
#[derive(Clone, Debug)]
pub struct SheetsClient {
    client: Client,
    base_url: String,
    spreadsheet_id: String,
    tab: String,
}

/// Request/response body of the `values` endpoints.
#[derive(Debug, Serialize)]
struct WriteValues {
    values: Vec<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct ReadValues {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl SheetsClient {
    /// Builds a client for `spreadsheet_id`/`tab`.
    ///
    /// `base_url` overrides the Google endpoint, for tests and proxies.
    pub fn new(
        spreadsheet_id: &str,
        token: &str,
        tab: &str,
        base_url: Option<&str>,
    ) -> Result<Self, String> {
        let mut auth = header::HeaderValue::try_from(format!("Bearer {token}"))
            .map_err(|err| format!("invalid auth header value: {err}"))?;
        auth.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| format!("failed to build http client: {err}"))?;

        Ok(Self {
            client,
            base_url: base_url.unwrap_or(DEFAULT_BASE_URL).trim_end_matches('/').to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
            tab: tab.to_string(),
        })
    }

    fn values_url(&self, cells: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}!{}",
            self.base_url, self.spreadsheet_id, self.tab, cells
        )
    }

    async fn get_values(
        &self,
        cells: &str,
        major_dimension: Option<&str>,
    ) -> Result<ReadValues, StoreError> {
        let mut req = self.client.get(self.values_url(cells));
        if let Some(dim) = major_dimension {
            req = req.query(&[("majorDimension", dim)]);
        }

        let resp = req.send().await.map_err(network)?;
        read_json(resp).await
    }

    /// Startup probe: proves the store is reachable and the token works.
    pub async fn probe(&self) -> Result<(), StoreError> {
        self.get_values("A1:E1", None).await.map(|_| ())
    }

    /// Returns `true` when the header range already holds cells.
    pub async fn header_present(&self) -> Result<bool, StoreError> {
        let header = self.get_values("A1:E1", None).await?;
        Ok(!header.values.is_empty())
    }

    /// Writes the header row. One-time setup, driven by the admin tool
    /// only; the bot itself treats the store as connect-or-fail.
    pub async fn write_header(&self) -> Result<(), StoreError> {
        let body = WriteValues {
            values: vec![HEADER.iter().map(|s| s.to_string()).collect()],
        };
        let resp = self
            .client
            .put(self.values_url("A1:E1"))
            .query(&[("valueInputOption", "RAW")])
            .json(&body)
            .send()
            .await
            .map_err(network)?;
        check(resp).await
    }
}

#[async_trait]
impl LedgerStore for SheetsClient {
    async fn append_row(&self, row: Vec<String>) -> Result<(), StoreError> {
        let url = format!("{}:append", self.values_url("A:E"));
        let resp = self
            .client
            .post(url)
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&WriteValues { values: vec![row] })
            .send()
            .await
            .map_err(network)?;
        check(resp).await
    }

    async fn read_rows(&self) -> Result<Vec<Vec<String>>, StoreError> {
        // A2:E skips the header row on the server side.
        Ok(self.get_values("A2:E", None).await?.values)
    }

    async fn read_amounts(&self) -> Result<Vec<String>, StoreError> {
        let column = self.get_values("C2:C", Some("COLUMNS")).await?;
        Ok(column.values.into_iter().next().unwrap_or_default())
    }
}

fn network(err: reqwest::Error) -> StoreError {
    StoreError::Network(err.to_string())
}

async fn check(resp: Response) -> Result<(), StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    Err(service_error(status.as_u16(), resp).await)
}

async fn read_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return resp.json::<T>().await.map_err(network);
    }
    Err(service_error(status.as_u16(), resp).await)
}

async fn service_error(status: u16, resp: Response) -> StoreError {
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error.message,
        Err(_) => "ledger service error".to_string(),
    };
    tracing::debug!("sheets request failed: {status}: {message}");
    StoreError::Service { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SheetsClient {
        SheetsClient::new("sheet-id", "token", "Expenses", None).unwrap()
    }

    #[test]
    fn values_url_targets_the_tab_range() {
        assert_eq!(
            client().values_url("A2:E"),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-id/values/Expenses!A2:E"
        );
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let client = SheetsClient::new("sheet-id", "token", "Expenses", Some("http://localhost:9000/")).unwrap();
        assert_eq!(
            client.values_url("A1:E1"),
            "http://localhost:9000/v4/spreadsheets/sheet-id/values/Expenses!A1:E1"
        );
    }

    #[test]
    fn read_values_defaults_to_empty_when_the_range_is_blank() {
        // Google omits `values` entirely for an empty range.
        let parsed: ReadValues = serde_json::from_str(r#"{"range":"Expenses!A2:E1000"}"#).unwrap();
        assert!(parsed.values.is_empty());

        let parsed: ReadValues =
            serde_json::from_str(r#"{"values":[["2026-08-07 09:00:00","2026-08-07","150.00","Lunch"]]}"#)
                .unwrap();
        assert_eq!(parsed.values[0][2], "150.00");
    }

    #[test]
    fn error_body_carries_the_service_message() {
        let parsed: ErrorBody = serde_json::from_str(
            r#"{"error":{"code":403,"message":"The caller does not have permission","status":"PERMISSION_DENIED"}}"#,
        )
        .unwrap();
        assert_eq!(parsed.error.message, "The caller does not have permission");
    }

    #[test]
    fn append_body_wraps_a_single_row() {
        let body = WriteValues {
            values: vec![vec!["a".to_string(), "b".to_string()]],
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"values":[["a","b"]]}"#
        );
    }
}
