use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;
use wishlist_logging::{wishlist_debug, wishlist_warn};

use crate::types::map_reqwest_error;
use crate::{FailureKind, SheetError, TokenProvider};

pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";

#[derive(Debug, Clone)]
pub struct SheetSettings {
    pub api_base: String,
    pub spreadsheet_id: String,
    pub worksheet: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl SheetSettings {
    pub fn new(spreadsheet_id: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            spreadsheet_id: spreadsheet_id.into(),
            worksheet: "sheet1".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The two operations the wishlist needs from a worksheet.
#[async_trait::async_trait]
pub trait SheetClient: Send + Sync {
    /// Appends one row after the last non-empty row.
    async fn append_row(&self, cells: &[String]) -> Result<(), SheetError>;

    /// Every row of the worksheet, in sheet order.
    async fn read_all_rows(&self) -> Result<Vec<Vec<String>>, SheetError>;
}

#[derive(Debug, Serialize)]
struct AppendBody<'a> {
    values: [&'a [String]; 1],
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Google Sheets v4 `values` API client.
pub struct GoogleSheetsClient {
    settings: SheetSettings,
    auth: Arc<dyn TokenProvider>,
    http: reqwest::Client,
}

impl GoogleSheetsClient {
    pub fn new(settings: SheetSettings, auth: Arc<dyn TokenProvider>) -> Result<Self, SheetError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SheetError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            settings,
            auth,
            http,
        })
    }

    /// `{api_base}/v4/spreadsheets/{id}/values/{range}`.
    fn values_url(&self, range: &str) -> Result<Url, SheetError> {
        let mut url = Url::parse(&self.settings.api_base)
            .map_err(|err| SheetError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SheetError::new(FailureKind::InvalidUrl, "api base cannot hold a path"))?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                self.settings.spreadsheet_id.as_str(),
                "values",
                range,
            ]);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl SheetClient for GoogleSheetsClient {
    async fn append_row(&self, cells: &[String]) -> Result<(), SheetError> {
        let mut url = self.values_url(&format!("{}:append", self.settings.worksheet))?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "RAW")
            .append_pair("insertDataOption", "INSERT_ROWS");
        let token = self.auth.access_token().await?;

        wishlist_debug!(
            "append_row worksheet={} cells={}",
            self.settings.worksheet,
            cells.len()
        );
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&AppendBody { values: [cells] })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        ensure_success(response).await.map(|_| ())
    }

    async fn read_all_rows(&self) -> Result<Vec<Vec<String>>, SheetError> {
        let url = self.values_url(&self.settings.worksheet)?;
        let token = self.auth.access_token().await?;

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = ensure_success(response).await?;

        let range: ValueRange = response
            .json()
            .await
            .map_err(|err| SheetError::new(FailureKind::Decode, err.to_string()))?;
        wishlist_debug!(
            "read_all_rows worksheet={} rows={}",
            self.settings.worksheet,
            range.values.len()
        );
        Ok(range.values)
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, SheetError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    wishlist_warn!("Sheets API returned {}: {}", status, body.trim());
    Err(SheetError::new(
        FailureKind::HttpStatus(status.as_u16()),
        status.to_string(),
    ))
}
