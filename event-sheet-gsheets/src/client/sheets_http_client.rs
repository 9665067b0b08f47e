use async_trait::async_trait;
use event_sheet_db::repository::grid_store::{AppendOutcome, GridStore, InsertMode, ValueInput};
use event_sheet_db::utils::a1::A1Range;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::time::Duration;
use tracing::debug;

use super::dto::{
    cell_to_string, AddSheetRequest, AppendResponse, BatchRequest, BatchUpdateBody, SheetProperties,
    SpreadsheetResponse, UpdateValuesResponse, ValueRangeBody, ValueRangeResponse,
};
use super::error::SheetsClientError;
use crate::config::SheetsConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `GridStore` over the Google Sheets v4 REST API.
///
/// Authenticates every request with a bearer token. Each call is a single HTTP request;
/// there are no retries and no batching across calls.
pub struct SheetsHttpClient {
    client: reqwest::Client,
    base_url: Url,
    spreadsheet_id: String,
    access_token: String,
}

impl SheetsHttpClient {
    pub fn new(base_url: &str, spreadsheet_id: &str, access_token: &str) -> Result<Self, SheetsClientError> {
        let base_url = Url::parse(base_url).map_err(|_| SheetsClientError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(SheetsClientError::InvalidBaseUrl(base_url.to_string()));
        }
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url,
            spreadsheet_id: spreadsheet_id.to_string(),
            access_token: access_token.to_string(),
        })
    }

    pub fn from_config(config: &SheetsConfig) -> Result<Self, SheetsClientError> {
        Self::new(&config.api_base_url, &config.spreadsheet_id, &config.access_token)
    }

    /// `{base}/v4/spreadsheets/{id}/{segments...}`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str()])
                .extend(segments);
        }
        url
    }

    fn values_endpoint(&self, range: &A1Range, suffix: &str) -> Url {
        let target = format!("{range}{suffix}");
        self.endpoint(&["values", target.as_str()])
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.client.request(method, url).bearer_auth(&self.access_token)
    }

    pub async fn get(&self, range: &A1Range) -> Result<Vec<Vec<String>>, SheetsClientError> {
        debug!(%range, "sheets values get");
        let resp = self.request(Method::GET, self.values_endpoint(range, "")).send().await?;
        let body: ValueRangeResponse = handle_response(resp).await?;
        Ok(body
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }

    pub async fn update(
        &self,
        range: &A1Range,
        values: &[Vec<String>],
        input: ValueInput,
    ) -> Result<(), SheetsClientError> {
        debug!(%range, input = input.as_str(), "sheets values update");
        let body = ValueRangeBody {
            range: range.to_string(),
            major_dimension: "ROWS",
            values,
        };
        let resp = self
            .request(Method::PUT, self.values_endpoint(range, ""))
            .query(&[("valueInputOption", input.as_str())])
            .json(&body)
            .send()
            .await?;
        let _: UpdateValuesResponse = handle_response(resp).await?;
        Ok(())
    }

    pub async fn append(
        &self,
        range: &A1Range,
        values: &[Vec<String>],
        input: ValueInput,
        mode: InsertMode,
    ) -> Result<AppendOutcome, SheetsClientError> {
        debug!(%range, input = input.as_str(), mode = mode.as_str(), "sheets values append");
        let body = ValueRangeBody {
            range: range.to_string(),
            major_dimension: "ROWS",
            values,
        };
        let resp = self
            .request(Method::POST, self.values_endpoint(range, ":append"))
            .query(&[("valueInputOption", input.as_str()), ("insertDataOption", mode.as_str())])
            .json(&body)
            .send()
            .await?;
        let body: AppendResponse = handle_response(resp).await?;
        let updated_range = match body.updates.and_then(|u| u.updated_range) {
            Some(reported) => Some(A1Range::parse(&reported).ok_or(SheetsClientError::UnparseableRange(reported))?),
            None => None,
        };
        Ok(AppendOutcome { updated_range })
    }

    pub async fn titles(&self) -> Result<Vec<String>, SheetsClientError> {
        let resp = self
            .request(Method::GET, self.endpoint(&[]))
            .query(&[("fields", "sheets.properties.title")])
            .send()
            .await?;
        let body: SpreadsheetResponse = handle_response(resp).await?;
        Ok(body.sheets.into_iter().map(|sheet| sheet.properties.title).collect())
    }

    pub async fn create_sheet(&self, title: &str) -> Result<(), SheetsClientError> {
        debug!(title, "sheets add sheet");
        let target = format!("{}:batchUpdate", self.spreadsheet_id);
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(["v4", "spreadsheets", target.as_str()]);
        }
        let body = BatchUpdateBody {
            requests: vec![BatchRequest {
                add_sheet: AddSheetRequest {
                    properties: SheetProperties {
                        title: title.to_string(),
                    },
                },
            }],
        };
        let resp = self.request(Method::POST, url).json(&body).send().await?;
        let _: serde_json::Value = handle_response(resp).await?;
        Ok(())
    }
}

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, SheetsClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json::<T>().await?);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(SheetsClientError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl GridStore for SheetsHttpClient {
    async fn get_values(&self, range: &A1Range) -> Result<Vec<Vec<String>>, Box<dyn Error + Send + Sync>> {
        Ok(self.get(range).await?)
    }

    async fn update_values(
        &self,
        range: &A1Range,
        values: Vec<Vec<String>>,
        input: ValueInput,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(self.update(range, &values, input).await?)
    }

    async fn append_values(
        &self,
        range: &A1Range,
        values: Vec<Vec<String>>,
        input: ValueInput,
        mode: InsertMode,
    ) -> Result<AppendOutcome, Box<dyn Error + Send + Sync>> {
        Ok(self.append(range, &values, input, mode).await?)
    }

    async fn sheet_titles(&self) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
        Ok(self.titles().await?)
    }

    async fn add_sheet(&self, title: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(self.create_sheet(title).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_sheet_db::models::schema::{ColumnSpan, FIRST_DATA_ROW, FULL_ROW_SPAN};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response and hand back the raw request head.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });
        (base, handle)
    }

    #[test]
    fn test_endpoints_are_percent_encoded() -> Result<(), Box<dyn Error + Send + Sync>> {
        let client = SheetsHttpClient::new("https://sheets.googleapis.com/", "abc", "token")?;
        let range = A1Range::from_row("Base Mail", FULL_ROW_SPAN, FIRST_DATA_ROW);
        assert_eq!(
            client.values_endpoint(&range, "").as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc/values/'Base%20Mail'!A2:AO"
        );
        assert_eq!(
            client.values_endpoint(&A1Range::columns("Auditoria", ColumnSpan::new(0, 8)), ":append").as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc/values/'Auditoria'!A:I:append"
        );
        assert_eq!(client.endpoint(&[]).as_str(), "https://sheets.googleapis.com/v4/spreadsheets/abc");
        Ok(())
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(matches!(
            SheetsHttpClient::new("not a url", "abc", "t"),
            Err(SheetsClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            SheetsHttpClient::new("mailto:ops@example.com", "abc", "t"),
            Err(SheetsClientError::InvalidBaseUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_get_values_sends_bearer_token() -> Result<(), Box<dyn Error + Send + Sync>> {
        let (base, server) = serve_once("200 OK", r#"{"range":"'Base Mail'!A2:C3","values":[["7","Ana",3]]}"#).await;
        let client = SheetsHttpClient::new(&base, "abc", "secret-token")?;

        let rows = client
            .get_values(&A1Range::from_row("Base Mail", ColumnSpan::new(0, 2), FIRST_DATA_ROW))
            .await?;
        assert_eq!(rows, vec![vec!["7", "Ana", "3"]]);

        let request = server.await?;
        assert!(request.starts_with("GET /v4/spreadsheets/abc/values/'Base%20Mail'!A2:C "));
        assert!(request.to_lowercase().contains("authorization: bearer secret-token"));
        Ok(())
    }

    #[tokio::test]
    async fn test_error_status_is_reported() -> Result<(), Box<dyn Error + Send + Sync>> {
        let (base, server) = serve_once("403 Forbidden", r#"{"error":{"code":403}}"#).await;
        let client = SheetsHttpClient::new(&base, "abc", "t")?;

        let err = client.titles().await.unwrap_err();
        assert!(matches!(err, SheetsClientError::Status { status: 403, .. }));
        let request = server.await?;
        assert!(request.contains("fields=sheets.properties.title"));
        Ok(())
    }
}
