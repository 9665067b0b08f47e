use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Request DTOs ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRangeBody<'a> {
    pub range: String,
    pub major_dimension: &'static str,
    pub values: &'a [Vec<String>],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateBody {
    pub requests: Vec<BatchRequest>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub add_sheet: AddSheetRequest,
}

#[derive(Debug, Serialize)]
pub struct AddSheetRequest {
    pub properties: SheetProperties,
}

// ── Response DTOs ──────────────────────────────────────────────────────

/// `values` is absent when the range holds no data.
#[derive(Debug, Deserialize)]
pub struct ValueRangeResponse {
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
pub struct AppendResponse {
    pub updates: Option<UpdateValuesResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    pub updated_range: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SpreadsheetResponse {
    #[serde(default)]
    pub sheets: Vec<SheetResponse>,
}

#[derive(Debug, Deserialize)]
pub struct SheetResponse {
    pub properties: SheetProperties,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SheetProperties {
    pub title: String,
}

/// Render a cell as the string the sheet shows. Numbers and booleans come back typed
/// when a cell was entered as a number or checkbox.
pub fn cell_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
