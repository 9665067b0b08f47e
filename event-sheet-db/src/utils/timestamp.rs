use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Format of every timestamp this service writes into the sheets.
pub const SHEET_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Formats accepted when reading timestamps back, tried in order.
const ACCEPTED_FORMATS: [&str; 5] = [
    SHEET_TIMESTAMP_FORMAT,
    "%d/%m/%Y, %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Current local time in sheet format.
pub fn now_local() -> String {
    Local::now().format(SHEET_TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp cell written by this service, by a person, or by an older client.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Local).naive_local());
    }
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%d/%m/%Y")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Sort key of a timestamp cell; unparseable values sort as the Unix epoch.
pub fn sortable_timestamp(value: &str) -> NaiveDateTime {
    parse_timestamp(value).unwrap_or_default()
}
