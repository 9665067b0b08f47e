use serde::{Deserialize, Serialize};

/// # Documentation
/// - One field-level change recorded in the audit sheet.
/// - Entries are append-only: created once when a field's value changes, never edited or removed.
/// - `key` may be empty for entries written at creation time, before the downstream
///   process assigns the event id; `row` still identifies the sheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub timestamp: String,
    pub key: String,
    pub row: usize,
    pub field: String,
    pub before: String,
    pub after: String,
    pub actor: String,
    pub origin: String,
    pub note: Option<String>,
}

/// Who is making a change and through which channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeContext {
    pub actor: String,
    pub origin: String,
    pub note: Option<String>,
}

impl ChangeContext {
    pub fn new(actor: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            origin: origin.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl Default for ChangeContext {
    fn default() -> Self {
        Self::new("system", "api")
    }
}
