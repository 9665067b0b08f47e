use chrono::NaiveDateTime;
use event_sheet_api::{AuditEntry, ChangeContext};

use crate::models::event::diff::FieldChange;
use crate::models::schema::audit_columns;
use crate::utils::timestamp::sortable_timestamp;

/// # Documentation
/// - One row of the audit sheet: a single field of a single event changing value.
/// - Rows are append-only; the sheet is never edited by this service after the append.
/// - `row` is the physical row of the event at the time of the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogModel {
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

impl AuditLogModel {
    pub fn new(
        timestamp: &str,
        key: &str,
        row: usize,
        field: &str,
        before: &str,
        after: &str,
        ctx: &ChangeContext,
    ) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            key: key.to_string(),
            row,
            field: field.to_string(),
            before: before.to_string(),
            after: after.to_string(),
            actor: ctx.actor.clone(),
            origin: ctx.origin.clone(),
            note: ctx.note.clone(),
        }
    }

    /// Audit row for a diffed base field, labeled with the column header.
    pub fn from_change(timestamp: &str, key: &str, row: usize, change: &FieldChange, ctx: &ChangeContext) -> Self {
        Self::new(timestamp, key, row, change.column.header, &change.before, &change.after, ctx)
    }

    /// Cells in audit sheet column order.
    pub fn to_cells(&self) -> Vec<String> {
        let mut cells = vec![String::new(); audit_columns::ALL.len()];
        cells[audit_columns::TIMESTAMP.index] = self.timestamp.clone();
        cells[audit_columns::KEY.index] = self.key.clone();
        cells[audit_columns::ROW.index] = self.row.to_string();
        cells[audit_columns::FIELD.index] = self.field.clone();
        cells[audit_columns::BEFORE.index] = self.before.clone();
        cells[audit_columns::AFTER.index] = self.after.clone();
        cells[audit_columns::ACTOR.index] = self.actor.clone();
        cells[audit_columns::ORIGIN.index] = self.origin.clone();
        cells[audit_columns::NOTE.index] = self.note.clone().unwrap_or_default();
        cells
    }

    /// Read an audit sheet row; missing cells are empty and a non-numeric row number reads as 0.
    pub fn from_cells(cells: &[String]) -> Self {
        let cell = |index: usize| cells.get(index).cloned().unwrap_or_default();
        let note = cell(audit_columns::NOTE.index);
        Self {
            timestamp: cell(audit_columns::TIMESTAMP.index),
            key: cell(audit_columns::KEY.index),
            row: cell(audit_columns::ROW.index).trim().parse().unwrap_or(0),
            field: cell(audit_columns::FIELD.index),
            before: cell(audit_columns::BEFORE.index),
            after: cell(audit_columns::AFTER.index),
            actor: cell(audit_columns::ACTOR.index),
            origin: cell(audit_columns::ORIGIN.index),
            note: (!note.is_empty()).then_some(note),
        }
    }

    /// Sort key; unparseable timestamps sort as the Unix epoch.
    pub fn sort_time(&self) -> NaiveDateTime {
        sortable_timestamp(&self.timestamp)
    }
}

/// Header row of the audit sheet.
pub fn audit_header() -> Vec<String> {
    audit_columns::ALL.iter().map(|column| column.header.to_string()).collect()
}

impl From<AuditLogModel> for AuditEntry {
    fn from(model: AuditLogModel) -> Self {
        AuditEntry {
            timestamp: model.timestamp,
            key: model.key,
            row: model.row,
            field: model.field,
            before: model.before,
            after: model.after,
            actor: model.actor,
            origin: model.origin,
            note: model.note,
        }
    }
}
