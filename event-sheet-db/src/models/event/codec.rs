use crate::models::event::event::EventModel;
use crate::models::event::note_slots::NoteSlots;
use crate::models::schema::{
    ColumnAccess, ColumnSpan, BASE_COLUMNS, DERIVED_COLUMN, LEADING_WRITE_SPAN, REJECTION_REASON_COLUMN,
    TRAILING_WRITE_SPAN,
};

/// Values for one contiguous write range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanValues {
    pub span: ColumnSpan,
    pub values: Vec<String>,
}

/// The two ranges a record is written through. The protected block sits between them and
/// the status column after them; neither is ever part of a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRow {
    pub leading: SpanValues,
    pub trailing: SpanValues,
}

fn cell(cells: &[String], index: usize) -> String {
    cells.get(index).cloned().unwrap_or_default()
}

/// Decode a raw sheet row. Cells past the end of `cells` decode as empty strings.
pub fn decode_row(row_number: usize, cells: &[String]) -> EventModel {
    let mut model = EventModel {
        row_number,
        comercial_final: cell(cells, DERIVED_COLUMN.index),
        motivo_rechazo: cell(cells, REJECTION_REASON_COLUMN.index),
        notes: NoteSlots::from_row_cells(cells),
        ..Default::default()
    };
    for column in BASE_COLUMNS.iter() {
        model.set(column.field, cell(cells, column.index));
    }
    model
}

/// Encode the writable columns of `model`, writing `key` into the key column.
///
/// Pass an empty key on create so the downstream process can assign one.
pub fn encode_row(model: &EventModel, key: &str) -> EncodedRow {
    EncodedRow {
        leading: encode_span(model, key, LEADING_WRITE_SPAN),
        trailing: encode_span(model, key, TRAILING_WRITE_SPAN),
    }
}

fn encode_span(model: &EventModel, key: &str, span: ColumnSpan) -> SpanValues {
    let values = span
        .base_columns()
        .iter()
        .map(|column| match column.access {
            ColumnAccess::Key => key.to_string(),
            _ => model.get(column.field).to_string(),
        })
        .collect();
    SpanValues { span, values }
}
