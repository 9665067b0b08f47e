use crate::models::event::event::EventModel;
use crate::models::schema::{ColumnDef, BASE_COLUMNS};

/// A writable field whose value differs between two versions of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub column: &'static ColumnDef,
    pub before: String,
    pub after: String,
}

/// Field-level diff over the writable columns only.
///
/// Key, protected and derived columns are skipped: they are never written by an update,
/// so a difference there is not a change this service made.
pub fn diff_writable(before: &EventModel, after: &EventModel) -> Vec<FieldChange> {
    BASE_COLUMNS
        .iter()
        .filter(|column| column.is_writable())
        .filter_map(|column| {
            let old = before.get(column.field);
            let new = after.get(column.field);
            (old != new).then(|| FieldChange {
                column,
                before: old.to_string(),
                after: new.to_string(),
            })
        })
        .collect()
}

/// Changes recorded when a record is created: every non-empty writable field, from empty.
pub fn creation_changes(created: &EventModel) -> Vec<FieldChange> {
    diff_writable(&EventModel::default(), created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::EventField;

    #[test]
    fn test_equal_values_produce_no_change() {
        let before = EventModel {
            nombre: "Ana".to_string(),
            ..Default::default()
        };
        let after = before.clone();
        assert!(diff_writable(&before, &after).is_empty());
    }

    #[test]
    fn test_reports_changed_writable_fields_in_column_order() {
        let before = EventModel {
            nombre: "Ana".to_string(),
            ..Default::default()
        };
        let mut after = before.clone();
        after.presupuesto = "1000".to_string();
        after.nombre = "Ana María".to_string();

        let changes = diff_writable(&before, &after);
        let fields: Vec<EventField> = changes.iter().map(|c| c.column.field).collect();
        assert_eq!(fields, vec![EventField::Nombre, EventField::Presupuesto]);
        assert_eq!(changes[0].before, "Ana");
        assert_eq!(changes[0].after, "Ana María");
    }

    #[test]
    fn test_ignores_non_writable_columns() {
        let before = EventModel::default();
        let after = EventModel {
            id: "7".to_string(),
            estado: "Confirmado".to_string(),
            respuesta_via_mail: "si".to_string(),
            comercial_final: "Laura".to_string(),
            motivo_rechazo: "precio".to_string(),
            ..Default::default()
        };
        assert!(diff_writable(&before, &after).is_empty());
    }

    #[test]
    fn test_creation_changes_skip_empty_fields() {
        let created = EventModel {
            nombre: "Ana".to_string(),
            mail: "ana@example.com".to_string(),
            ..Default::default()
        };
        let changes = creation_changes(&created);
        assert_eq!(changes.len(), 2);
        assert!(changes.iter().all(|c| c.before.is_empty()));
    }
}
