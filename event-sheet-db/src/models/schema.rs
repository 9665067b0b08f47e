//! Column layout of the events sheet and the audit sheet.
//!
//! Every position used anywhere in the workspace is read from the tables in this module.
//! The layout mirrors the live sheet: row 1 holds headers, data starts at row 2.
//!
//! ```text
//! A        id                      key
//! B..K     fechaCliente..canal     writable (leading block)
//! L..M     respuestaViaMail..      protected, filled by the mail automation
//! N..V     horarioInicioEvento..   writable (trailing block)
//! W        estado                  formula
//! X..AE    Observacion1..8         note text slots
//! AF..AM   FechaObservacion1..8    note timestamp slots
//! AN       comercialFinal          formula
//! AO       motivoRechazo           single-cell writes only
//! ```

/// Number of note slots attached to each event.
pub const NOTE_SLOT_COUNT: usize = 8;

/// Physical row of the header in both sheets.
pub const HEADER_ROW: usize = 1;

/// Physical row of the first data record.
pub const FIRST_DATA_ROW: usize = HEADER_ROW + 1;

/// Semantic fields of the base record, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    Id,
    FechaCliente,
    HoraCliente,
    Nombre,
    Telefono,
    Mail,
    Lugar,
    CantidadPersonas,
    Observacion,
    Redireccion,
    Canal,
    RespuestaViaMail,
    AsignacionComercialMail,
    HorarioInicioEvento,
    HorarioFinalizacionEvento,
    FechaEvento,
    Sector,
    VendedorComercialAsignado,
    MarcaTemporal,
    Demora,
    Presupuesto,
    FechaPresupEnviado,
    Estado,
}

/// Who may write a base column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAccess {
    /// External id, assigned downstream; blank on create, written back unchanged on update
    Key,
    /// Written by create and update
    Writable,
    /// Reserved for a downstream process, never written here
    Protected,
    /// Computed by a sheet formula, never written here
    Derived,
}

/// A base record column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub field: EventField,
    /// Field name used by callers (camelCase)
    pub name: &'static str,
    /// Human readable label, used for audit entries
    pub header: &'static str,
    pub index: usize,
    pub letter: &'static str,
    pub access: ColumnAccess,
}

impl ColumnDef {
    pub fn is_writable(&self) -> bool {
        self.access == ColumnAccess::Writable
    }
}

/// A single-purpose column outside the base record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColumn {
    pub name: &'static str,
    pub header: &'static str,
    pub index: usize,
    pub letter: &'static str,
}

/// An inclusive run of adjacent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub start: usize,
    pub end: usize,
}

impl ColumnSpan {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    /// Base columns covered by this span.
    pub fn base_columns(&self) -> &'static [ColumnDef] {
        &BASE_COLUMNS[self.start..=self.end]
    }
}

const fn base(
    field: EventField,
    name: &'static str,
    header: &'static str,
    index: usize,
    letter: &'static str,
    access: ColumnAccess,
) -> ColumnDef {
    ColumnDef { field, name, header, index, letter, access }
}

const fn named(name: &'static str, header: &'static str, index: usize, letter: &'static str) -> NamedColumn {
    NamedColumn { name, header, index, letter }
}

use ColumnAccess::{Derived, Key, Protected, Writable};
use EventField as F;

/// Base record columns, positions 0..=22. `BASE_COLUMNS[i].index == i`.
pub const BASE_COLUMNS: [ColumnDef; 23] = [
    base(F::Id, "id", "Id", 0, "A", Key),
    base(F::FechaCliente, "fechaCliente", "Fecha Cliente", 1, "B", Writable),
    base(F::HoraCliente, "horaCliente", "Hora Cliente", 2, "C", Writable),
    base(F::Nombre, "nombre", "Nombre", 3, "D", Writable),
    base(F::Telefono, "telefono", "Telefono", 4, "E", Writable),
    base(F::Mail, "mail", "Mail", 5, "F", Writable),
    base(F::Lugar, "lugar", "Lugar", 6, "G", Writable),
    base(F::CantidadPersonas, "cantidadPersonas", "Cantidad Personas", 7, "H", Writable),
    base(F::Observacion, "observacion", "Observacion", 8, "I", Writable),
    base(F::Redireccion, "redireccion", "Redireccion", 9, "J", Writable),
    base(F::Canal, "canal", "Canal", 10, "K", Writable),
    base(F::RespuestaViaMail, "respuestaViaMail", "Respuesta Via Mail", 11, "L", Protected),
    base(F::AsignacionComercialMail, "asignacionComercialMail", "Asignacion Comercial Mail", 12, "M", Protected),
    base(F::HorarioInicioEvento, "horarioInicioEvento", "Horario Inicio Evento", 13, "N", Writable),
    base(F::HorarioFinalizacionEvento, "horarioFinalizacionEvento", "Horario Finalizacion Evento", 14, "O", Writable),
    base(F::FechaEvento, "fechaEvento", "Fecha Evento", 15, "P", Writable),
    base(F::Sector, "sector", "Sector", 16, "Q", Writable),
    base(F::VendedorComercialAsignado, "vendedorComercialAsignado", "Vendedor Comercial Asignado", 17, "R", Writable),
    base(F::MarcaTemporal, "marcaTemporal", "Marca Temporal", 18, "S", Writable),
    base(F::Demora, "demora", "Demora", 19, "T", Writable),
    base(F::Presupuesto, "presupuesto", "Presupuesto", 20, "U", Writable),
    base(F::FechaPresupEnviado, "fechaPresupEnviado", "Fecha Presup Enviado", 21, "V", Writable),
    base(F::Estado, "estado", "Estado", 22, "W", Derived),
];

/// Note text slots, positions 23..=30.
pub const NOTE_TEXT_COLUMNS: [NamedColumn; NOTE_SLOT_COUNT] = [
    named("Observacion1", "Observacion 1", 23, "X"),
    named("Observacion2", "Observacion 2", 24, "Y"),
    named("Observacion3", "Observacion 3", 25, "Z"),
    named("Observacion4", "Observacion 4", 26, "AA"),
    named("Observacion5", "Observacion 5", 27, "AB"),
    named("Observacion6", "Observacion 6", 28, "AC"),
    named("Observacion7", "Observacion 7", 29, "AD"),
    named("Observacion8", "Observacion 8", 30, "AE"),
];

/// Note timestamp slots, positions 31..=38, index-aligned with `NOTE_TEXT_COLUMNS`.
pub const NOTE_TIMESTAMP_COLUMNS: [NamedColumn; NOTE_SLOT_COUNT] = [
    named("FechaObservacion1", "Fecha Observacion 1", 31, "AF"),
    named("FechaObservacion2", "Fecha Observacion 2", 32, "AG"),
    named("FechaObservacion3", "Fecha Observacion 3", 33, "AH"),
    named("FechaObservacion4", "Fecha Observacion 4", 34, "AI"),
    named("FechaObservacion5", "Fecha Observacion 5", 35, "AJ"),
    named("FechaObservacion6", "Fecha Observacion 6", 36, "AK"),
    named("FechaObservacion7", "Fecha Observacion 7", 37, "AL"),
    named("FechaObservacion8", "Fecha Observacion 8", 38, "AM"),
];

/// Formula-computed commercial owner.
pub const DERIVED_COLUMN: NamedColumn = named("ComercialFinal", "Comercial Final", 39, "AN");

/// Free text reason recorded when an event is rejected.
pub const REJECTION_REASON_COLUMN: NamedColumn = named("motivoRechazo", "Motivo Rechazo", 40, "AO");

/// Key column.
pub const KEY_COLUMN: ColumnDef = BASE_COLUMNS[0];

/// Status column. Marked `Derived`: the service never writes it.
pub const STATUS_COLUMN: ColumnDef = BASE_COLUMNS[22];

/// First range written on create and update, `A..K`.
pub const LEADING_WRITE_SPAN: ColumnSpan = ColumnSpan::new(0, 10);

/// Downstream-only block between the two write ranges, `L..M`.
pub const PROTECTED_SPAN: ColumnSpan = ColumnSpan::new(11, 12);

/// Second range written on create and update, `N..V`.
pub const TRAILING_WRITE_SPAN: ColumnSpan = ColumnSpan::new(13, 21);

/// Every column read for a record, `A..AO`.
pub const FULL_ROW_SPAN: ColumnSpan = ColumnSpan::new(0, REJECTION_REASON_COLUMN.index);

/// Note text and timestamp slots, `X..AM`.
pub const NOTE_SPAN: ColumnSpan = ColumnSpan::new(
    NOTE_TEXT_COLUMNS[0].index,
    NOTE_TIMESTAMP_COLUMNS[NOTE_SLOT_COUNT - 1].index,
);

/// Column definition of a base field.
pub fn base_column(field: EventField) -> &'static ColumnDef {
    &BASE_COLUMNS[field as usize]
}

/// Audit sheet columns, in write order.
pub mod audit_columns {
    use super::{named, ColumnSpan, NamedColumn};

    pub const TIMESTAMP: NamedColumn = named("timestamp", "Fecha", 0, "A");
    pub const KEY: NamedColumn = named("key", "Id", 1, "B");
    pub const ROW: NamedColumn = named("row", "Fila", 2, "C");
    pub const FIELD: NamedColumn = named("field", "Campo", 3, "D");
    pub const BEFORE: NamedColumn = named("before", "Antes", 4, "E");
    pub const AFTER: NamedColumn = named("after", "Despues", 5, "F");
    pub const ACTOR: NamedColumn = named("actor", "Usuario", 6, "G");
    pub const ORIGIN: NamedColumn = named("origin", "Origen", 7, "H");
    pub const NOTE: NamedColumn = named("note", "Nota", 8, "I");

    pub const ALL: [NamedColumn; 9] = [TIMESTAMP, KEY, ROW, FIELD, BEFORE, AFTER, ACTOR, ORIGIN, NOTE];

    pub const SPAN: ColumnSpan = ColumnSpan::new(0, 8);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::a1::column_letter;

    #[test]
    fn test_base_columns_are_positional() {
        for (i, column) in BASE_COLUMNS.iter().enumerate() {
            assert_eq!(column.index, i);
            assert_eq!(column.field as usize, i);
            assert_eq!(column.letter, column_letter(i));
        }
    }

    #[test]
    fn test_named_column_letters_match_positions() {
        let extra = [DERIVED_COLUMN, REJECTION_REASON_COLUMN];
        for column in NOTE_TEXT_COLUMNS.iter().chain(NOTE_TIMESTAMP_COLUMNS.iter()).chain(extra.iter()) {
            assert_eq!(column.letter, column_letter(column.index), "{}", column.name);
        }
        for (text, stamp) in NOTE_TEXT_COLUMNS.iter().zip(NOTE_TIMESTAMP_COLUMNS.iter()) {
            assert_eq!(stamp.index, text.index + NOTE_SLOT_COUNT);
        }
        for column in audit_columns::ALL.iter() {
            assert_eq!(column.letter, column_letter(column.index));
        }
    }

    #[test]
    fn test_write_spans_never_cover_protected_or_derived_columns() {
        for span in [LEADING_WRITE_SPAN, TRAILING_WRITE_SPAN] {
            for column in span.base_columns() {
                assert!(
                    matches!(column.access, ColumnAccess::Key | ColumnAccess::Writable),
                    "{} must not be inside a write span",
                    column.name
                );
            }
        }
        for column in PROTECTED_SPAN.base_columns() {
            assert_eq!(column.access, ColumnAccess::Protected);
        }
        assert_eq!(LEADING_WRITE_SPAN.end + 1, PROTECTED_SPAN.start);
        assert_eq!(PROTECTED_SPAN.end + 1, TRAILING_WRITE_SPAN.start);
        assert!(!TRAILING_WRITE_SPAN.contains(STATUS_COLUMN.index));
    }

    #[test]
    fn test_every_writable_column_is_inside_a_write_span() {
        for column in BASE_COLUMNS.iter().filter(|c| c.is_writable()) {
            assert!(LEADING_WRITE_SPAN.contains(column.index) || TRAILING_WRITE_SPAN.contains(column.index));
        }
    }

    #[test]
    fn test_full_row_span_covers_every_named_column() {
        assert_eq!(FULL_ROW_SPAN.len(), 41);
        assert!(FULL_ROW_SPAN.contains(DERIVED_COLUMN.index));
        assert_eq!(NOTE_SPAN.len(), NOTE_SLOT_COUNT * 2);
        assert_eq!(base_column(EventField::Estado).access, ColumnAccess::Derived);
    }
}
