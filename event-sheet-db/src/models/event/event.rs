use event_sheet_api::{EventSheet, EventSheetInput};

use crate::models::event::note_slots::NoteSlots;
use crate::models::schema::{base_column, ColumnAccess, EventField, BASE_COLUMNS};

/// # Documentation
/// - One decoded row of the events sheet.
/// - `row_number` is the physical sheet row the values were read from (0 when not yet written).
///   It is valid only for the request that read it: rows shift when the sheet is edited.
/// - `comercial_final` is formula output and `motivo_rechazo` has its own single-cell write path;
///   neither takes part in the base record diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventModel {
    pub row_number: usize,

    pub id: String,
    pub fecha_cliente: String,
    pub hora_cliente: String,
    pub nombre: String,
    pub telefono: String,
    pub mail: String,
    pub lugar: String,
    pub cantidad_personas: String,
    pub observacion: String,
    pub redireccion: String,
    pub canal: String,
    pub respuesta_via_mail: String,
    pub asignacion_comercial_mail: String,
    pub horario_inicio_evento: String,
    pub horario_finalizacion_evento: String,
    pub fecha_evento: String,
    pub sector: String,
    pub vendedor_comercial_asignado: String,
    pub marca_temporal: String,
    pub demora: String,
    pub presupuesto: String,
    pub fecha_presup_enviado: String,
    pub estado: String,

    pub comercial_final: String,
    pub motivo_rechazo: String,
    pub notes: NoteSlots,
}

impl EventModel {
    pub fn get(&self, field: EventField) -> &str {
        match field {
            EventField::Id => &self.id,
            EventField::FechaCliente => &self.fecha_cliente,
            EventField::HoraCliente => &self.hora_cliente,
            EventField::Nombre => &self.nombre,
            EventField::Telefono => &self.telefono,
            EventField::Mail => &self.mail,
            EventField::Lugar => &self.lugar,
            EventField::CantidadPersonas => &self.cantidad_personas,
            EventField::Observacion => &self.observacion,
            EventField::Redireccion => &self.redireccion,
            EventField::Canal => &self.canal,
            EventField::RespuestaViaMail => &self.respuesta_via_mail,
            EventField::AsignacionComercialMail => &self.asignacion_comercial_mail,
            EventField::HorarioInicioEvento => &self.horario_inicio_evento,
            EventField::HorarioFinalizacionEvento => &self.horario_finalizacion_evento,
            EventField::FechaEvento => &self.fecha_evento,
            EventField::Sector => &self.sector,
            EventField::VendedorComercialAsignado => &self.vendedor_comercial_asignado,
            EventField::MarcaTemporal => &self.marca_temporal,
            EventField::Demora => &self.demora,
            EventField::Presupuesto => &self.presupuesto,
            EventField::FechaPresupEnviado => &self.fecha_presup_enviado,
            EventField::Estado => &self.estado,
        }
    }

    pub fn set(&mut self, field: EventField, value: String) {
        let slot = match field {
            EventField::Id => &mut self.id,
            EventField::FechaCliente => &mut self.fecha_cliente,
            EventField::HoraCliente => &mut self.hora_cliente,
            EventField::Nombre => &mut self.nombre,
            EventField::Telefono => &mut self.telefono,
            EventField::Mail => &mut self.mail,
            EventField::Lugar => &mut self.lugar,
            EventField::CantidadPersonas => &mut self.cantidad_personas,
            EventField::Observacion => &mut self.observacion,
            EventField::Redireccion => &mut self.redireccion,
            EventField::Canal => &mut self.canal,
            EventField::RespuestaViaMail => &mut self.respuesta_via_mail,
            EventField::AsignacionComercialMail => &mut self.asignacion_comercial_mail,
            EventField::HorarioInicioEvento => &mut self.horario_inicio_evento,
            EventField::HorarioFinalizacionEvento => &mut self.horario_finalizacion_evento,
            EventField::FechaEvento => &mut self.fecha_evento,
            EventField::Sector => &mut self.sector,
            EventField::VendedorComercialAsignado => &mut self.vendedor_comercial_asignado,
            EventField::MarcaTemporal => &mut self.marca_temporal,
            EventField::Demora => &mut self.demora,
            EventField::Presupuesto => &mut self.presupuesto,
            EventField::FechaPresupEnviado => &mut self.fecha_presup_enviado,
            EventField::Estado => &mut self.estado,
        };
        *slot = value;
    }

    /// New, not yet written record built from create input.
    ///
    /// Returns the record and the fields the caller supplied but may not write.
    pub fn from_input(input: &EventSheetInput) -> (Self, Vec<EventField>) {
        let mut model = EventModel::default();
        let ignored = model.apply_input(input);
        (model, ignored)
    }

    /// Shallow merge of `input` over this record.
    ///
    /// Only `Writable` columns are taken from the input. Values supplied for key, protected or
    /// derived columns are dropped and reported back when they differ from the stored value.
    pub fn apply_input(&mut self, input: &EventSheetInput) -> Vec<EventField> {
        let mut ignored = Vec::new();
        for column in BASE_COLUMNS.iter() {
            let Some(value) = input_value(input, column.field) else {
                continue;
            };
            if column.access == ColumnAccess::Writable {
                self.set(column.field, value.clone());
            } else if value != self.get(column.field) {
                ignored.push(column.field);
            }
        }
        ignored
    }

    /// Stamp timestamps that record the first time a schedule or a budget was set.
    ///
    /// - `marcaTemporal` gets `now` when it is empty and this change introduces a start or end time.
    /// - `fechaPresupEnviado` gets `now` when it is empty and this change sets a non-empty budget.
    ///
    /// `before` is the record as stored; returns the stamped fields.
    pub fn stamp_first_time_fields(&mut self, before: &EventModel, now: &str) -> Vec<EventField> {
        let mut stamped = Vec::new();

        let schedule_introduced = [EventField::HorarioInicioEvento, EventField::HorarioFinalizacionEvento]
            .into_iter()
            .any(|field| introduces_value(before, self, field));
        if schedule_introduced && is_blank(&before.marca_temporal) && is_blank(&self.marca_temporal) {
            self.marca_temporal = now.to_string();
            stamped.push(EventField::MarcaTemporal);
        }

        if introduces_value(before, self, EventField::Presupuesto)
            && is_blank(&before.fecha_presup_enviado)
            && is_blank(&self.fecha_presup_enviado)
        {
            self.fecha_presup_enviado = now.to_string();
            stamped.push(EventField::FechaPresupEnviado);
        }

        stamped
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn introduces_value(before: &EventModel, after: &EventModel, field: EventField) -> bool {
    let value = after.get(field);
    !is_blank(value) && value != before.get(field)
}

/// Value the caller supplied for a base field, if any.
pub fn input_value(input: &EventSheetInput, field: EventField) -> Option<&String> {
    match field {
        EventField::Id => None,
        EventField::FechaCliente => input.fecha_cliente.as_ref(),
        EventField::HoraCliente => input.hora_cliente.as_ref(),
        EventField::Nombre => input.nombre.as_ref(),
        EventField::Telefono => input.telefono.as_ref(),
        EventField::Mail => input.mail.as_ref(),
        EventField::Lugar => input.lugar.as_ref(),
        EventField::CantidadPersonas => input.cantidad_personas.as_ref(),
        EventField::Observacion => input.observacion.as_ref(),
        EventField::Redireccion => input.redireccion.as_ref(),
        EventField::Canal => input.canal.as_ref(),
        EventField::RespuestaViaMail => input.respuesta_via_mail.as_ref(),
        EventField::AsignacionComercialMail => input.asignacion_comercial_mail.as_ref(),
        EventField::HorarioInicioEvento => input.horario_inicio_evento.as_ref(),
        EventField::HorarioFinalizacionEvento => input.horario_finalizacion_evento.as_ref(),
        EventField::FechaEvento => input.fecha_evento.as_ref(),
        EventField::Sector => input.sector.as_ref(),
        EventField::VendedorComercialAsignado => input.vendedor_comercial_asignado.as_ref(),
        EventField::MarcaTemporal => input.marca_temporal.as_ref(),
        EventField::Demora => input.demora.as_ref(),
        EventField::Presupuesto => input.presupuesto.as_ref(),
        EventField::FechaPresupEnviado => input.fecha_presup_enviado.as_ref(),
        EventField::Estado => input.estado.as_ref(),
    }
}

/// Names of fields, for log lines.
pub fn field_names(fields: &[EventField]) -> Vec<&'static str> {
    fields.iter().map(|field| base_column(*field).name).collect()
}

impl From<EventModel> for EventSheet {
    fn from(model: EventModel) -> Self {
        let observaciones_list = model
            .notes
            .most_recent_first()
            .into_iter()
            .map(|note| note.text)
            .collect();
        EventSheet {
            id: model.id,
            fecha_cliente: model.fecha_cliente,
            hora_cliente: model.hora_cliente,
            nombre: model.nombre,
            telefono: model.telefono,
            mail: model.mail,
            lugar: model.lugar,
            cantidad_personas: model.cantidad_personas,
            observacion: model.observacion,
            redireccion: model.redireccion,
            canal: model.canal,
            respuesta_via_mail: model.respuesta_via_mail,
            asignacion_comercial_mail: model.asignacion_comercial_mail,
            horario_inicio_evento: model.horario_inicio_evento,
            horario_finalizacion_evento: model.horario_finalizacion_evento,
            fecha_evento: model.fecha_evento,
            sector: model.sector,
            vendedor_comercial_asignado: model.vendedor_comercial_asignado,
            marca_temporal: model.marca_temporal,
            demora: model.demora,
            presupuesto: model.presupuesto,
            fecha_presup_enviado: model.fecha_presup_enviado,
            estado: model.estado,
            comercial_final: model.comercial_final,
            motivo_rechazo: model.motivo_rechazo,
            observaciones_list,
        }
    }
}
