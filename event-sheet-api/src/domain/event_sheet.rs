use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ApiError, ApiResult};

/// Largest value a single sheet cell accepts.
pub const MAX_CELL_CHARS: usize = 50_000;

/// Character some clients prepend to path identifiers (`/events/:7`).
pub const KEY_SENTINEL: char = ':';

/// # Documentation
/// - One booking row of the events sheet as seen by callers.
/// - `id` is assigned by a downstream process and is empty right after creation.
/// - `estado` and `ComercialFinal` are computed by sheet formulas and never written by this service.
/// - `observaciones_list` holds the filled note slots, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSheet {
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
    #[serde(rename = "ComercialFinal")]
    pub comercial_final: String,
    pub motivo_rechazo: String,
    pub observaciones_list: Vec<String>,
}

/// Caller supplied fields for create and update.
///
/// Every field is optional: on create a missing field is written as an empty cell,
/// on update a missing field keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct EventSheetInput {
    #[validate(length(max = 50000))]
    pub fecha_cliente: Option<String>,
    #[validate(length(max = 50000))]
    pub hora_cliente: Option<String>,
    #[validate(length(max = 50000))]
    pub nombre: Option<String>,
    #[validate(length(max = 50000))]
    pub telefono: Option<String>,
    #[validate(length(max = 50000))]
    pub mail: Option<String>,
    #[validate(length(max = 50000))]
    pub lugar: Option<String>,
    #[validate(length(max = 50000))]
    pub cantidad_personas: Option<String>,
    #[validate(length(max = 50000))]
    pub observacion: Option<String>,
    #[validate(length(max = 50000))]
    pub redireccion: Option<String>,
    #[validate(length(max = 50000))]
    pub canal: Option<String>,
    #[validate(length(max = 50000))]
    pub respuesta_via_mail: Option<String>,
    #[validate(length(max = 50000))]
    pub asignacion_comercial_mail: Option<String>,
    #[validate(length(max = 50000))]
    pub horario_inicio_evento: Option<String>,
    #[validate(length(max = 50000))]
    pub horario_finalizacion_evento: Option<String>,
    #[validate(length(max = 50000))]
    pub fecha_evento: Option<String>,
    #[validate(length(max = 50000))]
    pub sector: Option<String>,
    #[validate(length(max = 50000))]
    pub vendedor_comercial_asignado: Option<String>,
    #[validate(length(max = 50000))]
    pub marca_temporal: Option<String>,
    #[validate(length(max = 50000))]
    pub demora: Option<String>,
    #[validate(length(max = 50000))]
    pub presupuesto: Option<String>,
    #[validate(length(max = 50000))]
    pub fecha_presup_enviado: Option<String>,
    #[validate(length(max = 50000))]
    pub estado: Option<String>,
}

impl EventSheetInput {
    /// True when at least one field carries a non-blank value.
    pub fn has_any_value(&self) -> bool {
        [
            &self.fecha_cliente,
            &self.hora_cliente,
            &self.nombre,
            &self.telefono,
            &self.mail,
            &self.lugar,
            &self.cantidad_personas,
            &self.observacion,
            &self.redireccion,
            &self.canal,
            &self.respuesta_via_mail,
            &self.asignacion_comercial_mail,
            &self.horario_inicio_evento,
            &self.horario_finalizacion_evento,
            &self.fecha_evento,
            &self.sector,
            &self.vendedor_comercial_asignado,
            &self.marca_temporal,
            &self.demora,
            &self.presupuesto,
            &self.fecha_presup_enviado,
            &self.estado,
        ]
        .iter()
        .any(|value| value.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}

/// Strip the leading sentinel from a caller supplied key and reject blank keys.
///
/// The rest of the key is kept as given; lookups compare it exactly against the stored cell.
pub fn normalize_key(raw: &str) -> ApiResult<String> {
    let key = raw.strip_prefix(KEY_SENTINEL).unwrap_or(raw);
    if key.trim().is_empty() {
        return Err(ApiError::ValidationError("event id is required".to_string()));
    }
    Ok(key.to_string())
}
