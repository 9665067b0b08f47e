use serde::{Deserialize, Serialize};
use validator::Validate;

/// One filled note slot of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// 1-based slot number, also the fill order
    pub slot: usize,
    pub text: String,
    pub timestamp: String,
}

/// Result of a successful note addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedNote {
    pub slot: usize,
    /// Sheet header of the slot that received the text, e.g. `Observacion3`
    pub used_key: String,
    pub timestamp: String,
}

/// Request body for adding a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewNote {
    #[validate(length(min = 1, max = 50000, message = "note text is required"))]
    pub texto: String,
}

impl NewNote {
    pub fn new(texto: impl Into<String>) -> Self {
        Self {
            texto: texto.into().trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_trims_before_validation() {
        assert!(NewNote::new("  Llamó el cliente ").validate().is_ok());
        assert_eq!(NewNote::new("  hola ").texto, "hola");
        assert!(NewNote::new("   ").validate().is_err());
    }
}
