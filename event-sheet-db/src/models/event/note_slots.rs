use event_sheet_api::Note;

use crate::models::schema::{NOTE_SLOT_COUNT, NOTE_TEXT_COLUMNS, NOTE_TIMESTAMP_COLUMNS};

/// One (text, timestamp) cell pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteSlot {
    pub text: String,
    pub timestamp: String,
}

impl NoteSlot {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// # Documentation
/// - The fixed note slots of one event, index 0 is `Observacion1`.
/// - Slots are filled in ascending order and never cleared, so the filled slots form a prefix.
/// - Display order is the reverse of fill order: the highest filled slot is the most recent note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteSlots {
    slots: [NoteSlot; NOTE_SLOT_COUNT],
}

impl NoteSlots {
    /// Read the slot columns out of a full sheet row; missing trailing cells are empty.
    pub fn from_row_cells(cells: &[String]) -> Self {
        let mut slots: [NoteSlot; NOTE_SLOT_COUNT] = Default::default();
        for (slot, (text_col, stamp_col)) in slots
            .iter_mut()
            .zip(NOTE_TEXT_COLUMNS.iter().zip(NOTE_TIMESTAMP_COLUMNS.iter()))
        {
            slot.text = cells.get(text_col.index).map(|c| c.trim().to_string()).unwrap_or_default();
            slot.timestamp = cells.get(stamp_col.index).map(|c| c.trim().to_string()).unwrap_or_default();
        }
        Self { slots }
    }

    pub fn get(&self, index: usize) -> Option<&NoteSlot> {
        self.slots.get(index)
    }

    /// Zero-based index of the first empty slot, scanning upward.
    ///
    /// A row edited by hand can have a hole (an empty slot below a filled one). The hole is
    /// still the first empty slot and is returned; the anomaly is logged.
    pub fn first_empty(&self) -> Option<usize> {
        let first = self.slots.iter().position(NoteSlot::is_empty)?;
        if self.slots[first..].iter().any(|slot| !slot.is_empty()) {
            tracing::warn!(slot = first + 1, "note slots are not a filled prefix");
        }
        Some(first)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Record a note in slot `index`. The caller is expected to pick `first_empty()`.
    pub fn fill(&mut self, index: usize, text: &str, timestamp: &str) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.text = text.to_string();
            slot.timestamp = timestamp.to_string();
        }
    }

    /// Filled slots, most recent (highest slot) first.
    pub fn most_recent_first(&self) -> Vec<Note> {
        self.slots
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, slot)| !slot.is_empty())
            .map(|(index, slot)| Note {
                slot: index + 1,
                text: slot.text.clone(),
                timestamp: slot.timestamp.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_with_notes(texts: &[&str]) -> Vec<String> {
        let mut cells = vec![String::new(); NOTE_TIMESTAMP_COLUMNS[NOTE_SLOT_COUNT - 1].index + 1];
        for (i, text) in texts.iter().enumerate() {
            cells[NOTE_TEXT_COLUMNS[i].index] = text.to_string();
            cells[NOTE_TIMESTAMP_COLUMNS[i].index] = format!("0{}/01/2025 10:00:00", i + 1);
        }
        cells
    }

    #[test]
    fn test_first_empty_follows_filled_prefix() {
        for filled in 0..NOTE_SLOT_COUNT {
            let texts: Vec<String> = (1..=filled).map(|i| format!("nota {i}")).collect();
            let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
            let slots = NoteSlots::from_row_cells(&row_with_notes(&refs));
            assert_eq!(slots.first_empty(), Some(filled));
            assert_eq!(slots.filled_count(), filled);
        }
    }

    #[test]
    fn test_full_slots_have_no_empty_index() {
        let texts = ["1", "2", "3", "4", "5", "6", "7", "8"];
        let slots = NoteSlots::from_row_cells(&row_with_notes(&texts));
        assert!(slots.is_full());
        assert_eq!(slots.first_empty(), None);
    }

    #[test]
    fn test_most_recent_first_reverses_slot_order() {
        let texts = ["1", "2", "3", "4", "5", "6", "7", "8"];
        let slots = NoteSlots::from_row_cells(&row_with_notes(&texts));
        let order: Vec<usize> = slots.most_recent_first().iter().map(|n| n.slot).collect();
        assert_eq!(order, vec![8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(slots.most_recent_first()[0].text, "8");
    }

    #[test]
    fn test_short_row_decodes_to_empty_slots() {
        let slots = NoteSlots::from_row_cells(&["7".to_string(), "Ana".to_string()]);
        assert_eq!(slots.first_empty(), Some(0));
        assert!(slots.most_recent_first().is_empty());
    }

    #[test]
    fn test_whitespace_only_slot_counts_as_empty() {
        let mut cells = row_with_notes(&["primera"]);
        cells[NOTE_TEXT_COLUMNS[1].index] = "   ".to_string();
        let slots = NoteSlots::from_row_cells(&cells);
        assert_eq!(slots.first_empty(), Some(1));
    }

    #[test]
    fn test_hole_is_reused_first() {
        let mut cells = row_with_notes(&["a", "b", "c"]);
        cells[NOTE_TEXT_COLUMNS[1].index].clear();
        let mut slots = NoteSlots::from_row_cells(&cells);
        assert_eq!(slots.first_empty(), Some(1));
        slots.fill(1, "nueva", "02/02/2025 10:00:00");
        assert_eq!(slots.first_empty(), Some(3));
    }
}
