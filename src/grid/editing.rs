//! In-place cell editing.
//!
//! The session keeps the editor's current text (`draft`) so a commit can
//! happen from any entry point: a key press, a click elsewhere, a scroll.

use super::GridState;
use crate::damage::Damage;
use crate::history::Command;
use crate::selection::Direction;

/// An open editor over one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub row: u32,
    pub col: u32,
    /// Cell value when the editor opened.
    pub initial: String,
    /// Text currently in the editor.
    pub draft: String,
}

impl EditSession {
    pub fn is_modified(&self) -> bool {
        self.draft != self.initial
    }
}

impl GridState {
    /// Open an editor on the selected cell. A typed `seed` replaces the
    /// value. Refused unless exactly one cell is selected; an already open
    /// editor is returned as is.
    pub fn begin_edit(&mut self, seed: Option<String>) -> Option<&EditSession> {
        if self.edit.is_none() {
            let Some((row, col)) = self.selection.editable_cell() else {
                log::debug!("edit refused: selection is not a single cell");
                return None;
            };
            let initial = self.store.value(row, col).to_string();
            self.edit = Some(EditSession {
                row,
                col,
                draft: seed.unwrap_or_else(|| initial.clone()),
                initial,
            });
            // The tile stops painting the text under the editor.
            self.mark(Damage::cell(row, col));
        }
        self.edit.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Mirror the editor's text.
    pub fn set_edit_text(&mut self, text: &str) {
        if let Some(session) = self.edit.as_mut() {
            session.draft.clear();
            session.draft.push_str(text);
        }
    }

    /// Close the editor, writing the draft if it changed, then optionally
    /// move the selection. Returns whether a command was recorded.
    pub fn commit_edit(&mut self, advance: Option<Direction>) -> bool {
        let Some(session) = self.edit.take() else {
            return false;
        };
        let recorded = if session.is_modified() {
            let command = Command::edit_cell(self, session.row, session.col, &session.draft);
            self.execute(command)
        } else {
            self.mark(Damage::cell(session.row, session.col));
            false
        };
        if let Some(direction) = advance {
            self.update_selection(|m| m.move_focus(direction));
        }
        recorded
    }

    /// Close the editor without writing.
    pub fn cancel_edit(&mut self) -> bool {
        match self.edit.take() {
            Some(session) => {
                self.mark(Damage::cell(session.row, session.col));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn state() -> GridState {
        GridState::new(GridConfig {
            total_rows: 50,
            total_cols: 10,
            ..GridConfig::default()
        })
    }

    #[test]
    fn commit_writes_and_advances() {
        let mut state = state();
        state.store.set(1, 1, "old");
        state.update_selection(|m| m.select_cell(1, 1));
        assert_eq!(state.begin_edit(None).unwrap().draft, "old");
        state.set_edit_text("new");
        assert!(state.commit_edit(Some(Direction::Down)));
        assert_eq!(state.store.value(1, 1), "new");
        assert_eq!(state.selection.editable_cell(), Some((2, 1)));
        assert!(!state.is_editing());
    }

    #[test]
    fn unchanged_commit_records_nothing() {
        let mut state = state();
        state.begin_edit(None);
        assert!(!state.commit_edit(None));
        assert!(!state.history.can_undo());
    }

    #[test]
    fn seed_replaces_text() {
        let mut state = state();
        state.store.set(0, 0, "keep");
        assert_eq!(state.begin_edit(Some("x".into())).unwrap().draft, "x");
        assert!(state.cancel_edit());
        assert_eq!(state.store.value(0, 0), "keep");
    }

    #[test]
    fn refused_on_range() {
        let mut state = state();
        state.update_selection(|m| {
            m.select_cell(0, 0);
            m.extend_to(3, 3);
        });
        assert!(state.begin_edit(None).is_none());
        assert!(!state.cancel_edit());
    }
}
