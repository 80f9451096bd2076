//! Key-to-action mapping.
//!
//! Pure so the browser shell only has to translate `KeyboardEvent`s.

use crate::selection::Direction;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInput {
    /// `KeyboardEvent.key` value, e.g. `"ArrowDown"` or `"a"`.
    pub key: String,
    pub shift: bool,
    /// Ctrl or Cmd.
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyInput {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Move(Direction),
    Extend(Direction),
    /// Commit the open editor, then optionally move the selection.
    CommitEdit(Option<Direction>),
    CancelEdit,
    Undo,
    Redo,
    SelectAll,
    Copy,
    Paste,
    ClearSelection,
    /// Open the editor; a typed character replaces the cell content.
    BeginEdit { seed: Option<String> },
}

fn arrow(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}

/// Map a key press to a grid action. `None` leaves the event to the browser.
pub fn map_key(input: &KeyInput, editing: bool) -> Option<KeyAction> {
    let key = input.key.as_str();
    if editing {
        // The input element owns every other key while editing.
        return match key {
            "Enter" if input.shift => Some(KeyAction::CommitEdit(Some(Direction::Up))),
            "Enter" => Some(KeyAction::CommitEdit(Some(Direction::Down))),
            "Tab" if input.shift => Some(KeyAction::CommitEdit(Some(Direction::Left))),
            "Tab" => Some(KeyAction::CommitEdit(Some(Direction::Right))),
            "Escape" => Some(KeyAction::CancelEdit),
            _ => None,
        };
    }

    if input.ctrl {
        return match key.to_ascii_lowercase().as_str() {
            "z" if input.shift => Some(KeyAction::Redo),
            "z" => Some(KeyAction::Undo),
            "y" => Some(KeyAction::Redo),
            "a" => Some(KeyAction::SelectAll),
            "c" => Some(KeyAction::Copy),
            "v" => Some(KeyAction::Paste),
            _ => None,
        };
    }

    if let Some(direction) = arrow(key) {
        return Some(if input.shift {
            KeyAction::Extend(direction)
        } else {
            KeyAction::Move(direction)
        });
    }

    match key {
        "Enter" if input.shift => Some(KeyAction::Move(Direction::Up)),
        "Enter" => Some(KeyAction::Move(Direction::Down)),
        "Tab" if input.shift => Some(KeyAction::Move(Direction::Left)),
        "Tab" => Some(KeyAction::Move(Direction::Right)),
        "Delete" | "Backspace" => Some(KeyAction::ClearSelection),
        "F2" => Some(KeyAction::BeginEdit { seed: None }),
        _ if !input.alt && key.chars().count() == 1 => Some(KeyAction::BeginEdit {
            seed: Some(key.to_string()),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(KeyInput::new("ArrowDown"), Some(KeyAction::Move(Direction::Down)) ; "arrow moves")]
    #[test_case(KeyInput::new("ArrowLeft").shift(), Some(KeyAction::Extend(Direction::Left)) ; "shift arrow extends")]
    #[test_case(KeyInput::new("z").ctrl(), Some(KeyAction::Undo) ; "undo")]
    #[test_case(KeyInput::new("Z").ctrl().shift(), Some(KeyAction::Redo) ; "shift undo redoes")]
    #[test_case(KeyInput::new("y").ctrl(), Some(KeyAction::Redo) ; "redo")]
    #[test_case(KeyInput::new("c").ctrl(), Some(KeyAction::Copy) ; "copy")]
    #[test_case(KeyInput::new("Delete"), Some(KeyAction::ClearSelection) ; "delete clears")]
    #[test_case(KeyInput::new("F2"), Some(KeyAction::BeginEdit { seed: None }) ; "f2 edits")]
    #[test_case(KeyInput::new("7"), Some(KeyAction::BeginEdit { seed: Some("7".into()) }) ; "typing edits")]
    #[test_case(KeyInput::new("Shift"), None ; "modifier alone ignored")]
    #[test_case(KeyInput::new("q").ctrl(), None ; "unbound ctrl ignored")]
    fn idle(input: KeyInput, expected: Option<KeyAction>) {
        assert_eq!(map_key(&input, false), expected);
    }

    #[test_case(KeyInput::new("Enter"), Some(KeyAction::CommitEdit(Some(Direction::Down))) ; "enter commits down")]
    #[test_case(KeyInput::new("Tab").shift(), Some(KeyAction::CommitEdit(Some(Direction::Left))) ; "shift tab commits left")]
    #[test_case(KeyInput::new("Escape"), Some(KeyAction::CancelEdit) ; "escape cancels")]
    #[test_case(KeyInput::new("ArrowDown"), None ; "arrows stay in the input")]
    #[test_case(KeyInput::new("z").ctrl(), None ; "undo stays in the input")]
    fn editing(input: KeyInput, expected: Option<KeyAction>) {
        assert_eq!(map_key(&input, true), expected);
    }
}
