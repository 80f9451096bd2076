//! Command manager tests against the real grid state

#![allow(clippy::unwrap_used)]

use tilegrid::history::{Command, CommandManager};
use tilegrid::layout::Axis;
use tilegrid::{GridConfig, GridState};

fn state() -> GridState {
    GridState::new(GridConfig::default())
}

#[test]
fn execute_undo_redo_round_trip() {
    let mut state = state();
    state.store.set(1, 1, "before");
    let command = Command::edit_cell(&state, 1, 1, "after");
    assert!(state.execute(command));
    let after_execute = state.store.value(1, 1).to_string();

    assert!(state.undo());
    assert_eq!(state.store.value(1, 1), "before");
    assert!(state.redo());
    assert_eq!(state.store.value(1, 1), after_execute);
}

#[test]
fn resize_undo_scenario() {
    let mut state = state();
    let command = Command::resize(&state, Axis::Column, 4, 40);
    assert!(state.execute(command));
    assert_eq!(state.layout.get_size(Axis::Column, 4), 40);

    assert!(state.undo());
    assert_eq!(state.layout.get_size(Axis::Column, 4), 100);
    assert!(!state.history.can_undo());
    assert_eq!(state.history.redo_len(), 1);

    // A fresh command discards the redo branch
    let command = Command::resize(&state, Axis::Row, 2, 50);
    assert!(state.execute(command));
    assert_eq!(state.history.redo_len(), 0);
    assert!(!state.redo());
    assert_eq!(state.layout.get_size(Axis::Column, 4), 100);
}

#[test]
fn no_op_commands_are_not_recorded() {
    let mut state = state();
    let same_size = Command::resize(&state, Axis::Column, 0, 100);
    assert!(!state.execute(same_size));
    let same_value = Command::edit_cell(&state, 0, 0, "");
    assert!(!state.execute(same_value));
    // Below the minimum clamps to 20, which is still a change
    let tiny = Command::resize(&state, Axis::Column, 0, 1);
    assert!(state.execute(tiny));
    assert_eq!(state.layout.get_size(Axis::Column, 0), 20);
    assert_eq!(state.history.undo_len(), 1);
}

#[test]
fn undo_on_empty_stack_is_a_no_op() {
    let mut state = state();
    assert!(!state.undo());
    assert!(!state.redo());
    assert!(state.damage.is_empty());
}

#[test]
fn batch_undoes_as_one_step() {
    let mut state = state();
    let batch = Command::Batch(vec![
        Command::edit_cell(&state, 0, 0, "a"),
        Command::edit_cell(&state, 0, 1, "b"),
        Command::resize(&state, Axis::Row, 0, 60),
    ]);
    assert!(state.execute(batch));
    assert_eq!(state.history.undo_len(), 1);
    assert!(state.undo());
    assert!(state.store.is_empty());
    assert_eq!(state.layout.get_size(Axis::Row, 0), 28);
}

#[test]
fn history_is_capped() {
    let mut state = state();
    state.history = CommandManager::new(3);
    for i in 0..5 {
        let command = Command::edit_cell(&state, i, 0, "x");
        state.execute(command);
    }
    assert_eq!(state.history.undo_len(), 3);
    while state.undo() {}
    // The two oldest edits fell off the history
    assert_eq!(state.store.value(0, 0), "x");
    assert_eq!(state.store.value(1, 0), "x");
    assert_eq!(state.store.value(2, 0), "");
}
