//! Reversible commands and the undo/redo history.
//!
//! Every state change that should be undoable (cell edits, row/column
//! resizes, multi-cell batches) is a [`Command`] executed through the
//! [`CommandManager`]. Commands never touch globals: they mutate whatever
//! [`CommandTarget`] they are handed and report the [`Damage`] they caused.

use std::collections::VecDeque;

use crate::damage::Damage;
use crate::layout::Axis;

/// State that commands read and mutate.
pub trait CommandTarget {
    fn cell_value(&self, row: u32, col: u32) -> String;
    fn write_cell(&mut self, row: u32, col: u32, value: &str);
    fn size(&self, axis: Axis, index: u32) -> u32;
    /// Store a size; returns the size actually applied after clamping.
    fn write_size(&mut self, axis: Axis, index: u32, size: u32) -> u32;
    /// Smallest size an index on `axis` may have.
    fn min_size(&self, axis: Axis) -> u32;
    /// Clamp an index into range on `axis`.
    fn clamp_index(&self, axis: Axis, index: u32) -> u32;
}

/// A reversible change to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    EditCell {
        row: u32,
        col: u32,
        old: String,
        new: String,
    },
    ResizeColumn {
        col: u32,
        old: u32,
        new: u32,
    },
    ResizeRow {
        row: u32,
        old: u32,
        new: u32,
    },
    /// Several commands undone and redone as one step.
    Batch(Vec<Command>),
}

impl Command {
    /// Edit of one cell, capturing its current value as `old`.
    pub fn edit_cell(target: &dyn CommandTarget, row: u32, col: u32, new: &str) -> Command {
        let row = target.clamp_index(Axis::Row, row);
        let col = target.clamp_index(Axis::Column, col);
        Command::EditCell {
            row,
            col,
            old: target.cell_value(row, col),
            new: new.to_string(),
        }
    }

    /// Resize of a row or column, capturing its current size as `old`.
    pub fn resize(target: &dyn CommandTarget, axis: Axis, index: u32, new: u32) -> Command {
        let index = target.clamp_index(axis, index);
        let old = target.size(axis, index);
        match axis {
            Axis::Row => Command::ResizeRow {
                row: index,
                old,
                new,
            },
            Axis::Column => Command::ResizeColumn {
                col: index,
                old,
                new,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::EditCell { .. } => "edit cell",
            Command::ResizeColumn { .. } => "resize column",
            Command::ResizeRow { .. } => "resize row",
            Command::Batch(_) => "batch",
        }
    }

    /// Clamp indices and sizes against `target` and drop parts that change
    /// nothing. Returns `None` when the whole command is a no-op.
    pub fn normalized(self, target: &dyn CommandTarget) -> Option<Command> {
        match self {
            Command::EditCell { row, col, old, new } => {
                let row = target.clamp_index(Axis::Row, row);
                let col = target.clamp_index(Axis::Column, col);
                (old != new).then_some(Command::EditCell { row, col, old, new })
            }
            Command::ResizeColumn { col, old, new } => {
                let col = target.clamp_index(Axis::Column, col);
                let new = new.max(target.min_size(Axis::Column));
                (old != new).then_some(Command::ResizeColumn { col, old, new })
            }
            Command::ResizeRow { row, old, new } => {
                let row = target.clamp_index(Axis::Row, row);
                let new = new.max(target.min_size(Axis::Row));
                (old != new).then_some(Command::ResizeRow { row, old, new })
            }
            Command::Batch(commands) => {
                let kept: Vec<Command> = commands
                    .into_iter()
                    .filter_map(|c| c.normalized(target))
                    .collect();
                (!kept.is_empty()).then_some(Command::Batch(kept))
            }
        }
    }

    /// Apply the forward direction.
    pub fn apply(&self, target: &mut dyn CommandTarget) -> Damage {
        match self {
            Command::EditCell { row, col, new, .. } => {
                target.write_cell(*row, *col, new);
                Damage::cell(*row, *col)
            }
            Command::ResizeColumn { col, new, .. } => {
                target.write_size(Axis::Column, *col, *new);
                Damage::layout()
            }
            Command::ResizeRow { row, new, .. } => {
                target.write_size(Axis::Row, *row, *new);
                Damage::layout()
            }
            Command::Batch(commands) => {
                let mut damage = Damage::none();
                for command in commands {
                    damage.merge(command.apply(target));
                }
                damage
            }
        }
    }

    /// The command that undoes this one.
    pub fn inverse(&self) -> Command {
        match self {
            Command::EditCell { row, col, old, new } => Command::EditCell {
                row: *row,
                col: *col,
                old: new.clone(),
                new: old.clone(),
            },
            Command::ResizeColumn { col, old, new } => Command::ResizeColumn {
                col: *col,
                old: *new,
                new: *old,
            },
            Command::ResizeRow { row, old, new } => Command::ResizeRow {
                row: *row,
                old: *new,
                new: *old,
            },
            Command::Batch(commands) => {
                Command::Batch(commands.iter().rev().map(Command::inverse).collect())
            }
        }
    }

    /// Restore the state before [`Command::apply`].
    pub fn revert(&self, target: &mut dyn CommandTarget) -> Damage {
        self.inverse().apply(target)
    }
}

/// Undo and redo stacks of executed commands.
#[derive(Debug)]
pub struct CommandManager {
    undo_stack: VecDeque<Command>,
    redo_stack: Vec<Command>,
    max_entries: usize,
}

impl Default for CommandManager {
    fn default() -> Self {
        Self::new(100)
    }
}

impl CommandManager {
    pub fn new(max_entries: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Apply a command and record it. No-op commands are rejected and
    /// leave both stacks untouched; anything else clears the redo stack.
    pub fn execute(&mut self, command: Command, target: &mut dyn CommandTarget) -> Option<Damage> {
        let label = command.label();
        let Some(command) = command.normalized(target) else {
            log::debug!("rejected no-op {label}");
            return None;
        };
        let damage = command.apply(target);
        log::debug!("executed {}", command.label());
        self.undo_stack.push_back(command);
        self.redo_stack.clear();
        if self.undo_stack.len() > self.max_entries {
            self.undo_stack.pop_front();
        }
        Some(damage)
    }

    /// Revert the most recent command. `None` when there is nothing to undo.
    pub fn undo(&mut self, target: &mut dyn CommandTarget) -> Option<Damage> {
        let command = self.undo_stack.pop_back()?;
        let damage = command.revert(target);
        log::debug!("undid {}", command.label());
        self.redo_stack.push(command);
        Some(damage)
    }

    /// Re-apply the most recently undone command. `None` when there is nothing to redo.
    pub fn redo(&mut self, target: &mut dyn CommandTarget) -> Option<Damage> {
        let command = self.redo_stack.pop()?;
        let damage = command.apply(target);
        log::debug!("redid {}", command.label());
        self.undo_stack.push_back(command);
        Some(damage)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
