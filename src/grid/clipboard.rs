//! Tab-separated copy and paste.

use std::collections::BTreeSet;

use super::GridState;
use crate::history::Command;
use crate::store::CellStore;
use crate::types::{CellRegion, Selection};

/// Escape a cell value for TSV/clipboard format.
/// If the value contains tabs, newlines, or quotes, wrap in quotes and escape internal quotes
pub fn escape_cell_value(value: &str) -> String {
    let needs_quoting = value.contains('\t')
        || value.contains('\n')
        || value.contains('\r')
        || value.contains('"');

    if needs_quoting {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// TSV for `region`, trimmed to its last non-empty row and column
/// (what spreadsheets put on the clipboard).
pub fn region_to_tsv(store: &CellStore, region: &CellRegion) -> String {
    regions_to_tsv(store, std::slice::from_ref(region))
}

/// TSV of the cells covered by `regions`, trimmed like [`region_to_tsv`].
/// Rows and columns between disjoint runs are left out, so rows {1, 5}
/// copy as two lines.
pub fn regions_to_tsv(store: &CellStore, regions: &[CellRegion]) -> String {
    let cells: Vec<(u32, u32)> = regions
        .iter()
        .flat_map(|region| store.cells_in_region(region))
        .map(|(pos, _)| pos)
        .collect();
    let (Some(max_row), Some(max_col)) = (
        cells.iter().map(|(row, _)| *row).max(),
        cells.iter().map(|(_, col)| *col).max(),
    ) else {
        return String::new();
    };
    let rows: BTreeSet<u32> = regions
        .iter()
        .flat_map(|region| region.start_row..=region.end_row.min(max_row))
        .collect();
    let cols: BTreeSet<u32> = regions
        .iter()
        .flat_map(|region| region.start_col..=region.end_col.min(max_col))
        .collect();

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for (j, col) in cols.iter().enumerate() {
            if j > 0 {
                out.push('\t');
            }
            out.push_str(&escape_cell_value(store.value(*row, *col)));
        }
    }
    out
}

/// Parse clipboard TSV into rows of fields. Quoted fields may contain
/// tabs, newlines and doubled quotes. A trailing newline does not add a row.
pub fn parse_tsv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut dirty = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                dirty = true;
            }
            '\t' => {
                row.push(std::mem::take(&mut field));
                dirty = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
                dirty = false;
            }
            _ => {
                field.push(c);
                dirty = true;
            }
        }
    }
    if dirty {
        row.push(field);
        rows.push(row);
    }
    rows
}

impl GridState {
    /// TSV of the selected cells.
    pub fn copy_selection(&self) -> String {
        let regions = self
            .selection
            .current()
            .regions(self.layout.row_count(), self.layout.col_count());
        regions_to_tsv(&self.store, &regions)
    }

    /// Write `text` as one undoable batch starting at the focus cell.
    /// Values past the grid edge are dropped. Selects the pasted block.
    pub fn paste_text(&mut self, text: &str) -> bool {
        let rows = parse_tsv(text);
        let (top, left) = self.selection.current().focus();
        let (last_row, last_col) = (
            self.layout.rows.last_index(),
            self.layout.cols.last_index(),
        );
        let mut commands = Vec::new();
        let (mut bottom, mut right) = (top, left);
        for (dr, values) in rows.iter().enumerate() {
            let Some(row) = u32::try_from(dr).ok().and_then(|d| top.checked_add(d)) else {
                break;
            };
            if row > last_row {
                break;
            }
            for (dc, value) in values.iter().enumerate() {
                let Some(col) = u32::try_from(dc).ok().and_then(|d| left.checked_add(d)) else {
                    break;
                };
                if col > last_col {
                    break;
                }
                commands.push(Command::edit_cell(self, row, col, value));
                bottom = bottom.max(row);
                right = right.max(col);
            }
        }
        if commands.is_empty() {
            return false;
        }
        let changed = self.execute(Command::Batch(commands));
        self.update_selection(|m| m.replace(Selection::range((top, left), (bottom, right))));
        changed
    }

    /// Empty every non-empty selected cell as one undoable batch.
    pub fn clear_selection(&mut self) -> bool {
        let regions = self
            .selection
            .current()
            .regions(self.layout.row_count(), self.layout.col_count());
        let positions: Vec<(u32, u32)> = regions
            .iter()
            .flat_map(|region| self.store.cells_in_region(region))
            .map(|(pos, _)| pos)
            .collect();
        let target: &GridState = self;
        let commands: Vec<Command> = positions
            .into_iter()
            .map(|(row, col)| Command::edit_cell(target, row, col, ""))
            .collect();
        !commands.is_empty() && self.execute(Command::Batch(commands))
    }
}
