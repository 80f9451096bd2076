//! Selection model tests

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::collections::BTreeSet;

use tilegrid::layout::Axis;
use tilegrid::types::{CellRegion, HeaderHighlight, RangeSelection};
use tilegrid::{Direction, Selection, SelectionModel};

#[test]
fn range_normalization_preserves_contains() {
    let backwards = Selection::Range(RangeSelection::new((5, 5), (2, 2)));
    let forwards = Selection::Range(RangeSelection::new((2, 2), (5, 5)));
    for row in 0..8 {
        for col in 0..8 {
            assert_eq!(
                backwards.contains(row, col),
                forwards.contains(row, col),
                "({row}, {col})"
            );
        }
    }
    let Selection::Range(range) = backwards else {
        return;
    };
    assert_eq!((range.start_row, range.end_row), (2, 5));
    assert_eq!((range.anchor_row, range.anchor_col), (5, 5));
}

#[test]
fn row_and_column_cover_full_span() {
    let row = Selection::Row { row: 7 };
    assert!(row.contains(7, 0));
    assert!(row.contains(7, 999));
    assert!(!row.contains(8, 0));
    let col = Selection::Column { col: 3 };
    assert!(col.contains(99_999, 3));
    assert!(!col.contains(0, 4));
}

#[test]
fn multi_row_regions_are_contiguous_runs() {
    let selection = Selection::rows(BTreeSet::from([1, 2, 3, 7, 9, 10]));
    assert_eq!(
        selection.regions(20, 5),
        vec![
            CellRegion::new(1, 0, 3, 4),
            CellRegion::new(7, 0, 7, 4),
            CellRegion::new(9, 0, 10, 4)
        ]
    );
    assert_eq!(selection.bounds(20, 5), CellRegion::new(1, 0, 10, 4));
}

#[test]
fn header_highlight_levels() {
    let range = Selection::range((2, 1), (4, 3));
    assert_eq!(range.header_highlight(Axis::Row, 3, 100, 10), HeaderHighlight::Partial);
    assert_eq!(range.header_highlight(Axis::Row, 5, 100, 10), HeaderHighlight::None);
    let row = Selection::Row { row: 3 };
    assert_eq!(row.header_highlight(Axis::Row, 3, 100, 10), HeaderHighlight::Full);
    assert_eq!(row.header_highlight(Axis::Column, 0, 100, 10), HeaderHighlight::Partial);
}

#[test]
fn shift_arrows_keep_anchor() {
    let mut model = SelectionModel::new(100, 20);
    model.select_cell(5, 5);
    model.extend_focus(Direction::Down);
    model.extend_focus(Direction::Down);
    model.extend_focus(Direction::Left);
    assert_eq!(
        *model.current(),
        Selection::Range(RangeSelection::new((5, 5), (7, 4)))
    );
    // A plain arrow collapses to the cell next to the anchor
    model.move_focus(Direction::Up);
    assert_eq!(*model.current(), Selection::Cell { row: 4, col: 5 });
}

#[test]
fn navigation_stops_at_edges() {
    let mut model = SelectionModel::new(3, 3);
    model.move_focus(Direction::Up);
    model.move_focus(Direction::Left);
    assert_eq!(*model.current(), Selection::Cell { row: 0, col: 0 });
    for _ in 0..5 {
        model.move_focus(Direction::Down);
        model.move_focus(Direction::Right);
    }
    assert_eq!(*model.current(), Selection::Cell { row: 2, col: 2 });
}

#[test]
fn serializes_with_type_tag() {
    let json = serde_json::to_value(Selection::range((2, 3), (10, 1))).unwrap();
    assert_eq!(json["type"], "range");
    assert_eq!(json["startRow"], 2);
    assert_eq!(json["endCol"], 3);
    let json = serde_json::to_value(Selection::Column { col: 4 }).unwrap();
    assert_eq!(json["type"], "column");
    assert_eq!(json["col"], 4);
}
