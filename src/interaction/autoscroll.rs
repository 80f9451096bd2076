//! Edge auto-scroll while a drag gesture is held near the viewport border.

use super::AutoScrollAxes;

/// Scroll step for a pointer at `pos` relative to the band `[start, end)`.
///
/// Inside the band but within `edge` of a border the step grows linearly
/// with depth; past the border it is `max_step`. Negative scrolls backward.
pub fn edge_delta(pos: f64, start: f64, end: f64, edge: f64, max_step: f64) -> f64 {
    if edge <= 0.0 || end <= start || pos.is_nan() {
        return 0.0;
    }
    let near_start = start + edge;
    let near_end = end - edge;
    if pos < near_start {
        let depth = ((near_start - pos) / edge).min(1.0);
        -(depth * max_step).ceil()
    } else if pos > near_end {
        let depth = ((pos - near_end) / edge).min(1.0);
        (depth * max_step).ceil()
    } else {
        0.0
    }
}

/// Scroll delta `(dx, dy)` for a pointer at wrapper position `(x, y)`.
///
/// The cell area is `[header_width, width)` x `[header_height, height)`.
pub fn auto_scroll_delta(
    axes: AutoScrollAxes,
    (x, y): (f64, f64),
    (header_width, header_height): (f64, f64),
    (width, height): (f64, f64),
    edge: f64,
    max_step: f64,
) -> (f64, f64) {
    let dx = edge_delta(x, header_width, width, edge, max_step);
    let dy = edge_delta(y, header_height, height, edge, max_step);
    match axes {
        AutoScrollAxes::None => (0.0, 0.0),
        AutoScrollAxes::Horizontal => (dx, 0.0),
        AutoScrollAxes::Vertical => (0.0, dy),
        AutoScrollAxes::Both => (dx, dy),
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(400.0, 0.0 ; "middle")]
    #[test_case(790.0, 14.0 ; "near end")]
    #[test_case(900.0, 24.0 ; "past end")]
    #[test_case(56.0, -18.0 ; "near start")]
    #[test_case(-50.0, -24.0 ; "past start")]
    fn edge(pos: f64, expected: f64) {
        assert_eq!(edge_delta(pos, 50.0, 800.0, 24.0, 24.0), expected);
    }

    #[test]
    fn axes_filter() {
        let args = ((900.0, 900.0), (50.0, 28.0), (800.0, 600.0));
        assert_eq!(
            auto_scroll_delta(AutoScrollAxes::Horizontal, args.0, args.1, args.2, 24.0, 24.0),
            (24.0, 0.0)
        );
        assert_eq!(
            auto_scroll_delta(AutoScrollAxes::Both, args.0, args.1, args.2, 24.0, 24.0),
            (24.0, 24.0)
        );
        assert_eq!(
            auto_scroll_delta(AutoScrollAxes::None, args.0, args.1, args.2, 24.0, 24.0),
            (0.0, 0.0)
        );
    }
}
