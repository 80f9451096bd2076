//! Headless driver for tilegrid - loads JSON rows, renders the tiles for a
//! scroll position with the recording backend and prints a JSON summary
//!
//! Usage:
//!   tilegrid_cli <rows.json>
//!   tilegrid_cli <rows.json> --scroll 60000,0 --select A1:C10
//!   tilegrid_cli <rows.json> --config grid.json -o summary.json

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde_json::json;
use tilegrid::cell_ref::parse_cell_ref;
use tilegrid::layout::Axis;
use tilegrid::render::{RecordingFactory, RecordingSurface};
use tilegrid::{Grid, GridConfig, Selection};

const VIEWPORT_WIDTH: f64 = 1200.0;
const VIEWPORT_HEIGHT: f64 = 800.0;

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn usage() -> ! {
    fail("Usage: tilegrid_cli <rows.json> [--scroll ROW,COL] [--select A1:B2] [--config grid.json] [-o output.json] [--log LEVEL]")
}

struct Args {
    input: String,
    scroll: Option<(u32, u32)>,
    select: Option<String>,
    config: Option<String>,
    output: Option<String>,
    log_level: String,
}

fn parse_args() -> Args {
    let mut args = env::args().skip(1);
    let mut parsed = Args {
        input: String::new(),
        scroll: None,
        select: None,
        config: None,
        output: None,
        log_level: "warn".to_string(),
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--scroll" => {
                let value = args.next().unwrap_or_else(|| usage());
                let (row, col) = value.split_once(',').unwrap_or_else(|| usage());
                let row = row.trim().parse().unwrap_or_else(|_| usage());
                let col = col.trim().parse().unwrap_or_else(|_| usage());
                parsed.scroll = Some((row, col));
            }
            "--select" => parsed.select = Some(args.next().unwrap_or_else(|| usage())),
            "--config" => parsed.config = Some(args.next().unwrap_or_else(|| usage())),
            "-o" => parsed.output = Some(args.next().unwrap_or_else(|| usage())),
            "--log" => parsed.log_level = args.next().unwrap_or_else(|| usage()),
            _ if parsed.input.is_empty() => parsed.input = arg,
            _ => usage(),
        }
    }
    if parsed.input.is_empty() {
        usage();
    }
    parsed
}

/// `A1` or `A1:C10`.
fn parse_selection(text: &str) -> Option<Selection> {
    match text.split_once(':') {
        Some((from, to)) => Some(Selection::range(parse_cell_ref(from)?, parse_cell_ref(to)?)),
        None => {
            let (row, col) = parse_cell_ref(text)?;
            Some(Selection::Cell { row, col })
        }
    }
}

fn main() {
    let args = parse_args();
    tilegrid::logging::init(tilegrid::logging::parse_level(&args.log_level));

    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .unwrap_or_else(|e| fail(&format!("Error reading {path}: {e}")));
            GridConfig::from_json(&text)
                .unwrap_or_else(|e| fail(&format!("Invalid config {path}: {e}")))
        }
        None => GridConfig::default(),
    };

    let rows = fs::read_to_string(&args.input)
        .unwrap_or_else(|e| fail(&format!("Error reading {}: {e}", args.input)));

    let mut grid = Grid::new(
        config,
        RecordingFactory::new(),
        RecordingSurface::new(),
        RecordingSurface::new(),
        VIEWPORT_WIDTH,
        VIEWPORT_HEIGHT,
    )
    .unwrap_or_else(|e| fail(&format!("Error creating grid: {e}")));

    let summary = grid
        .load_json_rows(&rows)
        .unwrap_or_else(|e| fail(&format!("Error loading {}: {e}", args.input)));

    if let Some((row, col)) = args.scroll {
        let layout = &grid.state().layout;
        let x = layout.cumulative_offset(Axis::Column, col) as f64;
        let y = layout.cumulative_offset(Axis::Row, row) as f64;
        grid.scroll_to(x, y);
    }

    if let Some(text) = &args.select {
        let selection =
            parse_selection(text).unwrap_or_else(|| fail(&format!("Invalid selection {text}")));
        grid.select(selection);
    }

    let keys = grid.tiles().materialized_keys();
    let texts: usize = keys
        .iter()
        .filter_map(|key| grid.tiles().surface(*key))
        .map(|surface| surface.texts().len())
        .sum();
    let viewport = &grid.state().viewport;

    let report = json!({
        "loaded": summary,
        "scroll": { "x": viewport.scroll_x, "y": viewport.scroll_y },
        "tiles": keys.iter().map(|k| [k.row, k.col]).collect::<Vec<_>>(),
        "drawnTexts": texts,
        "selection": grid.selection(),
        "stats": grid.selection_stats(),
    });
    let json = serde_json::to_string_pretty(&report).unwrap();

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                fail(&format!("Error writing {path}: {e}"));
            }
            eprintln!("Written: {path}");
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
