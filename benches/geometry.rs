//! Benchmarks for border-side classification and box offset math
//!
//! Run with: cargo bench geometry

use tablebar::geometry::{coords_of, rect_offset, side_of, BoundingBox, Coords, ScrollOffset};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const TABLE: Coords = Coords {
    x1: 0,
    y1: 0,
    x2: 640,
    y2: 480,
};

#[divan::bench(args = ["left", "right", "top", "bottom", "corner", "center"])]
fn classify_side(position: &str) {
    let (x, y) = match position {
        "left" => (5.0, 240.0),
        "right" => (635.0, 240.0),
        "top" => (320.0, 3.0),
        "bottom" => (320.0, 477.0),
        "corner" => (3.0, 477.0),
        _ => (320.0, 240.0),
    };
    divan::black_box(side_of(&TABLE, x, y));
}

#[divan::bench]
fn offset_between_boxes() {
    let table = BoundingBox::from_rect(0.0, 0.0, 640.0, 480.0);
    let parent = BoundingBox::from_rect(-12.0, -12.0, 660.0, 500.0);
    divan::black_box(rect_offset(
        divan::black_box(Some(&table)),
        divan::black_box(Some(&parent)),
    ));
}

#[divan::bench]
fn document_coords_with_scroll() {
    let bounds = BoundingBox::from_rect(103.4, 58.9, 640.0, 480.0);
    let scroll = ScrollOffset { x: 0.0, y: 1250.0 };
    divan::black_box(coords_of(divan::black_box(&bounds), scroll));
}
