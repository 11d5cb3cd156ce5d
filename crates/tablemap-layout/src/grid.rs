//! Grid packing for isolated nodes.
//!
//! The layered engine only handles nodes with edges; bare tables are packed
//! into a fixed-column grid anchored below the laid-out graph. Grid spacing
//! exceeds the box size in both axes, so no two boxes can overlap and none
//! can reach back into the connected bounding box.

use tablemap_core::{Direction, Node};

use crate::adapter::{NODE_HEIGHT, NODE_WIDTH};
use crate::model::{Bounds, PlacedNode, Point, Side};

const GRID_GAP: f64 = 24.0;

/// Horizontal layouts read narrower, so they get fewer columns.
fn columns_for(direction: Direction) -> usize {
    match direction {
        Direction::Tb => 4,
        Direction::Lr => 3,
    }
}

/// Position every isolated node on a grid. `bounds` is the bounding box of
/// the already-positioned connected nodes; without one the grid starts at
/// the origin.
pub fn pack_isolated(
    nodes: &[Node],
    bounds: Option<&Bounds>,
    direction: Direction,
) -> Vec<PlacedNode> {
    let (start_x, start_y) = match bounds {
        Some(b) => (b.min_x, b.max_y + GRID_GAP),
        None => (0.0, 0.0),
    };

    let columns = columns_for(direction);
    let source_anchor = Side::exit_for(direction);
    let target_anchor = Side::entry_for(direction);

    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let col = (i % columns) as f64;
            let row = (i / columns) as f64;
            PlacedNode {
                node: node.clone(),
                position: Point {
                    x: start_x + col * (NODE_WIDTH + GRID_GAP),
                    y: start_y + row * (NODE_HEIGHT + GRID_GAP),
                },
                width: NODE_WIDTH,
                height: NODE_HEIGHT,
                source_anchor,
                target_anchor,
            }
        })
        .collect()
}
