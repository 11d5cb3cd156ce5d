//! Positioned output model handed to the rendering collaborator.

use serde::{Deserialize, Serialize};
use tablemap_core::{Direction, Edge, Node};

/// Side of a node box where connecting lines visually attach. Derived purely
/// from the layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Side where edges enter a node.
    pub fn entry_for(direction: Direction) -> Self {
        match direction {
            Direction::Tb => Side::Top,
            Direction::Lr => Side::Left,
        }
    }

    /// Side where edges exit a node.
    pub fn exit_for(direction: Direction) -> Self {
        match direction {
            Direction::Tb => Side::Bottom,
            Direction::Lr => Side::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }
}

/// A node with its assigned position in the shared coordinate space.
///
/// Positions are top-left anchored. They are assigned exactly once per
/// layout pass and fully recomputed on every pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedNode {
    #[serde(flatten)]
    pub node: Node,
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub source_anchor: Side,
    pub target_anchor: Side,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStats {
    pub node_count: usize,
    pub edge_count: usize,
}

/// One full layout pass: positioned nodes (connected first, then isolated),
/// the styled edges untouched from graph construction, and the overall
/// bounding box for viewport fitting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<Edge>,
    pub stats: LayoutStats,
    pub bounds: Option<Bounds>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_sides_follow_direction() {
        assert_eq!(Side::entry_for(Direction::Tb), Side::Top);
        assert_eq!(Side::exit_for(Direction::Tb), Side::Bottom);
        assert_eq!(Side::entry_for(Direction::Lr), Side::Left);
        assert_eq!(Side::exit_for(Direction::Lr), Side::Right);
    }

    #[test]
    fn bounds_cover_all_points() {
        let b = Bounds::from_points([(3.0, -1.0), (0.5, 4.0), (2.0, 2.0)]).unwrap();
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (0.5, -1.0, 3.0, 4.0));
        assert!(Bounds::from_points([]).is_none());
    }
}
