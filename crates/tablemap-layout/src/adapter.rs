//! Bridge between the styled dependency graph and the layered engine.
//!
//! The engine works on fixed-size boxes and returns box centers; everything
//! downstream is top-left anchored, so the conversion happens here and only
//! here.

use tablemap_core::{Direction, Edge, Node};

use crate::layered::{self, LayeredConfig, LayeredGraph, RankDir};
use crate::model::{Bounds, PlacedNode, Point, Side};

/// Every table box has the same footprint; the rendering collaborator owns
/// the actual visuals.
pub const NODE_WIDTH: f64 = 172.0;
pub const NODE_HEIGHT: f64 = 48.0;

const NODE_SEP: f64 = 40.0;
const RANK_SEP: f64 = 80.0;
const MARGIN: f64 = 24.0;

#[derive(Debug, Clone, Default)]
pub struct ConnectedLayout {
    pub nodes: Vec<PlacedNode>,
    pub bounds: Option<Bounds>,
}

/// Lay out the connected component set. With zero connected nodes the
/// engine is not invoked at all and the result is empty.
pub fn layout_connected(nodes: &[Node], edges: &[Edge], direction: Direction) -> ConnectedLayout {
    if nodes.is_empty() {
        return ConnectedLayout::default();
    }

    let mut g = LayeredGraph::new(LayeredConfig {
        rankdir: match direction {
            Direction::Tb => RankDir::Tb,
            Direction::Lr => RankDir::Lr,
        },
        nodesep: NODE_SEP,
        ranksep: RANK_SEP,
        marginx: MARGIN,
        marginy: MARGIN,
    });
    for node in nodes {
        g.add_node(&node.id, NODE_WIDTH, NODE_HEIGHT);
    }
    for edge in edges {
        // Endpoints outside the connected set are ignored by the graph.
        g.add_edge(&edge.source, &edge.target);
    }

    layered::layout(&mut g);

    let source_anchor = Side::exit_for(direction);
    let target_anchor = Side::entry_for(direction);

    let mut placed = Vec::with_capacity(nodes.len());
    for node in nodes {
        let Some(laid) = g.node(&node.id) else {
            continue;
        };
        let cx = laid.x.unwrap_or(0.0);
        let cy = laid.y.unwrap_or(0.0);
        placed.push(PlacedNode {
            node: node.clone(),
            // Center to top-left: off by half a box and every node lands in
            // the wrong place, so this stays the single conversion site.
            position: Point {
                x: cx - NODE_WIDTH / 2.0,
                y: cy - NODE_HEIGHT / 2.0,
            },
            width: NODE_WIDTH,
            height: NODE_HEIGHT,
            source_anchor,
            target_anchor,
        });
    }

    let bounds = Bounds::from_points(placed.iter().flat_map(|p| {
        [
            (p.position.x, p.position.y),
            (p.position.x + p.width, p.position.y + p.height),
        ]
    }));

    ConnectedLayout {
        nodes: placed,
        bounds,
    }
}
