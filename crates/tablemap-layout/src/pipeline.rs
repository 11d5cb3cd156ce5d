//! Orchestration: records in, positioned layout out.

use tablemap_core::{DependencyGraph, Direction, TableDependency, partition};

use crate::adapter;
use crate::grid;
use crate::model::{Bounds, LayoutResult, LayoutStats};

/// Run one full layout pass over the raw dependency records.
///
/// Stateless and deterministic: identical inputs produce structurally
/// identical output, and every call recomputes from scratch — there is no
/// incremental relayout. An empty feed is a defined terminal state (the
/// caller shows "no tables found") and skips the pipeline entirely.
pub fn layout_dependency_graph(
    records: &[TableDependency],
    current: Option<(&str, &str)>,
    direction: Direction,
) -> LayoutResult {
    if records.is_empty() {
        return LayoutResult::default();
    }

    let graph = DependencyGraph::build(records, current);
    let parts = partition(&graph.nodes, &graph.edges);
    let connected = adapter::layout_connected(&parts.connected, &graph.edges, direction);
    let isolated = grid::pack_isolated(&parts.isolated, connected.bounds.as_ref(), direction);

    let mut nodes = connected.nodes;
    nodes.extend(isolated);

    let bounds = Bounds::from_points(nodes.iter().flat_map(|p| {
        [
            (p.position.x, p.position.y),
            (p.position.x + p.width, p.position.y + p.height),
        ]
    }));
    let stats = LayoutStats {
        node_count: nodes.len(),
        edge_count: graph.edge_count,
    };
    tracing::debug!(
        node_count = stats.node_count,
        edge_count = stats.edge_count,
        direction = %direction,
        "layout pass complete"
    );

    LayoutResult {
        nodes,
        edges: graph.edges,
        stats,
        bounds,
    }
}
