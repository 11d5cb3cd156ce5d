//! Connected / isolated split of the node set.

use rustc_hash::FxHashSet;

use crate::model::{Edge, Node};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    /// Nodes that are an endpoint of at least one edge.
    pub connected: Vec<Node>,
    /// Nodes with no edges at all.
    pub isolated: Vec<Node>,
}

/// Split nodes by edge participation. Relative order within each side
/// preserves the input order.
pub fn partition(nodes: &[Node], edges: &[Edge]) -> Partition {
    let mut endpoints: FxHashSet<&str> = FxHashSet::default();
    for edge in edges {
        endpoints.insert(edge.source.as_str());
        endpoints.insert(edge.target.as_str());
    }

    let mut out = Partition::default();
    for node in nodes {
        if endpoints.contains(node.id.as_str()) {
            out.connected.push(node.clone());
        } else {
            out.isolated.push(node.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DependencyGraph;
    use crate::model::TableDependency;

    fn feed() -> Vec<TableDependency> {
        let edge = TableDependency {
            source_database: "db".to_string(),
            source_table: "a".to_string(),
            source_engine: "MergeTree".to_string(),
            target_database: Some("db".to_string()),
            target_table: Some("b".to_string()),
            kind: None,
            extra_info: None,
        };
        let standalone = TableDependency {
            source_database: "db".to_string(),
            source_table: "c".to_string(),
            source_engine: "Log".to_string(),
            target_database: None,
            target_table: None,
            kind: None,
            extra_info: None,
        };
        vec![edge, standalone]
    }

    #[test]
    fn partition_is_complete_and_disjoint() {
        let graph = DependencyGraph::build(&feed(), None);
        let parts = partition(&graph.nodes, &graph.edges);

        assert_eq!(
            parts.connected.len() + parts.isolated.len(),
            graph.nodes.len()
        );
        for node in &parts.connected {
            assert!(!parts.isolated.iter().any(|n| n.id == node.id));
        }
    }

    #[test]
    fn endpoint_membership_decides_the_side() {
        let graph = DependencyGraph::build(&feed(), None);
        let parts = partition(&graph.nodes, &graph.edges);

        assert_eq!(
            parts
                .connected
                .iter()
                .map(|n| n.id.as_str())
                .collect::<Vec<_>>(),
            ["db.a", "db.b"]
        );
        assert_eq!(
            parts
                .isolated
                .iter()
                .map(|n| n.id.as_str())
                .collect::<Vec<_>>(),
            ["db.c"]
        );
    }

    #[test]
    fn no_edges_means_everything_is_isolated() {
        let records = vec![TableDependency {
            source_database: "db".to_string(),
            source_table: "solo".to_string(),
            source_engine: "Memory".to_string(),
            target_database: None,
            target_table: None,
            kind: None,
            extra_info: None,
        }];
        let graph = DependencyGraph::build(&records, None);
        let parts = partition(&graph.nodes, &graph.edges);
        assert!(parts.connected.is_empty());
        assert_eq!(parts.isolated.len(), 1);
    }
}
