//! Graph construction from raw dependency records.

use indexmap::IndexMap;

use crate::model::{Edge, Node, PLACEHOLDER_ENGINE, TableDependency, node_id};
use crate::style;

/// Deduplicated nodes and styled edges built from one scan of the feed.
///
/// Node order is first-seen order, which downstream grid packing relies on
/// for deterministic placement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub edge_count: usize,
}

impl DependencyGraph {
    /// Build the graph from raw records. `current` is the optional
    /// `(database, table)` pair to highlight.
    ///
    /// Records with an empty source database or table are skipped: upstream
    /// data-quality issues degrade the graph rather than fail the page.
    pub fn build(records: &[TableDependency], current: Option<(&str, &str)>) -> Self {
        let mut nodes: IndexMap<String, Node> = IndexMap::new();
        let mut edges: IndexMap<String, Edge> = IndexMap::new();

        for rec in records {
            if rec.source_database.is_empty() || rec.source_table.is_empty() {
                continue;
            }

            let source_id = node_id(&rec.source_database, &rec.source_table);
            if let Some(node) = nodes.get_mut(&source_id) {
                // The feed only reports engines on the source side. A node
                // first seen as a target carries a placeholder until now;
                // once a real engine is recorded it is never overwritten.
                if node.engine == PLACEHOLDER_ENGINE && !rec.source_engine.is_empty() {
                    node.engine = rec.source_engine.clone();
                }
            } else {
                let engine = if rec.source_engine.is_empty() {
                    PLACEHOLDER_ENGINE.to_string()
                } else {
                    rec.source_engine.clone()
                };
                nodes.insert(
                    source_id.clone(),
                    make_node(&rec.source_database, &rec.source_table, engine, current),
                );
            }

            let (Some(target_database), Some(target_table)) =
                (rec.target_database.as_deref(), rec.target_table.as_deref())
            else {
                continue;
            };
            if target_database.is_empty() || target_table.is_empty() {
                continue;
            }

            let target_id = node_id(target_database, target_table);
            if !nodes.contains_key(&target_id) {
                nodes.insert(
                    target_id.clone(),
                    make_node(
                        target_database,
                        target_table,
                        PLACEHOLDER_ENGINE.to_string(),
                        current,
                    ),
                );
            }

            let kind_tag = rec.kind.map(|k| k.as_tag()).unwrap_or("dep");
            let edge_id = format!("{source_id}->{target_id}-{kind_tag}");
            let style = style::classify(rec.kind);
            // Same id means same (source, target, kind) triple: the later
            // observation replaces the earlier one instead of accumulating.
            edges.insert(
                edge_id.clone(),
                Edge {
                    id: edge_id,
                    source: source_id,
                    target: target_id,
                    color: style.color.to_string(),
                    label: style.label.map(str::to_string),
                    dashed: style.dashed,
                    animated: style.animated,
                    extra_info: rec.extra_info.clone(),
                },
            );
        }

        let edge_count = edges.len();
        tracing::debug!(
            node_count = nodes.len(),
            edge_count,
            "built dependency graph"
        );

        Self {
            nodes: nodes.into_values().collect(),
            edges: edges.into_values().collect(),
            edge_count,
        }
    }
}

fn make_node(database: &str, table: &str, engine: String, current: Option<(&str, &str)>) -> Node {
    Node {
        id: node_id(database, table),
        database: database.to_string(),
        table: table.to_string(),
        label: table.to_string(),
        engine,
        is_current: current == Some((database, table)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DependencyKind;

    fn record(
        source: (&str, &str, &str),
        target: Option<(&str, &str)>,
        kind: Option<DependencyKind>,
    ) -> TableDependency {
        TableDependency {
            source_database: source.0.to_string(),
            source_table: source.1.to_string(),
            source_engine: source.2.to_string(),
            target_database: target.map(|(db, _)| db.to_string()),
            target_table: target.map(|(_, t)| t.to_string()),
            kind,
            extra_info: None,
        }
    }

    #[test]
    fn nodes_deduplicate_on_database_table_pair() {
        let graph = DependencyGraph::build(
            &[
                record(("db", "a", "MergeTree"), Some(("db", "b")), None),
                record(("db", "a", "MergeTree"), Some(("db", "c")), None),
            ],
            None,
        );
        assert_eq!(
            graph.nodes.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(),
            ["db.a", "db.b", "db.c"]
        );
        assert_eq!(graph.edge_count, 2);
    }

    #[test]
    fn duplicate_triples_collapse_onto_one_edge() {
        let graph = DependencyGraph::build(
            &[
                record(
                    ("db", "a", "Dictionary"),
                    Some(("db", "b")),
                    Some(DependencyKind::DictGet),
                ),
                record(
                    ("db", "a", "Dictionary"),
                    Some(("db", "b")),
                    Some(DependencyKind::DictGet),
                ),
            ],
            None,
        );
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].id, "db.a->db.b-dict_get");
    }

    #[test]
    fn same_pair_different_kinds_yield_distinct_edges() {
        let graph = DependencyGraph::build(
            &[
                record(
                    ("db", "a", "Join"),
                    Some(("db", "b")),
                    Some(DependencyKind::DictGet),
                ),
                record(
                    ("db", "a", "Join"),
                    Some(("db", "b")),
                    Some(DependencyKind::JoinGet),
                ),
            ],
            None,
        );
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 2);
        assert_ne!(graph.edges[0].id, graph.edges[1].id);
    }

    #[test]
    fn target_first_node_upgrades_engine_on_source_sighting() {
        let graph = DependencyGraph::build(
            &[
                record(("db", "a", "MaterializedView"), Some(("db", "b")), None),
                record(("db", "b", "MergeTree"), None, None),
            ],
            None,
        );
        let b = graph.nodes.iter().find(|n| n.id == "db.b").unwrap();
        assert_eq!(b.engine, "MergeTree");
    }

    #[test]
    fn target_only_node_keeps_placeholder_engine() {
        let graph = DependencyGraph::build(
            &[record(("db", "a", "MergeTree"), Some(("db", "b")), None)],
            None,
        );
        let b = graph.nodes.iter().find(|n| n.id == "db.b").unwrap();
        assert_eq!(b.engine, PLACEHOLDER_ENGINE);
    }

    #[test]
    fn first_source_engine_wins_over_later_sightings() {
        let graph = DependencyGraph::build(
            &[
                record(("db", "a", "MergeTree"), None, None),
                record(("db", "a", "ReplacingMergeTree"), Some(("db", "b")), None),
            ],
            None,
        );
        let a = graph.nodes.iter().find(|n| n.id == "db.a").unwrap();
        assert_eq!(a.engine, "MergeTree");
    }

    #[test]
    fn targetless_record_registers_standalone_source() {
        let graph = DependencyGraph::build(&[record(("db", "lonely", "Log"), None, None)], None);
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
        assert_eq!(graph.edge_count, 0);
    }

    #[test]
    fn malformed_records_are_skipped() {
        let graph = DependencyGraph::build(
            &[
                record(("", "a", "MergeTree"), Some(("db", "b")), None),
                record(("db", "", "MergeTree"), Some(("db", "b")), None),
                record(("db", "ok", "MergeTree"), None, None),
            ],
            None,
        );
        assert_eq!(
            graph.nodes.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(),
            ["db.ok"]
        );
    }

    #[test]
    fn current_highlight_matches_database_and_table() {
        let graph = DependencyGraph::build(
            &[record(
                ("db", "a", "MergeTree"),
                Some(("other", "a")),
                None,
            )],
            Some(("db", "a")),
        );
        let a = graph.nodes.iter().find(|n| n.id == "db.a").unwrap();
        let other = graph.nodes.iter().find(|n| n.id == "other.a").unwrap();
        assert!(a.is_current);
        assert!(!other.is_current);
    }
}
