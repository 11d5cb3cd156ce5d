//! Input records and the derived graph model.
//!
//! Node identity is the `(database, table)` pair, flattened into the id
//! `"database.table"`. Nodes and edges are flat, keyed records referencing
//! each other by id so the model serializes trivially.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Engine shown for a node that has only ever been observed on the target
/// side of a relationship. The feed reports engines for sources only, so the
/// placeholder stays until (unless) a record names the table as a source.
pub const PLACEHOLDER_ENGINE: &str = "Table";

/// Relationship kinds reported by the cluster's dependency feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyKind {
    Dependency,
    DictGet,
    JoinGet,
    MvTarget,
    DictSource,
    ExternalEngine,
}

impl DependencyKind {
    /// Wire tag, also used as the edge-id suffix.
    pub fn as_tag(self) -> &'static str {
        match self {
            DependencyKind::Dependency => "dependency",
            DependencyKind::DictGet => "dict_get",
            DependencyKind::JoinGet => "join_get",
            DependencyKind::MvTarget => "mv_target",
            DependencyKind::DictSource => "dict_source",
            DependencyKind::ExternalEngine => "external_engine",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "dependency" => Some(DependencyKind::Dependency),
            "dict_get" => Some(DependencyKind::DictGet),
            "join_get" => Some(DependencyKind::JoinGet),
            "mv_target" => Some(DependencyKind::MvTarget),
            "dict_source" => Some(DependencyKind::DictSource),
            "external_engine" => Some(DependencyKind::ExternalEngine),
            _ => None,
        }
    }
}

/// One relationship observation from the dependency feed.
///
/// A record without a target still introduces its source table into the node
/// set as a standalone entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDependency {
    pub source_database: String,
    pub source_table: String,
    #[serde(default)]
    pub source_engine: String,
    #[serde(default)]
    pub target_database: Option<String>,
    #[serde(default)]
    pub target_table: Option<String>,
    #[serde(
        rename = "dependency_type",
        default,
        deserialize_with = "tolerant_kind"
    )]
    pub kind: Option<DependencyKind>,
    #[serde(default)]
    pub extra_info: Option<String>,
}

/// Unrecognized `dependency_type` tags degrade to `None` (plain styling)
/// instead of failing the whole feed.
fn tolerant_kind<'de, D>(deserializer: D) -> Result<Option<DependencyKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = Option::<String>::deserialize(deserializer)?;
    Ok(tag.as_deref().and_then(DependencyKind::from_tag))
}

/// Flattened node id for a `(database, table)` pair.
pub fn node_id(database: &str, table: &str) -> String {
    format!("{database}.{table}")
}

/// A distinct table, view, or dictionary observed while scanning the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub database: String,
    pub table: String,
    /// Display label (the bare table name).
    pub label: String,
    pub engine: String,
    pub is_current: bool,
}

/// A styled, directed relationship between two nodes.
///
/// Identity is `(source, target, kind)`: the same table pair can carry one
/// edge per relationship kind, while duplicate observations of the same
/// triple collapse onto one edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub dashed: bool,
    pub animated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<String>,
}

/// Layout flow direction. Exactly two values; toggling forces a full re-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "TB")]
    Tb,
    #[serde(rename = "LR")]
    Lr,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tb" | "td" => Ok(Direction::Tb),
            "lr" => Ok(Direction::Lr),
            _ => Err(Error::UnsupportedDirection {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Tb => write!(f, "TB"),
            Direction::Lr => write!(f, "LR"),
        }
    }
}
