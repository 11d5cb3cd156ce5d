#![forbid(unsafe_code)]

//! Table-lineage graph model (headless).
//!
//! Consumes raw table-to-table dependency records as reported by a database
//! cluster and produces a deduplicated, styled node/edge graph plus its
//! connected/isolated partition. Geometry lives downstream: this crate never
//! assigns positions, fetches data, or renders anything.

pub mod error;
pub mod graph;
pub mod model;
pub mod partition;
pub mod style;

pub use error::{Error, Result};
pub use graph::DependencyGraph;
pub use model::{
    DependencyKind, Direction, Edge, Node, PLACEHOLDER_ENGINE, TableDependency, node_id,
};
pub use partition::{Partition, partition};
pub use style::{EdgeStyle, classify};
