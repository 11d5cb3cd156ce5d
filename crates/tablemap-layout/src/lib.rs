#![forbid(unsafe_code)]

//! Layered layout and grid packing for table-lineage graphs (headless).
//!
//! Takes the styled dependency graph from `tablemap-core`, lays out the
//! connected components with a layered (Sugiyama-style) algorithm, packs
//! isolated nodes into a grid beneath them, and returns a pure, serializable
//! [`LayoutResult`]. Painting, pan/zoom, and interaction belong to the
//! rendering collaborator, which must not alter the positions it receives.

pub mod adapter;
pub mod grid;
pub mod layered;
pub mod model;
pub mod pipeline;

pub use adapter::{ConnectedLayout, NODE_HEIGHT, NODE_WIDTH, layout_connected};
pub use grid::pack_isolated;
pub use model::{Bounds, LayoutResult, LayoutStats, PlacedNode, Point, Side};
pub use pipeline::layout_dependency_graph;
