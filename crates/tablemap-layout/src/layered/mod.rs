//! Layered (Sugiyama-style) layout for directed dependency graphs.
//!
//! The classic rank / order / position decomposition: ranks via longest-path,
//! in-rank order via barycenter sweeps, coordinates by rank and order times
//! spacing. Layout is always computed top-to-bottom internally; left-to-right
//! layouts swap axes on the way in and restore them on the way out.
//!
//! Coordinates produced here are box **centers**. Callers anchored on box
//! corners must convert by subtracting half the box size.

mod order;
mod position;
mod rank;

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    #[default]
    Tb,
    Lr,
}

#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub rankdir: RankDir,
    /// Minimum horizontal gap between boxes in the same rank.
    pub nodesep: f64,
    /// Vertical gap between consecutive ranks.
    pub ranksep: f64,
    pub marginx: f64,
    pub marginy: f64,
}

impl Default for LayeredConfig {
    fn default() -> Self {
        Self {
            rankdir: RankDir::Tb,
            nodesep: 50.0,
            ranksep: 50.0,
            marginx: 0.0,
            marginy: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayeredNode {
    pub id: String,
    pub width: f64,
    pub height: f64,
    /// Box center, assigned by `layout`.
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub(crate) rank: Option<i32>,
    pub(crate) order: Option<usize>,
}

/// Directed graph with fixed-size node boxes, ready for layered layout.
///
/// Insertion order is the deterministic tie-break everywhere: initial
/// in-rank order, DFS roots, and barycenter ties all follow it.
#[derive(Debug, Clone, Default)]
pub struct LayeredGraph {
    pub(crate) config: LayeredConfig,
    pub(crate) nodes: Vec<LayeredNode>,
    pub(crate) edges: Vec<(usize, usize)>,
    index: FxHashMap<String, usize>,
}

impl LayeredGraph {
    pub fn new(config: LayeredConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Register a node box. Duplicate ids keep the first registration.
    pub fn add_node(&mut self, id: &str, width: f64, height: f64) {
        if self.index.contains_key(id) {
            return;
        }
        self.index.insert(id.to_string(), self.nodes.len());
        self.nodes.push(LayeredNode {
            id: id.to_string(),
            width,
            height,
            x: None,
            y: None,
            rank: None,
            order: None,
        });
    }

    /// Register a directed edge. Edges with unregistered endpoints are
    /// ignored; self-loops constrain neither rank nor order and are dropped.
    pub fn add_edge(&mut self, v: &str, w: &str) {
        let (Some(&v), Some(&w)) = (self.index.get(v), self.index.get(w)) else {
            return;
        };
        if v == w {
            return;
        }
        self.edges.push((v, w));
    }

    pub fn node(&self, id: &str) -> Option<&LayeredNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn nodes(&self) -> &[LayeredNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Run the full pipeline, assigning a center coordinate to every node.
pub fn layout(g: &mut LayeredGraph) {
    if g.is_empty() {
        return;
    }
    adjust(g);
    let dag = rank::acyclic(g);
    rank::assign(g, &dag);
    order::assign(g, &dag);
    position::assign(g);
    undo(g);
}

/// Internal layout is top-to-bottom; for left-to-right we lay out the
/// transposed boxes.
fn adjust(g: &mut LayeredGraph) {
    if g.config.rankdir == RankDir::Lr {
        for node in &mut g.nodes {
            std::mem::swap(&mut node.width, &mut node.height);
        }
    }
}

fn undo(g: &mut LayeredGraph) {
    if g.config.rankdir == RankDir::Lr {
        for node in &mut g.nodes {
            if let (Some(x), Some(y)) = (node.x, node.y) {
                node.x = Some(y);
                node.y = Some(x);
            }
            std::mem::swap(&mut node.width, &mut node.height);
        }
    }
}
