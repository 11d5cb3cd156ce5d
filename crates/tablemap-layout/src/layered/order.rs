//! In-rank ordering via barycenter sweeps.

use super::LayeredGraph;

const SWEEPS: usize = 4;

/// Assign an order index within each rank. Initial order is insertion
/// order; alternating downward (predecessor) and upward (successor) sweeps
/// pull each node toward the mean position of its neighbors. Sorting is
/// stable and the sweep count fixed, so the result is deterministic.
pub(super) fn assign(g: &mut LayeredGraph, dag: &[(usize, usize)]) {
    let n = g.node_count();
    let max_rank = g.nodes.iter().filter_map(|node| node.rank).max().unwrap_or(0);
    let mut layers: Vec<Vec<usize>> = vec![Vec::new(); max_rank as usize + 1];
    for (i, node) in g.nodes.iter().enumerate() {
        layers[node.rank.unwrap_or(0) as usize].push(i);
    }

    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut succs: Vec<Vec<usize>> = vec![Vec::new(); n];
    for &(v, w) in dag {
        succs[v].push(w);
        preds[w].push(v);
    }

    let mut pos = vec![0usize; n];
    refresh(&layers, &mut pos);

    for sweep in 0..SWEEPS {
        if sweep % 2 == 0 {
            for r in 1..layers.len() {
                sort_layer(&mut layers[r], &preds, &pos);
                for (i, &v) in layers[r].iter().enumerate() {
                    pos[v] = i;
                }
            }
        } else {
            for r in (0..layers.len().saturating_sub(1)).rev() {
                sort_layer(&mut layers[r], &succs, &pos);
                for (i, &v) in layers[r].iter().enumerate() {
                    pos[v] = i;
                }
            }
        }
    }

    for layer in &layers {
        for (i, &v) in layer.iter().enumerate() {
            g.nodes[v].order = Some(i);
        }
    }
}

fn refresh(layers: &[Vec<usize>], pos: &mut [usize]) {
    for layer in layers {
        for (i, &v) in layer.iter().enumerate() {
            pos[v] = i;
        }
    }
}

/// Stable sort by mean neighbor position. Nodes without neighbors on the
/// sweep side keep their current position as the key, so they stay put.
fn sort_layer(layer: &mut Vec<usize>, neighbors: &[Vec<usize>], pos: &[usize]) {
    let mut keyed: Vec<(f64, usize)> = layer
        .iter()
        .map(|&v| {
            let ns = &neighbors[v];
            let key = if ns.is_empty() {
                pos[v] as f64
            } else {
                ns.iter().map(|&u| pos[u] as f64).sum::<f64>() / ns.len() as f64
            };
            (key, v)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    layer.clear();
    layer.extend(keyed.into_iter().map(|(_, v)| v));
}
