//! Coordinate assignment from ranks and in-rank order.

use std::collections::BTreeMap;

use super::LayeredGraph;

/// Assign center coordinates: each rank is as tall as its tallest box and
/// ranks are stacked with `ranksep` between them; within a rank, boxes sit
/// `nodesep` apart and every rank is centered against the widest one.
pub(super) fn assign(g: &mut LayeredGraph) {
    let nodesep = g.config.nodesep;
    let ranksep = g.config.ranksep;
    let marginx = g.config.marginx;
    let marginy = g.config.marginy;

    let mut ranks: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for (i, node) in g.nodes.iter().enumerate() {
        ranks.entry(node.rank.unwrap_or(0)).or_default().push(i);
    }
    for ids in ranks.values_mut() {
        ids.sort_by_key(|&i| g.nodes[i].order.unwrap_or(usize::MAX));
    }

    let mut prev_y = marginy;
    for ids in ranks.values() {
        let max_h = ids.iter().map(|&i| g.nodes[i].height).fold(0.0, f64::max);
        for &i in ids {
            g.nodes[i].y = Some(prev_y + max_h / 2.0);
        }
        prev_y += max_h + ranksep;
    }

    let mut widths: Vec<f64> = Vec::with_capacity(ranks.len());
    for ids in ranks.values() {
        let mut cursor = 0.0;
        for &i in ids {
            g.nodes[i].x = Some(cursor + g.nodes[i].width / 2.0);
            cursor += g.nodes[i].width + nodesep;
        }
        widths.push(cursor - nodesep);
    }

    let widest = widths.iter().copied().fold(0.0, f64::max);
    for (ids, width) in ranks.values().zip(widths) {
        let offset = marginx + (widest - width) / 2.0;
        for &i in ids {
            if let Some(x) = g.nodes[i].x {
                g.nodes[i].x = Some(x + offset);
            }
        }
    }
}
