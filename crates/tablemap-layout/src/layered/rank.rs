//! Rank assignment: cycle breaking + longest-path layering.

use super::LayeredGraph;

/// Orient the edge list into a DAG. A DFS over nodes in insertion order
/// marks back edges; those are traversed reversed for layering purposes
/// only, so cyclic inputs still terminate with every node ranked.
pub(super) fn acyclic(g: &LayeredGraph) -> Vec<(usize, usize)> {
    let n = g.node_count();
    let mut adj: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
    for (i, &(v, w)) in g.edges.iter().enumerate() {
        adj[v].push((i, w));
    }

    // 0 = unvisited, 1 = on the DFS stack, 2 = finished.
    let mut state = vec![0u8; n];
    let mut reversed = vec![false; g.edges.len()];

    fn dfs(v: usize, adj: &[Vec<(usize, usize)>], state: &mut [u8], reversed: &mut [bool]) {
        state[v] = 1;
        for &(i, w) in &adj[v] {
            match state[w] {
                1 => reversed[i] = true,
                0 => dfs(w, adj, state, reversed),
                _ => {}
            }
        }
        state[v] = 2;
    }

    for v in 0..n {
        if state[v] == 0 {
            dfs(v, &adj, &mut state, &mut reversed);
        }
    }

    g.edges
        .iter()
        .enumerate()
        .map(|(i, &(v, w))| if reversed[i] { (w, v) } else { (v, w) })
        .collect()
}

/// Longest-path layering over the DAG: sinks sit at the deepest rank, every
/// other node one rank above its nearest successor, then ranks are shifted
/// so the minimum is zero.
pub(super) fn assign(g: &mut LayeredGraph, dag: &[(usize, usize)]) {
    let n = g.node_count();
    let mut out: Vec<Vec<usize>> = vec![Vec::new(); n];
    for &(v, w) in dag {
        out[v].push(w);
    }

    fn visit(v: usize, out: &[Vec<usize>], ranks: &mut [Option<i32>]) -> i32 {
        if let Some(rank) = ranks[v] {
            return rank;
        }
        let mut rank: Option<i32> = None;
        for &w in &out[v] {
            let candidate = visit(w, out, ranks) - 1;
            rank = Some(match rank {
                Some(current) => current.min(candidate),
                None => candidate,
            });
        }
        let rank = rank.unwrap_or(0);
        ranks[v] = Some(rank);
        rank
    }

    let mut ranks: Vec<Option<i32>> = vec![None; n];
    for v in 0..n {
        visit(v, &out, &mut ranks);
    }

    let min = ranks.iter().flatten().copied().min().unwrap_or(0);
    for (node, rank) in g.nodes.iter_mut().zip(ranks) {
        node.rank = rank.map(|r| r - min);
    }
}
