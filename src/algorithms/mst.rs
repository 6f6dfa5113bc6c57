use crate::algorithms::connectivity::is_connected_impl;
use crate::error::MstError;
use crate::model::EdgeId;
use crate::{Graph, MstResult};

/// Disjoint-set forest over node ids. `find` uses iterative path halving so
/// deep chains never recurse; `union` is by rank.
pub struct DisjointSet {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
        }
    }

    pub fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grand = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grand;
            x = grand;
        }
        x
    }

    /// Merges the sets holding a and b. Returns false if already joined.
    pub fn union(&mut self, a: u32, b: u32) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        let (lo, hi) = if self.rank[ra as usize] < self.rank[rb as usize] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[lo as usize] = hi;
        if self.rank[lo as usize] == self.rank[hi as usize] {
            self.rank[hi as usize] += 1;
        }
        true
    }
}

/// Kruskal over the current edge set. Equal weights keep creation order
/// (stable sort), so repeated runs on the same graph return the same tree.
pub fn kruskal_impl(g: &Graph) -> Result<MstResult, MstError> {
    let n = g.nodes.len();
    if n == 0 {
        return Err(MstError::EmptyGraph);
    }
    if n == 1 {
        return Err(MstError::SingleNode);
    }
    if !is_connected_impl(g) {
        return Err(MstError::Disconnected);
    }

    let mut order: Vec<EdgeId> = (0..g.edges.len() as u32).collect();
    order.sort_by(|&i, &j| {
        g.edges[i as usize]
            .weight
            .total_cmp(&g.edges[j as usize].weight)
    });

    let mut dsu = DisjointSet::new(n);
    let mut accepted: Vec<EdgeId> = Vec::with_capacity(n - 1);
    let mut total = 0.0f32;
    for id in order {
        let e = &g.edges[id as usize];
        if dsu.union(e.a, e.b) {
            accepted.push(id);
            total += e.weight;
            if accepted.len() == n - 1 {
                break;
            }
        }
    }
    // Connectivity was verified up front, so the tree must be complete.
    debug_assert_eq!(accepted.len(), n - 1);

    Ok(MstResult {
        edges: accepted,
        total_weight: total,
        built_ver: g.version(),
    })
}
