use crate::Graph;

/// Whether every node is reachable from every other. An empty graph reports
/// false: it has no meaningful spanning tree.
pub fn is_connected_impl(g: &Graph) -> bool {
    let n = g.nodes.len();
    if n == 0 {
        return false;
    }
    let mut adj: Vec<Vec<u32>> = vec![Vec::new(); n];
    for e in &g.edges {
        adj[e.a as usize].push(e.b);
        adj[e.b as usize].push(e.a);
    }
    let mut visited = vec![false; n];
    let mut stack = vec![0u32];
    let mut seen = 0usize;
    while let Some(id) = stack.pop() {
        if visited[id as usize] {
            continue;
        }
        visited[id as usize] = true;
        seen += 1;
        for &next in &adj[id as usize] {
            if !visited[next as usize] {
                stack.push(next);
            }
        }
    }
    seen == n
}
