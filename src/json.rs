use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Graph;

// Snapshot document: { version, nodes: [{id,x,y}], edges: [{id,a,b,w}] }.
// Ids are indices and never reused, so nodes are listed in creation order.

#[derive(Serialize, Deserialize)]
struct NodeSer {
    id: u32,
    x: f32,
    y: f32,
}

#[derive(Serialize, Deserialize)]
struct EdgeSer {
    id: u32,
    a: u32,
    b: u32,
    w: f32,
}

#[derive(Serialize, Deserialize)]
struct Doc {
    version: u32,
    nodes: Vec<NodeSer>,
    edges: Vec<EdgeSer>,
}

pub fn to_json_impl(g: &Graph) -> Value {
    let nodes = g
        .nodes
        .iter()
        .enumerate()
        .map(|(i, n)| NodeSer {
            id: i as u32,
            x: n.x,
            y: n.y,
        })
        .collect();
    let edges = g
        .edges
        .iter()
        .enumerate()
        .map(|(i, e)| EdgeSer {
            id: i as u32,
            a: e.a,
            b: e.b,
            w: e.weight,
        })
        .collect();
    serde_json::to_value(Doc {
        version: 1,
        nodes,
        edges,
    })
    .unwrap_or(Value::Null)
}

/// Rebuilds the graph by replaying the public mutations, so every structural
/// invariant is re-enforced on load. On any error the graph is left reset.
pub fn from_json_impl_strict(g: &mut Graph, v: Value) -> Result<(), (&'static str, String)> {
    let doc: Doc = serde_json::from_value(v)
        .map_err(|e| ("bad_document", format!("malformed snapshot: {}", e)))?;
    if doc.version != 1 {
        return Err(("bad_version", format!("unsupported version {}", doc.version)));
    }
    g.reset();
    for (i, n) in doc.nodes.iter().enumerate() {
        if n.id as usize != i {
            g.reset();
            return Err((
                "bad_node_id",
                format!("node ids must be contiguous, got {} at index {}", n.id, i),
            ));
        }
        if !n.x.is_finite() || !n.y.is_finite() {
            g.reset();
            return Err(("non_finite", format!("node {} position is not finite", n.id)));
        }
        g.add_node(n.x, n.y);
    }
    for e in &doc.edges {
        if let Err(err) = g.connect(e.a, e.b, e.w) {
            g.reset();
            return Err(("bad_edge", format!("edge {}-{}: {}", e.a, e.b, err)));
        }
    }
    Ok(())
}
