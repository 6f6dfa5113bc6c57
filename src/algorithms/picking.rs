use crate::geometry::math::{in_ellipse, label_center, seg_distance_sq};
use crate::geometry::tolerance::{LABEL_RX, LABEL_RY, NODE_RADIUS};
use crate::model::{EdgeId, NodeId};
use crate::Graph;

// Hit resolution is deterministic: the first entity in creation order wins
// when regions overlap.

pub fn hit_node_impl(g: &Graph, x: f32, y: f32) -> Option<NodeId> {
    let r2 = NODE_RADIUS * NODE_RADIUS;
    for (id, n) in g.nodes.iter().enumerate() {
        let dx = n.x - x;
        let dy = n.y - y;
        if dx * dx + dy * dy <= r2 {
            return Some(id as NodeId);
        }
    }
    None
}

pub fn hit_edge_impl(g: &Graph, x: f32, y: f32, threshold: f32) -> Option<EdgeId> {
    let tol2 = threshold * threshold;
    for (id, e) in g.edges.iter().enumerate() {
        let a = g.nodes[e.a as usize];
        let b = g.nodes[e.b as usize];
        let (d2, _) = seg_distance_sq(x, y, a.x, a.y, b.x, b.y);
        if d2 < tol2 {
            return Some(id as EdgeId);
        }
    }
    None
}

pub fn hit_weight_impl(g: &Graph, x: f32, y: f32) -> Option<EdgeId> {
    for (id, e) in g.edges.iter().enumerate() {
        let a = g.nodes[e.a as usize];
        let b = g.nodes[e.b as usize];
        let (cx, cy) = label_center(a.x, a.y, b.x, b.y);
        if in_ellipse(x, y, cx, cy, LABEL_RX, LABEL_RY) {
            return Some(id as EdgeId);
        }
    }
    None
}
