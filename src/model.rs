use serde::{Deserialize, Serialize};

pub type NodeId = u32;
pub type EdgeId = u32;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Node {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: f32,
}

impl Edge {
    // Undirected: (a,b) and (b,a) name the same pair.
    pub fn joins(&self, a: NodeId, b: NodeId) -> bool {
        (self.a == a && self.b == b) || (self.a == b && self.b == a)
    }
}
