pub mod model;
pub mod error;
pub mod editor;
pub mod geometry {
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod connectivity;
    pub mod mst;
    pub mod picking;
}
mod json;

use serde::{Deserialize, Serialize};

pub use error::{EdgeError, MstError, WeightError};
pub use model::{Edge, EdgeId, Node, NodeId};

/// A computed spanning tree. Disposable: `built_ver` records the graph
/// version it was computed against, and any later mutation makes it stale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MstResult {
    /// Accepted edges in acceptance order.
    pub edges: Vec<EdgeId>,
    pub total_weight: f32,
    pub built_ver: u64,
}

/// Owns the node and edge sets and is the single source of truth for
/// topology and weights. Ids are indices into the creation-ordered vectors;
/// nothing is deleted individually, so ids are never reused within a session.
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) ver: u64,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
            ver: 1,
        }
    }

    /// Bumped on every successful mutation; read queries never change it.
    pub fn version(&self) -> u64 {
        self.ver
    }

    fn bump(&mut self) {
        self.ver += 1;
    }

    // Nodes
    pub fn add_node(&mut self, x: f32, y: f32) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(Node { x, y });
        self.bump();
        id
    }

    pub fn move_node(&mut self, id: NodeId, x: f32, y: f32) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        match self.nodes.get_mut(id as usize) {
            Some(n) => {
                n.x = x;
                n.y = y;
            }
            None => return false,
        }
        self.bump();
        true
    }

    pub fn get_node(&self, id: NodeId) -> Option<(f32, f32)> {
        self.nodes.get(id as usize).map(|n| (n.x, n.y))
    }

    pub fn node_count(&self) -> u32 {
        self.nodes.len() as u32
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (i as NodeId, *n))
    }

    pub fn degree(&self, id: NodeId) -> u32 {
        self.edges
            .iter()
            .filter(|e| e.a == id || e.b == id)
            .count() as u32
    }

    // Edges
    pub fn connect(&mut self, a: NodeId, b: NodeId, weight: f32) -> Result<EdgeId, EdgeError> {
        if a == b {
            return Err(EdgeError::SelfLoop);
        }
        if self.nodes.get(a as usize).is_none() {
            return Err(EdgeError::UnknownNode(a));
        }
        if self.nodes.get(b as usize).is_none() {
            return Err(EdgeError::UnknownNode(b));
        }
        if self.edges.iter().any(|e| e.joins(a, b)) {
            return Err(EdgeError::DuplicateEdge);
        }
        if !(weight > 0.0) || !weight.is_finite() {
            return Err(EdgeError::NonPositiveWeight);
        }
        let id = self.edges.len() as EdgeId;
        self.edges.push(Edge { a, b, weight });
        self.bump();
        Ok(id)
    }

    pub fn set_weight(&mut self, id: EdgeId, weight: f32) -> Result<(), WeightError> {
        if self.edges.get(id as usize).is_none() {
            return Err(WeightError::UnknownEdge(id));
        }
        if !(weight > 0.0) || !weight.is_finite() {
            return Err(WeightError::NonPositiveWeight);
        }
        self.edges[id as usize].weight = weight;
        self.bump();
        Ok(())
    }

    pub fn edge_endpoints(&self, id: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges.get(id as usize).map(|e| (e.a, e.b))
    }

    pub fn edge_weight(&self, id: EdgeId) -> Option<f32> {
        self.edges.get(id as usize).map(|e| e.weight)
    }

    pub fn edge_count(&self) -> u32 {
        self.edges.len() as u32
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, Edge)> + '_ {
        self.edges.iter().enumerate().map(|(i, e)| (i as EdgeId, *e))
    }

    /// Clears everything; id assignment restarts from zero.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.bump();
    }

    // Hit-testing
    pub fn hit_node(&self, x: f32, y: f32) -> Option<NodeId> {
        algorithms::picking::hit_node_impl(self, x, y)
    }
    pub fn hit_edge(&self, x: f32, y: f32, threshold: f32) -> Option<EdgeId> {
        algorithms::picking::hit_edge_impl(self, x, y, threshold)
    }
    pub fn hit_weight_label(&self, x: f32, y: f32) -> Option<EdgeId> {
        algorithms::picking::hit_weight_impl(self, x, y)
    }

    // Algorithms
    pub fn is_connected(&self) -> bool {
        algorithms::connectivity::is_connected_impl(self)
    }
    pub fn compute_mst(&self) -> Result<MstResult, MstError> {
        algorithms::mst::kruskal_impl(self)
    }

    // JSON
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }
    pub fn from_json_value(&mut self, v: serde_json::Value) -> bool {
        json::from_json_impl_strict(self, v).is_ok()
    }
    pub fn from_json_value_strict(
        &mut self,
        v: serde_json::Value,
    ) -> Result<(), (&'static str, String)> {
        json::from_json_impl_strict(self, v)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}
