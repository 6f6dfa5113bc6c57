use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{EdgeId, NodeId};

/// Rejections from `Graph::connect`. The store is unchanged on any of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum EdgeError {
    #[error("cannot connect a node to itself")]
    SelfLoop,
    #[error("these nodes are already connected")]
    DuplicateEdge,
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    #[error("edge weight must be a positive number")]
    NonPositiveWeight,
}

/// Rejections from `Graph::set_weight` and weight-string parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum WeightError {
    #[error("weight must be a positive number")]
    NonPositiveWeight,
    #[error("not a valid number")]
    UnparsableWeight,
    #[error("unknown edge {0}")]
    UnknownEdge(EdgeId),
}

/// Preconditions checked by `compute_mst` before Kruskal runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MstError {
    #[error("the graph has no nodes")]
    EmptyGraph,
    #[error("a single node has no spanning tree")]
    SingleNode,
    #[error("the graph is not connected; only connected graphs have a spanning tree")]
    Disconnected,
}
