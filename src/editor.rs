use serde::{Deserialize, Serialize};

use crate::error::{EdgeError, MstError, WeightError};
use crate::geometry::tolerance::EDGE_PICK_TOL;
use crate::model::{EdgeId, NodeId};
use crate::{Graph, MstResult};

pub const DEFAULT_EDGE_WEIGHT: f32 = 1.0;

/// External mode-switch signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeKind {
    AddNode,
    Connect,
    SetWeight,
    DragNode,
}

/// Current interaction mode, with the selection state each mode carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    AddNode,
    Connect { pending: Option<NodeId> },
    SetWeight,
    DragNode { active: Option<NodeId> },
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::AddNode => ModeKind::AddNode,
            Mode::Connect { .. } => ModeKind::Connect,
            Mode::SetWeight => ModeKind::SetWeight,
            Mode::DragNode { .. } => ModeKind::DragNode,
        }
    }
}

/// Outcome of one editor event, surfaced to the rendering collaborator as a
/// tagged value. `message()` renders the status-bar text; nothing here is
/// fatal and every rejection leaves the graph unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Status {
    Idle,
    ModeChanged(ModeKind),
    NodeAdded(NodeId),
    NodeSelected(NodeId),
    EdgeAdded { edge: EdgeId, a: NodeId, b: NodeId },
    ConnectRejected(EdgeError),
    ClickANode,
    WeightPrompt(EdgeId),
    NoEdgeHere,
    WeightSet { edge: EdgeId, weight: f32 },
    WeightRejected(WeightError),
    DragStarted(NodeId),
    Dragging(NodeId),
    DragFinished(NodeId),
    MstComputed { edges: usize, total_weight: f32 },
    MstRejected(MstError),
    HighlightCleared,
    Reset,
}

impl Status {
    pub fn message(&self) -> String {
        match self {
            Status::Idle => String::new(),
            Status::ModeChanged(ModeKind::AddNode) => {
                "mode: add node - click the canvas to add a node".into()
            }
            Status::ModeChanged(ModeKind::Connect) => {
                "mode: connect - click one node, then another".into()
            }
            Status::ModeChanged(ModeKind::SetWeight) => {
                "mode: set weight - click a weight label, then enter a new weight".into()
            }
            Status::ModeChanged(ModeKind::DragNode) => {
                "mode: drag node - click and drag a node to move it".into()
            }
            Status::NodeAdded(id) => format!("added node {}", id),
            Status::NodeSelected(id) => format!("selected node {}, pick a second node", id),
            Status::EdgeAdded { a, b, .. } => format!("added edge {} - {}", a, b),
            Status::ConnectRejected(e) => e.to_string(),
            Status::ClickANode => "click a node to connect".into(),
            Status::WeightPrompt(edge) => format!("enter a new weight for edge {}", edge),
            Status::NoEdgeHere => "click a weight label or an edge to set its weight".into(),
            Status::WeightSet { edge, weight } => {
                format!("edge {} weight set to {}", edge, weight)
            }
            Status::WeightRejected(e) => e.to_string(),
            Status::DragStarted(id) => format!("dragging node {}", id),
            Status::Dragging(id) => format!("dragging node {}", id),
            Status::DragFinished(id) => format!("finished dragging node {}", id),
            Status::MstComputed {
                edges,
                total_weight,
            } => format!(
                "minimum spanning tree: {} edges, total weight {}",
                edges, total_weight
            ),
            Status::MstRejected(e) => e.to_string(),
            Status::HighlightCleared => "cleared spanning tree highlight".into(),
            Status::Reset => "canvas reset".into(),
        }
    }
}

/// Interprets primitive pointer events into graph mutations. Owns the graph;
/// the rendering collaborator reads it back through `graph()` and `mst()`.
pub struct Editor {
    graph: Graph,
    mode: Mode,
    // SetWeight target armed by a click, consumed by submit_weight.
    prompt: Option<EdgeId>,
    mst: Option<MstResult>,
}

impl Editor {
    pub fn new() -> Self {
        Editor {
            graph: Graph::new(),
            mode: Mode::AddNode,
            prompt: None,
            mst: None,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The last computed tree, only while it still matches the graph. Any
    /// mutation bumps the graph version and silently retires the highlight.
    pub fn mst(&self) -> Option<&MstResult> {
        self.mst
            .as_ref()
            .filter(|m| m.built_ver == self.graph.version())
    }

    /// Mode transitions happen only through this call; any pending
    /// selection, drag, or weight prompt is dropped.
    pub fn set_mode(&mut self, kind: ModeKind) -> Status {
        self.mode = match kind {
            ModeKind::AddNode => Mode::AddNode,
            ModeKind::Connect => Mode::Connect { pending: None },
            ModeKind::SetWeight => Mode::SetWeight,
            ModeKind::DragNode => Mode::DragNode { active: None },
        };
        self.prompt = None;
        Status::ModeChanged(kind)
    }

    pub fn click(&mut self, x: f32, y: f32) -> Status {
        match self.mode {
            Mode::AddNode => {
                let id = self.graph.add_node(x, y);
                Status::NodeAdded(id)
            }
            Mode::Connect { pending } => {
                let hit = match self.graph.hit_node(x, y) {
                    Some(id) => id,
                    None => {
                        self.mode = Mode::Connect { pending: None };
                        return Status::ClickANode;
                    }
                };
                match pending {
                    None => {
                        self.mode = Mode::Connect { pending: Some(hit) };
                        Status::NodeSelected(hit)
                    }
                    Some(first) if first == hit => {
                        self.mode = Mode::Connect { pending: None };
                        Status::ConnectRejected(EdgeError::SelfLoop)
                    }
                    Some(first) => {
                        // Pending clears whether or not the connect succeeds.
                        self.mode = Mode::Connect { pending: None };
                        match self.graph.connect(first, hit, DEFAULT_EDGE_WEIGHT) {
                            Ok(edge) => Status::EdgeAdded {
                                edge,
                                a: first,
                                b: hit,
                            },
                            Err(e) => Status::ConnectRejected(e),
                        }
                    }
                }
            }
            Mode::SetWeight => {
                let target = self
                    .graph
                    .hit_weight_label(x, y)
                    .or_else(|| self.graph.hit_edge(x, y, EDGE_PICK_TOL));
                match target {
                    Some(edge) => {
                        self.prompt = Some(edge);
                        Status::WeightPrompt(edge)
                    }
                    None => {
                        self.prompt = None;
                        Status::NoEdgeHere
                    }
                }
            }
            Mode::DragNode { .. } => match self.graph.hit_node(x, y) {
                Some(id) => {
                    self.mode = Mode::DragNode { active: Some(id) };
                    Status::DragStarted(id)
                }
                None => Status::Idle,
            },
        }
    }

    pub fn drag(&mut self, x: f32, y: f32) -> Status {
        if let Mode::DragNode { active: Some(id) } = self.mode {
            if self.graph.move_node(id, x, y) {
                return Status::Dragging(id);
            }
        }
        Status::Idle
    }

    pub fn release(&mut self) -> Status {
        if let Mode::DragNode { active: Some(id) } = self.mode {
            self.mode = Mode::DragNode { active: None };
            return Status::DragFinished(id);
        }
        Status::Idle
    }

    /// Applies an externally supplied weight string to the edge armed by the
    /// last SetWeight click. The prompt disarms either way; click again to
    /// retry after a rejection.
    pub fn submit_weight(&mut self, text: &str) -> Status {
        let edge = match self.prompt.take() {
            Some(e) => e,
            None => return Status::Idle,
        };
        let weight: f32 = match text.trim().parse() {
            Ok(w) => w,
            Err(_) => return Status::WeightRejected(WeightError::UnparsableWeight),
        };
        match self.graph.set_weight(edge, weight) {
            Ok(()) => Status::WeightSet { edge, weight },
            Err(e) => Status::WeightRejected(e),
        }
    }

    pub fn compute_mst(&mut self) -> Status {
        match self.graph.compute_mst() {
            Ok(result) => {
                let status = Status::MstComputed {
                    edges: result.edges.len(),
                    total_weight: result.total_weight,
                };
                self.mst = Some(result);
                status
            }
            Err(e) => Status::MstRejected(e),
        }
    }

    pub fn clear_highlight(&mut self) -> Status {
        self.mst = None;
        Status::HighlightCleared
    }

    pub fn reset(&mut self) -> Status {
        self.graph.reset();
        self.mst = None;
        self.prompt = None;
        self.mode = Mode::AddNode;
        Status::Reset
    }
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new()
    }
}
