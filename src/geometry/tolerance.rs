// Centralized tolerances and interaction geometry.

pub const EPS_LEN: f32 = 1e-6; // zero-length vector threshold

// Hit regions match the canvas geometry of the rendering collaborator.
pub const NODE_RADIUS: f32 = 15.0; // circular node hit region (px)
pub const EDGE_PICK_TOL: f32 = 8.0; // default point-to-edge threshold (px)

// Weight labels sit on an ellipse offset perpendicular to the edge midpoint.
pub const LABEL_OFFSET: f32 = 20.0; // midpoint offset along the left normal (px)
pub const LABEL_RX: f32 = 20.0; // ellipse semi-axis along x (px)
pub const LABEL_RY: f32 = 12.0; // ellipse semi-axis along y (px)
