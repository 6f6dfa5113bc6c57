use super::tolerance::{EPS_LEN, LABEL_OFFSET};

/// Squared distance from (px,py) to segment (x1,y1)-(x2,y2), plus the
/// projection parameter clamped to [0,1].
pub fn seg_distance_sq(px: f32, py: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> (f32, f32) {
    let vx = x2 - x1;
    let vy = y2 - y1;
    let wx = px - x1;
    let wy = py - y1;
    let vv = vx * vx + vy * vy;
    let mut t = if vv > 0.0 { (wx * vx + wy * vy) / vv } else { 0.0 };
    if t < 0.0 {
        t = 0.0;
    } else if t > 1.0 {
        t = 1.0;
    }
    let projx = x1 + t * vx;
    let projy = y1 + t * vy;
    let dx = px - projx;
    let dy = py - projy;
    (dx * dx + dy * dy, t)
}

/// Center of an edge's weight label: the midpoint pushed LABEL_OFFSET along
/// the left perpendicular. A zero-length edge keeps the label at the midpoint.
pub fn label_center(x1: f32, y1: f32, x2: f32, y2: f32) -> (f32, f32) {
    let mx = (x1 + x2) * 0.5;
    let my = (y1 + y2) * 0.5;
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len = (dx * dx + dy * dy).sqrt();
    if len <= EPS_LEN {
        return (mx, my);
    }
    (mx - dy / len * LABEL_OFFSET, my + dx / len * LABEL_OFFSET)
}

/// Canonical ellipse containment: ((x-cx)/rx)^2 + ((y-cy)/ry)^2 <= 1.
pub fn in_ellipse(px: f32, py: f32, cx: f32, cy: f32, rx: f32, ry: f32) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let nx = (px - cx) / rx;
    let ny = (py - cy) / ry;
    nx * nx + ny * ny <= 1.0
}
