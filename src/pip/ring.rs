use super::point_on_segment;
use crate::models::Position;

/// Even-odd ray cast from `(px, py)` towards +x, boundary inclusive.
///
/// Works for closed and open rings alike: the wrap-around edge from the last
/// vertex back to the first is always tested, and is zero-length when the
/// ring is closed.
pub fn point_in_ring(px: f64, py: f64, ring: &[Position]) -> bool {
    if ring.is_empty() {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[j], ring[i]);

        if point_on_segment(px, py, a, b) {
            return true;
        }

        let [ax, ay] = a;
        let [bx, by] = b;
        if (by > py) != (ay > py) && px < (ax - bx) * (py - by) / (ay - by) + bx {
            inside = !inside;
        }
        j = i;
    }

    inside
}
