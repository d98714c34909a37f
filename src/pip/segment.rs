use crate::models::Position;

/// Cross-product magnitude below which a point counts as colinear.
pub const SEGMENT_EPSILON: f64 = 1e-9;

/// Whether `(px, py)` lies on the segment `a`-`b`, endpoints included.
pub fn point_on_segment(px: f64, py: f64, a: Position, b: Position) -> bool {
    let (dx, dy) = (b[0] - a[0], b[1] - a[1]);
    let (qx, qy) = (px - a[0], py - a[1]);

    let cross = dx * qy - dy * qx;
    if cross.abs() > SEGMENT_EPSILON {
        return false;
    }

    let dot = qx * dx + qy * dy;
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        // Degenerate segment: only its single point is on it.
        return qx == 0.0 && qy == 0.0;
    }
    (0.0..=length_sq).contains(&dot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_and_endpoints() {
        assert!(point_on_segment(2.0, 0.0, [0.0, 0.0], [4.0, 0.0]));
        assert!(point_on_segment(0.0, 0.0, [0.0, 0.0], [4.0, 0.0]));
        assert!(point_on_segment(4.0, 0.0, [0.0, 0.0], [4.0, 0.0]));
        assert!(point_on_segment(1.0, 1.0, [0.0, 0.0], [2.0, 2.0]));
    }

    #[test]
    fn test_colinear_but_outside_bounds() {
        assert!(!point_on_segment(5.0, 0.0, [0.0, 0.0], [4.0, 0.0]));
        assert!(!point_on_segment(-0.5, 0.0, [0.0, 0.0], [4.0, 0.0]));
    }

    #[test]
    fn test_off_line() {
        assert!(!point_on_segment(2.0, 0.1, [0.0, 0.0], [4.0, 0.0]));
    }

    #[test]
    fn test_decimal_degrees_edge() {
        // Midpoint of a real-world edge whose coordinates are not exact in binary.
        assert!(point_on_segment(2.35, 48.8, [2.3, 48.8], [2.4, 48.8]));
        assert!(point_on_segment(2.4, 48.85, [2.4, 48.8], [2.4, 48.9]));
    }

    #[test]
    fn test_degenerate_segment() {
        assert!(point_on_segment(1.0, 1.0, [1.0, 1.0], [1.0, 1.0]));
        assert!(!point_on_segment(1.0, 1.5, [1.0, 1.0], [1.0, 1.0]));
    }
}
