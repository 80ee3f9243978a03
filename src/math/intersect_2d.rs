use super::vector_2d::cross;
use super::Point2;

/// Returns `true` if the axis-aligned bounding boxes of segments `a0a1` and
/// `b0b1` overlap. Touching boxes overlap.
#[must_use]
pub fn bboxes_overlap_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    ranges_overlap(a0.x, a1.x, b0.x, b1.x) && ranges_overlap(a0.y, a1.y, b0.y, b1.y)
}

fn ranges_overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> bool {
    let (min_a, max_a) = (a0.min(a1), a0.max(a1));
    let (min_b, max_b) = (b0.min(b1), b0.max(b1));
    !(max_a < min_b || max_b < min_a)
}

/// Returns `true` unless both `q0` and `q1` lie strictly on the same side of
/// the infinite line through `p0p1`.
///
/// An endpoint on the line (zero cross product) never rules out a crossing.
#[must_use]
pub fn straddles_line_2d(p0: &Point2, p1: &Point2, q0: &Point2, q1: &Point2) -> bool {
    let dir = p1 - p0;
    cross(&(p0 - q0), &dir) * cross(&(p0 - q1), &dir) <= 0.0
}

/// Closed segment-segment intersection predicate.
///
/// Shared endpoints and collinear overlaps count as intersecting. The result
/// does not depend on argument order.
#[must_use]
pub fn segments_intersect_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    bboxes_overlap_2d(a0, a1, b0, b1)
        && straddles_line_2d(a0, a1, b0, b1)
        && straddles_line_2d(b0, b1, a0, a1)
}
