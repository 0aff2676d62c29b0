//! Planar geometry for straight-line flight paths.
//!
//! Flight paths are line segments between projected airport coordinates.
//! Intersection testing uses the standard orientation predicate with exact
//! floating-point zero as the collinearity test; near-parallel segments get
//! no epsilon tolerance, and degenerate inputs propagate NaN/Inf instead of
//! signalling errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in the planar coordinate system with an existence flag.
///
/// `exists = false` is the first-class "no intersection" sentinel, distinct
/// from the origin point `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub exists: bool,
}

impl Point {
    /// Create a point with real coordinates
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, exists: true }
    }

    /// The "no intersection" sentinel
    #[must_use]
    pub fn missing() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            exists: false,
        }
    }

    /// Euclidean distance to another point
    #[must_use]
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exists {
            write!(f, "({}, {})", self.x, self.y)
        } else {
            write!(f, "no intersection")
        }
    }
}

/// Orientation of an ordered point triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Determine the orientation of the triple `(p, q, r)` from the sign of the
/// cross product `(q - p) × (r - q)`.
///
/// Exact floating-point zero is the only collinearity detection.
#[must_use]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val > 0.0 {
        Orientation::Clockwise
    } else if val < 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

/// Check whether `q` lies within the bounding box of the segment `p`–`r`.
///
/// Only meaningful when the three points are already known to be collinear.
#[must_use]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Check if segment `a`–`b` intersects segment `c`–`d`.
///
/// True when the four orientation triples show the segments straddling each
/// other, or when an endpoint is collinear with and contained in the other
/// segment's bounding box. Segments sharing a single endpoint intersect.
#[must_use]
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    if o1 != o2 && o3 != o4 {
        true
    } else if o1 == Orientation::Collinear && on_segment(a, c, b) {
        true
    } else if o2 == Orientation::Collinear && on_segment(a, d, b) {
        true
    } else if o3 == Orientation::Collinear && on_segment(c, a, d) {
        true
    } else {
        o4 == Orientation::Collinear && on_segment(c, b, d)
    }
}

/// Find the intersection point of segments `a`–`b` and `c`–`d`.
///
/// Solves the two-line system with the determinant formula. Returns
/// [`Point::missing`] when the segments do not intersect. When the segments
/// only touch through a collinear overlap, the denominator is zero and the
/// coordinates come out NaN/Inf; this is propagated, not trapped.
#[must_use]
pub fn intersection_point(a: Point, b: Point, c: Point, d: Point) -> Point {
    if !segments_intersect(a, b, c, d) {
        return Point::missing();
    }

    let det_ab = a.x * b.y - a.y * b.x;
    let det_cd = c.x * d.y - c.y * d.x;
    let denom = (a.x - b.x) * (c.y - d.y) - (a.y - b.y) * (c.x - d.x);

    Point::new(
        (det_ab * (c.x - d.x) - (a.x - b.x) * det_cd) / denom,
        (det_ab * (c.y - d.y) - (a.y - b.y) * det_cd) / denom,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_missing_is_not_origin() {
        let missing = Point::missing();
        let origin = Point::new(0.0, 0.0);
        assert!(!missing.exists);
        assert!(origin.exists);
        assert_ne!(missing, origin);
    }

    #[test]
    fn test_distance_to() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_orientation_triples() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(1.0, 0.0);
        assert_eq!(
            orientation(p, q, Point::new(2.0, 1.0)),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation(p, q, Point::new(2.0, -1.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation(p, q, Point::new(2.0, 0.0)),
            Orientation::Collinear
        );
    }

    #[test]
    fn test_crossing_segments_intersect() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 2.0);
        let c = Point::new(0.0, 2.0);
        let d = Point::new(2.0, 0.0);
        assert!(segments_intersect(a, b, c, d));

        let point = intersection_point(a, b, c, d);
        assert!(point.exists);
        assert!((point.x - 1.0).abs() < 1e-12);
        assert!((point.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_intersection_is_symmetric() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 1.0);
        let c = Point::new(1.0, 3.0);
        let d = Point::new(2.0, -2.0);
        assert_eq!(segments_intersect(a, b, c, d), segments_intersect(c, d, a, b));

        let e = Point::new(5.0, 5.0);
        let f = Point::new(6.0, 9.0);
        assert_eq!(segments_intersect(a, b, e, f), segments_intersect(e, f, a, b));
    }

    #[test]
    fn test_shared_endpoint_intersects_at_endpoint() {
        let shared = Point::new(1.0, 1.0);
        let a = Point::new(0.0, 0.0);
        let c = Point::new(2.0, 0.0);
        assert!(segments_intersect(a, shared, shared, c));

        let point = intersection_point(a, shared, shared, c);
        assert!(point.exists);
        assert!((point.x - shared.x).abs() < 1e-12);
        assert!((point.y - shared.y).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_parallel_segments() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 0.0);
        let c = Point::new(0.0, 1.0);
        let d = Point::new(2.0, 1.0);
        assert!(!segments_intersect(a, b, c, d));
        assert!(!intersection_point(a, b, c, d).exists);
    }

    #[test]
    fn test_collinear_overlap_reports_intersection() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 0.0);
        let c = Point::new(1.0, 0.0);
        let d = Point::new(5.0, 0.0);
        assert!(segments_intersect(a, b, c, d));

        // Coincident lines make the denominator zero; the coordinates are
        // non-finite but the point still reports existence.
        let point = intersection_point(a, b, c, d);
        assert!(point.exists);
        assert!(!point.x.is_finite() || !point.y.is_finite());
    }

    #[test]
    fn test_separated_collinear_segments_do_not_intersect() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(2.0, 0.0);
        let d = Point::new(3.0, 0.0);
        assert!(!segments_intersect(a, b, c, d));
    }

    #[test]
    fn test_endpoint_touching_segment_interior() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        let c = Point::new(2.0, 0.0);
        let d = Point::new(2.0, 3.0);
        assert!(segments_intersect(a, b, c, d));

        let point = intersection_point(a, b, c, d);
        assert!(point.exists);
        assert!((point.x - 2.0).abs() < 1e-12);
        assert!(point.y.abs() < 1e-12);
    }
}
