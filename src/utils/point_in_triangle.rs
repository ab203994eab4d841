//! Function to check if a grid column is inside a triangle and related functions.

use crate::math::{GridColumn, Point2};

#[derive(Eq, PartialEq, Debug, Copy, Clone)]
/// The side of an oriented line a point lies on.
pub enum Orientation {
    /// On the left of the line (counter-clockwise turn).
    Ccw,
    /// On the right of the line (clockwise turn).
    Cw,
    /// Exactly on the line.
    None,
}

#[inline]
fn widen(p: &GridColumn) -> Point2<i128> {
    Point2::new(i128::from(p.x), i128::from(p.y))
}

/// Returns the side of the line through `a` and `b` (oriented from `a` to `b`)
/// the point `p` lies on.
///
/// This is the sign of the 2D cross product `(b - a) × (p - a)`, computed
/// exactly so it never overflows for any `i32` coordinates.
///
/// ```text
///         o p (Ccw)
///
/// a o---------->o b
///
///         o p (Cw)
/// ```
pub fn side_of_line(a: &GridColumn, b: &GridColumn, p: &GridColumn) -> Orientation {
    let (a, b, p) = (widen(a), widen(b), widen(p));
    let cross = (b - a).perp(&(p - a));

    match cross.cmp(&0) {
        core::cmp::Ordering::Greater => Orientation::Ccw,
        core::cmp::Ordering::Equal => Orientation::None,
        core::cmp::Ordering::Less => Orientation::Cw,
    }
}

/// Returns `true` if `p1` and `p2` lie on the same side of the line through `a` and `b`.
///
/// A point exactly on the line counts as being on the same side as any other point.
#[inline]
pub fn same_side(p1: &GridColumn, p2: &GridColumn, a: &GridColumn, b: &GridColumn) -> bool {
    let s1 = side_of_line(a, b, p1);
    let s2 = side_of_line(a, b, p2);
    s1 == Orientation::None || s2 == Orientation::None || s1 == s2
}

/// Returns `true` if `p` is inside of the closed triangle with corners `v1`, `v2` and `v3`.
///
/// Points on the boundary of the triangle are considered inside. The triangle may
/// have any winding. No special treatment is applied to degenerate triangles: if
/// the three corners are aligned, every point of their line passes the test.
pub fn is_point_in_closed_triangle(
    p: &GridColumn,
    v1: &GridColumn,
    v2: &GridColumn,
    v3: &GridColumn,
) -> bool {
    same_side(p, v1, v2, v3) && same_side(p, v2, v3, v1) && same_side(p, v3, v1, v2)
}
