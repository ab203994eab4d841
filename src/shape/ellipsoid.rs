//! Definition of the axis-aligned ellipsoid shape.

use crate::math::{GridPoint, Vector};
use core::ops::RangeInclusive;

/// An axis-aligned ellipsoid centered on a grid cell.
///
/// The ellipsoid is the set of offsets `(mx, my, mz)` from its center satisfying
/// `mx²/rx² + my²/ry² + mz²/rz² ≤ 1`. Membership is always evaluated on the
/// equivalent inequality multiplied through by `rx²·ry²·rz²` so that it stays
/// exact and well-defined when a radius is zero.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub struct Ellipsoid {
    /// The cell at the center of the ellipsoid.
    pub center: GridPoint,
    /// The radius of the ellipsoid along each axis.
    ///
    /// A radius of zero collapses the corresponding axis onto the center plane.
    pub radii: Vector<u16>,
}

impl Ellipsoid {
    /// Creates a new ellipsoid from its center and its radii along each axis.
    #[inline]
    pub fn new(center: GridPoint, radii: Vector<u16>) -> Self {
        Self { center, radii }
    }

    /// Creates a sphere, i.e., an ellipsoid with the same radius along every axis.
    #[inline]
    pub fn sphere(center: GridPoint, radius: u16) -> Self {
        Self::new(center, Vector::repeat(radius))
    }

    /// Is this ellipsoid a sphere?
    #[inline]
    pub fn is_sphere(&self) -> bool {
        self.radii.x == self.radii.y && self.radii.y == self.radii.z
    }

    /// The range of offsets scanned along the `x` axis.
    #[inline]
    pub fn x_offsets(&self) -> RangeInclusive<i32> {
        let r = i32::from(self.radii.x);
        -r..=r
    }

    /// The range of offsets scanned along the `y` axis.
    #[inline]
    pub fn y_offsets(&self) -> RangeInclusive<i32> {
        let r = i32::from(self.radii.y);
        -r..=r
    }

    /// The range of offsets scanned along the `z` axis.
    #[inline]
    pub fn z_offsets(&self) -> RangeInclusive<i32> {
        let r = i32::from(self.radii.z);
        -r..=r
    }

    /// Tests if the cell at `offset` from the center lies inside of, or on the boundary of, this ellipsoid.
    ///
    /// The test is `mx²·ry²·rz² + rx²·my²·rz² + rx²·ry²·mz² ≤ rx²·ry²·rz²`, computed
    /// exactly with 128-bit unsigned integers.
    pub fn contains_offset(&self, offset: &Vector<i32>) -> bool {
        let rx2 = square(self.radii.x.into());
        let ry2 = square(self.radii.y.into());
        let rz2 = square(self.radii.z.into());
        let mx2 = square(offset.x.unsigned_abs());
        let my2 = square(offset.y.unsigned_abs());
        let mz2 = square(offset.z.unsigned_abs());

        mx2 * ry2 * rz2 + rx2 * my2 * rz2 + rx2 * ry2 * mz2 <= rx2 * ry2 * rz2
    }

    /// Tests if the grid cell `pt` lies inside of, or on the boundary of, this ellipsoid.
    pub fn contains_point(&self, pt: &GridPoint) -> bool {
        let delta = |p: i32, c: i32| i32::try_from(i64::from(p) - i64::from(c));

        match (
            delta(pt.x, self.center.x),
            delta(pt.y, self.center.y),
            delta(pt.z, self.center.z),
        ) {
            (Ok(mx), Ok(my), Ok(mz)) => self.contains_offset(&Vector::new(mx, my, mz)),
            _ => false,
        }
    }

    /// The smallest and largest `y` offsets of the cells of the column at
    /// offset `(mx, mz)` from the center that are part of this ellipsoid.
    ///
    /// Every `y` offset in `[-ry, ry]` is tested. Returns `None` if the column
    /// does not intersect the ellipsoid.
    pub fn column_extent(&self, mx: i32, mz: i32) -> Option<(i32, i32)> {
        let mut extent: Option<(i32, i32)> = None;

        for my in self.y_offsets() {
            if self.contains_offset(&Vector::new(mx, my, mz)) {
                extent = Some(match extent {
                    Some((min, max)) => (min.min(my), max.max(my)),
                    None => (my, my),
                });
            }
        }

        extent
    }
}

#[inline]
fn square(v: u32) -> u128 {
    u128::from(v) * u128::from(v)
}
