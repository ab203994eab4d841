//! Definition of the triangular ramp shape and of its supporting plane.

use crate::math::{GridColumn, GridPoint, Real, Vector};
use crate::utils::{self, clamp_to_grid_height};

/// The plane `a·x + b·y + c·z = d` passing through the three corners of a [`TriangleRamp`].
///
/// The coefficients are computed exactly, with 128-bit integers, from the
/// integer corners: `(a, b, c)` is the (non-normalized) cross product of two
/// edges of the triangle and `d` its dot product with the first corner.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub struct RampPlane {
    /// The plane coefficients `(a, b, c)`, i.e., its non-normalized normal.
    pub scaled_normal: Vector<i128>,
    /// The plane coefficient `d`.
    pub offset: i128,
}

impl RampPlane {
    /// Computes the plane passing through `p1`, `p2` and `p3`.
    pub fn from_points(p1: &GridPoint, p2: &GridPoint, p3: &GridPoint) -> Self {
        let p1 = widen(p1);
        let p2 = widen(p2);
        let p3 = widen(p3);
        let scaled_normal = (p2 - p1).cross(&(p3 - p1));
        let offset = scaled_normal.dot(&p1);

        Self {
            scaled_normal,
            offset,
        }
    }

    /// Is this plane undefined because the points it was built from are collinear?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.scaled_normal == Vector::zeros()
    }

    /// Is this plane vertical, i.e., parallel to the `y` axis?
    ///
    /// A vertical plane does not define a unique height for a column. Note that a
    /// degenerate plane is considered vertical too.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.scaled_normal.y == 0
    }

    /// Tests if the grid point `pt` lies exactly on this plane.
    pub fn contains_point(&self, pt: &GridPoint) -> bool {
        self.scaled_normal.dot(&widen(pt)) == self.offset
    }

    /// The height `y = (d - a·x - c·z) / b` of this plane above the column `(x, z)`.
    ///
    /// The numerator is computed exactly before the division. The result is
    /// infinite or NaN if the plane [is vertical](Self::is_vertical).
    pub fn height_at(&self, column: &GridColumn) -> Real {
        self.height_numerator_at(column) as Real / self.scaled_normal.y as Real
    }

    /// The `y` coordinate of the grid cell containing this plane above the column
    /// `(x, z)`, clamped to the vertical range of the grid.
    ///
    /// This is `⌊(d - a·x - c·z) / b⌋` computed exactly with integers, so whole
    /// heights are never rounded down to the cell below. Returns `None` if the
    /// plane [is vertical](Self::is_vertical).
    pub fn cell_height_at(&self, column: &GridColumn) -> Option<i32> {
        let mut numerator = self.height_numerator_at(column);
        let mut denominator = self.scaled_normal.y;

        if denominator == 0 {
            return None;
        }

        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        let height = clamp_to_grid_height(numerator.div_euclid(denominator));
        i32::try_from(height).ok()
    }

    #[inline]
    fn height_numerator_at(&self, column: &GridColumn) -> i128 {
        let x = i128::from(column.x);
        let z = i128::from(column.y);
        self.offset - self.scaled_normal.x * x - self.scaled_normal.z * z
    }
}

#[inline]
fn widen(pt: &GridPoint) -> Vector<i128> {
    Vector::new(i128::from(pt.x), i128::from(pt.y), i128::from(pt.z))
}

/// A ramp rising from a flat base up to the plane through the three corners of a triangle.
///
/// Seen from above, the ramp covers the projection of the triangle onto the
/// `(x, z)` plane. The `y` coordinates of the corners only shape the sloped top
/// of the ramp.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub struct TriangleRamp {
    /// The first corner of the triangle.
    pub a: GridPoint,
    /// The second corner of the triangle.
    pub b: GridPoint,
    /// The third corner of the triangle.
    pub c: GridPoint,
    base_height: i32,
}

impl TriangleRamp {
    /// Creates a new ramp from the three corners of its sloped top and its base height.
    ///
    /// The base height is clamped to the vertical range of the grid.
    #[inline]
    pub fn new(a: GridPoint, b: GridPoint, c: GridPoint, base_height: i32) -> Self {
        Self {
            a,
            b,
            c,
            base_height: clamp_to_grid_height(base_height),
        }
    }

    /// The base height of this ramp, always within the vertical range of the grid.
    #[inline]
    pub fn base_height(&self) -> i32 {
        self.base_height
    }

    /// The three corners of this ramp's triangle.
    #[inline]
    pub fn vertices(&self) -> [GridPoint; 3] {
        [self.a, self.b, self.c]
    }

    /// The projection of the triangle corners onto the `(x, z)` plane.
    #[inline]
    pub fn projected_vertices(&self) -> [GridColumn; 3] {
        [
            GridColumn::new(self.a.x, self.a.z),
            GridColumn::new(self.b.x, self.b.z),
            GridColumn::new(self.c.x, self.c.z),
        ]
    }

    /// The plane supporting the sloped top of this ramp.
    #[inline]
    pub fn plane(&self) -> RampPlane {
        RampPlane::from_points(&self.a, &self.b, &self.c)
    }

    /// Tests if the given column lies inside of the closed projection of the triangle.
    #[inline]
    pub fn footprint_contains(&self, column: &GridColumn) -> bool {
        let [a, b, c] = self.projected_vertices();
        utils::is_point_in_closed_triangle(column, &a, &b, &c)
    }
}
