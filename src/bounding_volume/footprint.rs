//! Integer axis-aligned bounding rectangle of grid columns.

use crate::math::GridColumn;

/// An axis-aligned rectangle of grid columns, bounds included.
///
/// A footprint is the projection of a shape's bounding box onto the `(x, z)`
/// plane. Its `mins` and `maxs` store the `x` coordinate in their first
/// component and the `z` coordinate in their second component.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use voxfill3d::bounding_volume::Footprint;
/// use voxfill3d::math::GridColumn;
///
/// let footprint = Footprint::new(GridColumn::new(-1, 0), GridColumn::new(1, 1));
/// assert_eq!(footprint.num_columns(), 6);
///
/// // Columns are visited row by row: `z` in the outer loop, `x` in the inner one.
/// let first: Vec<_> = footprint.columns().take(4).collect();
/// assert_eq!(first[3], GridColumn::new(-1, 1));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Footprint {
    /// The column with the smallest `x` and `z` coordinates.
    pub mins: GridColumn,
    /// The column with the largest `x` and `z` coordinates.
    pub maxs: GridColumn,
}

impl Footprint {
    /// Creates a new footprint from its corners.
    ///
    /// The footprint is empty if `mins` is greater than `maxs` along any axis.
    #[inline]
    pub fn new(mins: GridColumn, maxs: GridColumn) -> Self {
        Self { mins, maxs }
    }

    /// The smallest footprint containing all the given columns.
    ///
    /// Returns `None` if `columns` is empty.
    pub fn from_columns<'a, I>(columns: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a GridColumn>,
    {
        let mut it = columns.into_iter();
        let first = *it.next()?;

        Some(it.fold(Self::new(first, first), |acc, c| {
            Self::new(acc.mins.inf(c), acc.maxs.sup(c))
        }))
    }

    /// Is this footprint free of any column?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mins.x > self.maxs.x || self.mins.y > self.maxs.y
    }

    /// The number of columns covered by this footprint.
    pub fn num_columns(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            let width = (i64::from(self.maxs.x) - i64::from(self.mins.x) + 1) as u64;
            let depth = (i64::from(self.maxs.y) - i64::from(self.mins.y) + 1) as u64;
            width.saturating_mul(depth)
        }
    }

    /// Tests if the given column is part of this footprint.
    #[inline]
    pub fn contains_column(&self, column: &GridColumn) -> bool {
        column.x >= self.mins.x
            && column.x <= self.maxs.x
            && column.y >= self.mins.y
            && column.y <= self.maxs.y
    }

    /// Iterates through all the columns of this footprint.
    ///
    /// Columns are yielded with `z` in the outer loop and `x` in the inner loop,
    /// both increasing.
    pub fn columns(&self) -> impl Iterator<Item = GridColumn> {
        let (mins, maxs) = (self.mins, self.maxs);

        (mins.y..=maxs.y).flat_map(move |z| (mins.x..=maxs.x).map(move |x| GridColumn::new(x, z)))
    }
}
