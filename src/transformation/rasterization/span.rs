use crate::math::{GridColumn, GridPoint};
use std::fmt;
use std::sync::Arc;

/// The opaque trailing parameters forwarded, untouched, with every emitted span.
///
/// This typically holds the block type followed by the optional data value,
/// replace mode and data tag understood by the fill executor. It is never parsed
/// here. Cloning a tail descriptor is cheap: all the spans of a shape share the
/// same underlying string.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TailDescriptor(Arc<str>);

impl TailDescriptor {
    /// Creates a tail descriptor from its already-joined text.
    pub fn new(text: &str) -> Self {
        Self(Arc::from(text))
    }

    /// Joins the given trailing parameters with single spaces.
    pub fn from_params<S: AsRef<str>>(params: &[S]) -> Self {
        let joined = params
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self(Arc::from(joined))
    }

    /// The text of this descriptor.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Is this descriptor empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TailDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Default for TailDescriptor {
    fn default() -> Self {
        Self::new("")
    }
}

impl From<&str> for TailDescriptor {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// A vertical run of grid cells sharing the same `(x, z)` column.
///
/// The run goes from `start` to `end`, both included. Nothing guarantees that
/// `start.y ≤ end.y`: spans emitted for a triangular ramp keep the base height
/// first even when the ramp top lies below it. Use [`Span::normalized`] to get
/// an ordered span.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    /// The first cell of the span.
    pub start: GridPoint,
    /// The last cell of the span.
    pub end: GridPoint,
    /// The trailing parameters of the shape that produced this span.
    pub tail: TailDescriptor,
}

impl Span {
    /// Creates the span of the column `(x, z)` going from `y_start` to `y_end`.
    #[inline]
    pub fn new(column: GridColumn, y_start: i32, y_end: i32, tail: TailDescriptor) -> Self {
        Self {
            start: GridPoint::new(column.x, y_start, column.y),
            end: GridPoint::new(column.x, y_end, column.y),
            tail,
        }
    }

    /// The `(x, z)` column of this span.
    #[inline]
    pub fn column(&self) -> GridColumn {
        GridColumn::new(self.start.x, self.start.z)
    }

    /// Does this span go downward, i.e., is `start.y > end.y`?
    #[inline]
    pub fn is_descending(&self) -> bool {
        self.start.y > self.end.y
    }

    /// The number of cells covered by this span.
    #[inline]
    pub fn height(&self) -> u64 {
        u64::from(self.start.y.abs_diff(self.end.y)) + 1
    }

    /// This span with its endpoints reordered so that `start.y ≤ end.y`.
    pub fn normalized(&self) -> Self {
        if self.is_descending() {
            Self {
                start: self.end,
                end: self.start,
                tail: self.tail.clone(),
            }
        } else {
            self.clone()
        }
    }
}
