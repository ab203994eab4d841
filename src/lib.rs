/*!
voxfill
========

**voxfill** turns continuous solids (axis-aligned ellipsoids and triangular
ramps) into vertical spans of cells on a bounded integer voxel grid, written
with the rust programming language.

The spans are handed to a [`SpanSink`](crate::transformation::rasterization::SpanSink)
which is responsible for the actual world mutation.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod request;
pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used to evaluate plane heights.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used to evaluate plane heights.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, Point3, Vector3};

    /// The vector type.
    pub use Vector3 as Vector;

    /// The integer coordinates of a cell of the voxel grid.
    pub type GridPoint = Point3<i32>;

    /// The integer coordinates of a grid column, i.e., the `(x, z)` projection of a cell.
    pub type GridColumn = Point2<i32>;

    /// The lowest valid `y` coordinate of the voxel grid.
    pub const GRID_MIN_HEIGHT: u8 = 0;

    /// The highest valid `y` coordinate of the voxel grid.
    pub const GRID_MAX_HEIGHT: u8 = 255;
}
