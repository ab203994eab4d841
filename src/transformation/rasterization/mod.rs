//! Rasterization of shapes into vertical spans of voxel-grid cells.
//!
//! A rasterizer scans the footprint of a shape column by column, `z` in the
//! outer loop and `x` in the inner loop, and hands at most one [`Span`] per
//! column to a [`SpanSink`]. The whole footprint is always scanned eagerly.

pub use self::error::RasterizationError;
pub use self::fill_command::{FillCommand, FillCommandFormat, FillCommands};
pub use self::rasterize_ellipsoid::rasterize_ellipsoid;
pub use self::rasterize_triangle_ramp::rasterize_triangle_ramp;
pub use self::sink::{from_fn, FnSink, SpanSink};
pub use self::span::{Span, TailDescriptor};
pub use self::stats::RasterizationStats;

mod error;
mod fill_command;
mod rasterize_ellipsoid;
mod rasterize_triangle_ramp;
mod sink;
mod span;
mod stats;
