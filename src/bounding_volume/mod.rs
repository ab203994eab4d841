//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::footprint::Footprint;

#[doc(hidden)]
pub mod footprint;
mod footprint_ellipsoid;
mod footprint_triangle_ramp;
