//! Shapes that can be rasterized into voxel spans.

pub use self::ellipsoid::Ellipsoid;
pub use self::triangle_ramp::{RampPlane, TriangleRamp};

mod ellipsoid;
mod triangle_ramp;
