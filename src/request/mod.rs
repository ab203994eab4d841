//! Shape requests parsed from positional parameters.
//!
//! Each shape is invoked with a fixed list of numeric parameters followed by
//! free-form trailing parameters (block type, data value, replace mode, data
//! tag...). The trailing parameters are never interpreted: they are joined into
//! a [`TailDescriptor`](crate::transformation::rasterization::TailDescriptor)
//! attached to every emitted span.

pub use self::ellipsoid_request::EllipsoidRequest;
pub use self::error::UsageError;
pub use self::number::parse_number;
pub use self::shape_request::ShapeRequest;
pub use self::triangle_request::TriangleRequest;

mod ellipsoid_request;
mod error;
mod number;
mod shape_request;
mod triangle_request;
