/// Error indicating that a shape has no well-defined rasterization.
///
/// No span is emitted for a shape that fails with this error.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RasterizationError {
    /// The three corners of a triangular ramp are collinear, so they do not define a plane.
    #[error("the ramp corners are collinear and do not define a plane")]
    CollinearVertices,
    /// The plane of a triangular ramp is vertical, so it has no height above its columns.
    #[error("the ramp plane is vertical and has no height above its footprint")]
    VerticalPlane,
}
