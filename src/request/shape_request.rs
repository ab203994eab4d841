use super::{EllipsoidRequest, TriangleRequest, UsageError};
use crate::transformation::rasterization::{RasterizationError, RasterizationStats, SpanSink};

/// A parsed request for any of the supported shapes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeRequest {
    /// A request to fill an ellipsoid.
    Ellipsoid(EllipsoidRequest),
    /// A request to fill a triangular ramp.
    Triangle(TriangleRequest),
}

impl ShapeRequest {
    /// Parses the positional parameters of the shape named by `command`.
    ///
    /// `command` is matched case-insensitively against `ellipsoid` and `triangle`.
    pub fn parse<S: AsRef<str>>(command: &str, params: &[S]) -> Result<Self, UsageError> {
        match command.to_ascii_lowercase().as_str() {
            "ellipsoid" => EllipsoidRequest::parse(command, params).map(Self::Ellipsoid),
            "triangle" => TriangleRequest::parse(command, params).map(Self::Triangle),
            _ => Err(UsageError::UnknownShape {
                command: command.to_string(),
            }),
        }
    }

    /// Rasterizes the requested shape into `sink`.
    ///
    /// Either every span of the shape is emitted, or none is and an error is returned.
    pub fn rasterize<S: SpanSink + ?Sized>(
        &self,
        sink: &mut S,
    ) -> Result<RasterizationStats, RasterizationError> {
        match self {
            Self::Ellipsoid(request) => Ok(request.rasterize(sink)),
            Self::Triangle(request) => request.rasterize(sink),
        }
    }
}

impl From<EllipsoidRequest> for ShapeRequest {
    fn from(request: EllipsoidRequest) -> Self {
        Self::Ellipsoid(request)
    }
}

impl From<TriangleRequest> for ShapeRequest {
    fn from(request: TriangleRequest) -> Self {
        Self::Triangle(request)
    }
}
