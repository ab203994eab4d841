use super::number::parse_coordinate;
use super::UsageError;
use crate::math::GridPoint;
use crate::shape::TriangleRamp;
use crate::transformation::rasterization::{
    self, RasterizationError, RasterizationStats, SpanSink, TailDescriptor,
};

/// A request to fill a triangular ramp, as parsed from its positional parameters.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangleRequest {
    /// The ramp to fill.
    pub ramp: TriangleRamp,
    /// The trailing parameters attached to every emitted span.
    pub tail: TailDescriptor,
}

impl TriangleRequest {
    /// The parameters accepted by a triangle request.
    pub const SYNOPSIS: &'static str = "<x1> <y1> <z1> <x2> <y2> <z2> <x3> <y3> <z3> <height> <tileName> [dataValue] [oldBlockHandling] [dataTag]";

    /// The minimum number of positional parameters of a triangle request.
    pub const REQUIRED_PARAMS: usize = 11;

    /// Creates a request from an already-built ramp.
    pub fn new(ramp: TriangleRamp, tail: TailDescriptor) -> Self {
        Self { ramp, tail }
    }

    /// Parses the positional parameters `x1 y1 z1 x2 y2 z2 x3 y3 z3 height tileName [...]`.
    ///
    /// The base height is clamped to the vertical range of the grid. Everything
    /// from `tileName` onward is joined into the tail descriptor, unparsed.
    pub fn parse<S: AsRef<str>>(command: &str, params: &[S]) -> Result<Self, UsageError> {
        if params.len() < Self::REQUIRED_PARAMS {
            return Err(UsageError::MissingParameters {
                command: command.to_string(),
                synopsis: Self::SYNOPSIS,
                required: Self::REQUIRED_PARAMS,
                found: params.len(),
            });
        }

        let coord = |i: usize| parse_coordinate(command, i + 1, params[i].as_ref());
        let corner = |i: usize| -> Result<GridPoint, UsageError> {
            Ok(GridPoint::new(coord(i)?, coord(i + 1)?, coord(i + 2)?))
        };

        let ramp = TriangleRamp::new(corner(0)?, corner(3)?, corner(6)?, coord(9)?);
        let tail = TailDescriptor::from_params(&params[10..]);

        Ok(Self::new(ramp, tail))
    }

    /// Rasterizes the requested ramp into `sink`.
    ///
    /// # Errors
    ///
    /// Fails without emitting anything if the ramp plane is degenerate or vertical.
    pub fn rasterize<S: SpanSink + ?Sized>(
        &self,
        sink: &mut S,
    ) -> Result<RasterizationStats, RasterizationError> {
        rasterization::rasterize_triangle_ramp(&self.ramp, &self.tail, sink)
    }
}
