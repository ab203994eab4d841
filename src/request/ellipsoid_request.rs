use super::number::{parse_coordinate, parse_radius};
use super::UsageError;
use crate::math::{GridPoint, Vector};
use crate::shape::Ellipsoid;
use crate::transformation::rasterization::{
    self, RasterizationStats, SpanSink, TailDescriptor,
};

/// A request to fill an ellipsoid, as parsed from its positional parameters.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EllipsoidRequest {
    /// The ellipsoid to fill.
    pub ellipsoid: Ellipsoid,
    /// The trailing parameters attached to every emitted span.
    pub tail: TailDescriptor,
}

impl EllipsoidRequest {
    /// The parameters accepted by an ellipsoid request.
    pub const SYNOPSIS: &'static str =
        "<x1> <y1> <z1> <rx> <ry> <rz> <tileName> [dataValue] [oldBlockHandling] [dataTag]";

    /// The minimum number of positional parameters of an ellipsoid request.
    pub const REQUIRED_PARAMS: usize = 7;

    /// Creates a request from an already-built ellipsoid.
    pub fn new(ellipsoid: Ellipsoid, tail: TailDescriptor) -> Self {
        Self { ellipsoid, tail }
    }

    /// Parses the positional parameters `x y z rx ry rz tileName [...]`.
    ///
    /// `command` is the name the request was invoked with; it only appears in
    /// error messages. Everything from `tileName` onward is joined into the tail
    /// descriptor, unparsed.
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
        let radius = |i: usize| parse_radius(command, i + 1, params[i].as_ref());

        let center = GridPoint::new(coord(0)?, coord(1)?, coord(2)?);
        let radii = Vector::new(radius(3)?, radius(4)?, radius(5)?);
        let tail = TailDescriptor::from_params(&params[6..]);

        Ok(Self::new(Ellipsoid::new(center, radii), tail))
    }

    /// Rasterizes the requested ellipsoid into `sink`.
    pub fn rasterize<S: SpanSink + ?Sized>(&self, sink: &mut S) -> RasterizationStats {
        rasterization::rasterize_ellipsoid(&self.ellipsoid, &self.tail, sink)
    }
}
