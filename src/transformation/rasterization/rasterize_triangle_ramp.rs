use super::{RasterizationError, RasterizationStats, Span, SpanSink, TailDescriptor};
use crate::shape::TriangleRamp;

/// Rasterizes a triangular ramp into one vertical span per grid column of its footprint.
///
/// Every column of the ramp's [footprint](TriangleRamp::footprint) is scanned, `z` in
/// the outer loop and `x` in the inner loop. Each column inside of the closed
/// projection of the triangle gets a span going from the ramp's base height to
/// the height of the ramp plane above that column, clamped to the vertical range
/// of the grid and rounded down to the cell containing it.
///
/// The span endpoints are emitted in that literal order: if the plane lies below
/// the base height the span is descending. Ordering is left to the sink.
///
/// # Errors
///
/// Fails without emitting anything if the ramp plane is undefined
/// ([`RasterizationError::CollinearVertices`]) or vertical
/// ([`RasterizationError::VerticalPlane`]).
pub fn rasterize_triangle_ramp<S: SpanSink + ?Sized>(
    ramp: &TriangleRamp,
    tail: &TailDescriptor,
    sink: &mut S,
) -> Result<RasterizationStats, RasterizationError> {
    let plane = ramp.plane();

    if plane.is_degenerate() {
        log::warn!("Refusing to rasterize a ramp with collinear corners {:?}.", ramp.vertices());
        return Err(RasterizationError::CollinearVertices);
    }

    if plane.is_vertical() {
        log::warn!("Refusing to rasterize a ramp with a vertical plane {:?}.", ramp.vertices());
        return Err(RasterizationError::VerticalPlane);
    }

    let mut stats = RasterizationStats::default();
    let base_height = ramp.base_height();

    for column in ramp.footprint().columns() {
        stats.scanned_columns += 1;
        stats.inclusion_tests += 1;

        if !ramp.footprint_contains(&column) {
            continue;
        }

        let Some(top) = plane.cell_height_at(&column) else {
            // Unreachable: vertical planes were rejected above.
            continue;
        };
        let span = Span::new(column, base_height, top, tail.clone());

        log::trace!("Ramp span: {:?} -> {:?}", span.start, span.end);
        sink.accept(span);
        stats.emitted_spans += 1;
    }

    log::debug!(
        "Rasterized ramp {:?} from base height {}: {} spans over {} columns.",
        ramp.vertices(),
        base_height,
        stats.emitted_spans,
        stats.scanned_columns
    );

    Ok(stats)
}
