use super::{RasterizationStats, Span, SpanSink, TailDescriptor};
use crate::math::GridColumn;
use crate::shape::Ellipsoid;
use crate::utils::clamp_to_grid_height;

/// Rasterizes an ellipsoid into one vertical span per grid column it intersects.
///
/// Every column offset `(mx, mz)` of the ellipsoid's [local footprint](Ellipsoid::local_footprint)
/// is scanned, `mz` in the outer loop and `mx` in the inner loop. For each of them,
/// every `y` offset in `[-ry, ry]` is tested against the ellipsoid and, if at least
/// one passes, a span going from the lowest to the highest passing cell is emitted,
/// with both heights clamped to the vertical range of the grid. The emitted spans
/// are thus never descending.
///
/// Columns that would fall outside of the representable grid are skipped.
pub fn rasterize_ellipsoid<S: SpanSink + ?Sized>(
    ellipsoid: &Ellipsoid,
    tail: &TailDescriptor,
    sink: &mut S,
) -> RasterizationStats {
    let mut stats = RasterizationStats::default();
    let tests_per_column = 2 * u64::from(ellipsoid.radii.y) + 1;
    let center = ellipsoid.center;

    for offset in ellipsoid.local_footprint().columns() {
        stats.scanned_columns += 1;
        stats.inclusion_tests += tests_per_column;

        let Some((min_my, max_my)) = ellipsoid.column_extent(offset.x, offset.y) else {
            continue;
        };

        let (Some(x), Some(z)) = (
            center.x.checked_add(offset.x),
            center.z.checked_add(offset.y),
        ) else {
            log::trace!("Skipping ellipsoid column outside of the grid at offset {offset:?}.");
            continue;
        };

        let y = i64::from(center.y);
        let y_start = clamp_to_grid_height(y + i64::from(min_my)) as i32;
        let y_end = clamp_to_grid_height(y + i64::from(max_my)) as i32;
        let span = Span::new(GridColumn::new(x, z), y_start, y_end, tail.clone());

        log::trace!("Ellipsoid span: {:?} -> {:?}", span.start, span.end);
        sink.accept(span);
        stats.emitted_spans += 1;
    }

    log::debug!(
        "Rasterized ellipsoid centered at {:?} with radii {:?}: {} spans over {} columns.",
        center,
        ellipsoid.radii,
        stats.emitted_spans,
        stats.scanned_columns
    );

    stats
}
