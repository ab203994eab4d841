use std::collections::HashSet;
use voxfill3d::math::{GridColumn, GridPoint, Vector};
use voxfill3d::shape::Ellipsoid;
use voxfill3d::transformation::rasterization::{self, Span, TailDescriptor};
use voxfill3d::utils::clamp_to_grid_height;

fn rasterize(e: &Ellipsoid) -> Vec<Span> {
    let mut spans = Vec::new();
    let _ = rasterization::rasterize_ellipsoid(e, &TailDescriptor::new("stone"), &mut spans);
    spans
}

#[test]
fn emitted_spans_satisfy_the_membership_test() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..200 {
        let center = GridPoint::new(
            rng.rand_range(0..40) as i32 - 20,
            rng.rand_range(0..300) as i32 - 20,
            rng.rand_range(0..40) as i32 - 20,
        );
        let radii = Vector::new(
            rng.rand_range(0..7) as u16,
            rng.rand_range(0..7) as u16,
            rng.rand_range(0..7) as u16,
        );
        let e = Ellipsoid::new(center, radii);
        let footprint = e.footprint();

        for span in rasterize(&e) {
            let mx = span.start.x - center.x;
            let mz = span.start.z - center.z;

            assert!(footprint.contains_column(&span.column()));
            assert!(span.start.y <= span.end.y);
            assert!(span.start.y >= 0 && span.end.y <= 255);
            assert_eq!(span.tail.as_str(), "stone");

            let (min_my, max_my) = e.column_extent(mx, mz).unwrap();
            assert!(e.contains_offset(&Vector::new(mx, min_my, mz)));
            assert!(e.contains_offset(&Vector::new(mx, max_my, mz)));
            assert!(e.y_offsets().contains(&min_my) && e.y_offsets().contains(&max_my));
            assert_eq!(span.start.y, clamp_to_grid_height(center.y + min_my));
            assert_eq!(span.end.y, clamp_to_grid_height(center.y + max_my));
        }
    }
}

#[test]
fn sphere_footprint_is_symmetric() {
    for r in 0..8 {
        let sphere = Ellipsoid::sphere(GridPoint::new(0, 128, 0), r);
        let columns: HashSet<GridColumn> = rasterize(&sphere).iter().map(Span::column).collect();

        assert!(!columns.is_empty());
        for c in &columns {
            for image in [
                GridColumn::new(-c.x, c.y),
                GridColumn::new(c.x, -c.y),
                GridColumn::new(-c.x, -c.y),
                GridColumn::new(c.y, c.x),
                GridColumn::new(-c.y, c.x),
                GridColumn::new(c.y, -c.x),
                GridColumn::new(-c.y, -c.x),
            ] {
                assert!(columns.contains(&image), "r = {r}, missing {image:?}");
            }
        }
    }
}

#[test]
fn spans_follow_the_scan_order() {
    let e = Ellipsoid::new(GridPoint::new(7, 50, 3), Vector::new(4, 2, 3));
    let spans = rasterize(&e);
    let keys: Vec<_> = spans.iter().map(|s| (s.start.z, s.start.x)).collect();
    let mut sorted = keys.clone();
    sorted.sort();

    assert_eq!(keys, sorted);
}

#[test]
fn zero_radii_emit_the_center_cell() {
    for y in [-10, 0, 64, 255, 400] {
        let spans = rasterize(&Ellipsoid::new(GridPoint::new(3, y, -9), Vector::zeros()));
        let expected = clamp_to_grid_height(y);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, GridPoint::new(3, expected, -9));
        assert_eq!(spans[0].end, GridPoint::new(3, expected, -9));
    }
}

#[test]
fn rasterization_is_idempotent() {
    let e = Ellipsoid::new(GridPoint::new(-4, 90, 11), Vector::new(5, 3, 2));
    assert_eq!(rasterize(&e), rasterize(&e));
}
