use voxfill3d::math::{GridColumn, GridPoint, Real};
use voxfill3d::shape::{RampPlane, TriangleRamp};
use voxfill3d::transformation::rasterization::{
    self, RasterizationError, Span, TailDescriptor,
};
use voxfill3d::utils::clamp_to_grid_height;

fn rasterize(ramp: &TriangleRamp) -> Result<Vec<Span>, RasterizationError> {
    let mut spans = Vec::new();
    let _ = rasterization::rasterize_triangle_ramp(ramp, &TailDescriptor::new("stone"), &mut spans)?;
    Ok(spans)
}

fn random_point(rng: &mut oorandom::Rand32, width: u32) -> GridPoint {
    let half = (width / 2) as i32;
    GridPoint::new(
        rng.rand_range(0..width) as i32 - half,
        rng.rand_range(0..300) as i32 - 20,
        rng.rand_range(0..width) as i32 - half,
    )
}

// ⌊(d - a·x - c·z) / b⌋ clamped to the grid height, by truncated division and correction.
fn exact_top(plane: &RampPlane, column: &GridColumn) -> i32 {
    let n = plane.offset
        - plane.scaled_normal.x * i128::from(column.x)
        - plane.scaled_normal.z * i128::from(column.y);
    let b = plane.scaled_normal.y;
    let mut q = n / b;

    if n % b != 0 && (n < 0) != (b < 0) {
        q -= 1;
    }

    q.clamp(0, 255) as i32
}

#[test]
fn flat_right_triangle() {
    let ramp = TriangleRamp::new(
        GridPoint::new(0, 0, 0),
        GridPoint::new(4, 0, 0),
        GridPoint::new(0, 0, 4),
        0,
    );
    let spans = rasterize(&ramp).unwrap();

    assert!(ramp.footprint_contains(&GridColumn::new(1, 1)));
    assert!(!ramp.footprint_contains(&GridColumn::new(3, 3)));

    for span in &spans {
        let c = span.column();
        assert!(c.x + c.y <= 4);
        assert_eq!((span.start.y, span.end.y), (0, 0));
    }
}

#[test]
fn vertices_are_inside_their_own_triangle() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..500 {
        let ramp = TriangleRamp::new(
            random_point(&mut rng, 30),
            random_point(&mut rng, 30),
            random_point(&mut rng, 30),
            64,
        );

        for v in ramp.projected_vertices() {
            assert!(ramp.footprint_contains(&v));
        }
    }
}

fn check_random_ramps(seed: u64, count: usize, width: u32) {
    let mut rng = oorandom::Rand32::new(seed);

    for _ in 0..count {
        let base_height = rng.rand_range(0..300) as i32 - 20;
        let ramp = TriangleRamp::new(
            random_point(&mut rng, width),
            random_point(&mut rng, width),
            random_point(&mut rng, width),
            base_height,
        );
        let plane = ramp.plane();

        let spans = match rasterize(&ramp) {
            Ok(spans) => spans,
            Err(RasterizationError::CollinearVertices) => {
                assert!(plane.is_degenerate());
                continue;
            }
            Err(RasterizationError::VerticalPlane) => {
                assert!(plane.is_vertical());
                continue;
            }
        };

        let footprint = ramp.footprint();
        let mut previous: Option<(i32, i32)> = None;

        for span in &spans {
            let column = span.column();
            let key = (column.y, column.x);

            assert!(previous.map_or(true, |p| p < key));
            previous = Some(key);

            assert!(footprint.contains_column(&column));
            assert!(ramp.footprint_contains(&column));
            assert_eq!(span.start.y, clamp_to_grid_height(base_height));

            assert_eq!(span.end.y, exact_top(&plane, &column));
            assert!(span.end.y >= 0 && span.end.y <= 255);
        }

        let expected_count = footprint
            .columns()
            .filter(|c| ramp.footprint_contains(c))
            .count();
        assert_eq!(spans.len(), expected_count);
    }
}

#[test]
fn random_ramps_match_their_plane() {
    check_random_ramps(1234, 300, 30);
}

#[test]
fn wide_random_ramps_match_their_plane() {
    check_random_ramps(99, 10, 600);
}

#[test]
fn wide_level_ramp_keeps_its_whole_height() {
    let ramp = TriangleRamp::new(
        GridPoint::new(0, 200, 0),
        GridPoint::new(1001, 200, 0),
        GridPoint::new(0, 200, 1001),
        0,
    );
    let spans = rasterize(&ramp).unwrap();

    assert_eq!(spans.len(), 1002 * 1003 / 2);
    assert!(spans.iter().all(|s| s.start.y == 0 && s.end.y == 200));
}

#[test]
fn wide_sloped_ramp_heights() {
    // y = 10 + x / 5 + z / 10
    let ramp = TriangleRamp::new(
        GridPoint::new(0, 10, 0),
        GridPoint::new(1200, 250, 0),
        GridPoint::new(0, 130, 1200),
        10,
    );
    let spans = rasterize(&ramp).unwrap();

    assert_eq!(spans.len(), 1201 * 1202 / 2);
    for span in &spans {
        let (x, z) = (span.start.x, span.start.z);
        assert_eq!(span.end.y, 10 + (2 * x + z).div_euclid(10), "column ({x}, {z})");
    }
}

#[test]
fn plane_height_interpolates_the_vertices() {
    let ramp = TriangleRamp::new(
        GridPoint::new(-3, 40, 2),
        GridPoint::new(9, 52, -1),
        GridPoint::new(1, 31, 12),
        0,
    );
    let plane = ramp.plane();

    for v in ramp.vertices() {
        approx::assert_relative_eq!(
            plane.height_at(&GridColumn::new(v.x, v.z)),
            v.y as Real,
            epsilon = 1.0e-4
        );
    }
}

#[test]
fn descending_spans_are_not_reordered() {
    let ramp = TriangleRamp::new(
        GridPoint::new(0, 10, 0),
        GridPoint::new(6, 10, 0),
        GridPoint::new(0, 10, 6),
        200,
    );
    let spans = rasterize(&ramp).unwrap();

    assert!(spans.iter().all(|s| s.start.y == 200 && s.end.y == 10));
    assert!(spans.iter().all(|s| s.normalized().start.y == 10));
}

#[test]
fn degenerate_ramps_emit_no_span() {
    let mut sink: Vec<Span> = Vec::new();
    let collinear = TriangleRamp::new(
        GridPoint::new(0, 5, 0),
        GridPoint::new(3, 5, 3),
        GridPoint::new(6, 5, 6),
        5,
    );
    let vertical = TriangleRamp::new(
        GridPoint::new(0, 0, 0),
        GridPoint::new(0, 10, 0),
        GridPoint::new(0, 0, 10),
        5,
    );
    let tail = TailDescriptor::new("stone");

    assert_eq!(
        rasterization::rasterize_triangle_ramp(&collinear, &tail, &mut sink),
        Err(RasterizationError::CollinearVertices)
    );
    assert_eq!(
        rasterization::rasterize_triangle_ramp(&vertical, &tail, &mut sink),
        Err(RasterizationError::VerticalPlane)
    );
    assert!(sink.is_empty());
}
