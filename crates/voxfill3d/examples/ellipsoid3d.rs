use voxfill3d::math::{GridPoint, Vector};
use voxfill3d::shape::Ellipsoid;
use voxfill3d::transformation::rasterization::{self, Span, TailDescriptor};

fn main() {
    /*
     * Initialize the shape.
     */
    let ellipsoid = Ellipsoid::new(GridPoint::new(0, 64, 0), Vector::new(6, 3, 4));
    let tail = TailDescriptor::new("stone");

    /*
     * Rasterize it into vertical spans.
     */
    let mut spans: Vec<Span> = Vec::new();
    let stats = rasterization::rasterize_ellipsoid(&ellipsoid, &tail, &mut spans);

    println!(
        "{} spans over {} columns ({} inclusion tests).",
        stats.emitted_spans, stats.scanned_columns, stats.inclusion_tests
    );

    // Print a top view of the span heights.
    let footprint = ellipsoid.footprint();
    for z in footprint.mins.y..=footprint.maxs.y {
        let row: String = (footprint.mins.x..=footprint.maxs.x)
            .map(|x| {
                spans
                    .iter()
                    .find(|s| s.start.x == x && s.start.z == z)
                    .map_or(' ', |s| char::from_digit(s.height().min(9) as u32, 10).unwrap_or('#'))
            })
            .collect();
        println!("{row}");
    }
}
