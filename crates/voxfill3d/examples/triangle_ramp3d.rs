use voxfill3d::math::GridPoint;
use voxfill3d::shape::TriangleRamp;
use voxfill3d::transformation::rasterization::{self, TailDescriptor};

fn main() {
    /*
     * Initialize the shape.
     */
    let ramp = TriangleRamp::new(
        GridPoint::new(0, 60, 0),
        GridPoint::new(12, 72, 0),
        GridPoint::new(0, 66, 8),
        60,
    );
    let plane = ramp.plane();
    println!(
        "Plane: {}x + {}y + {}z = {}",
        plane.scaled_normal.x, plane.scaled_normal.y, plane.scaled_normal.z, plane.offset
    );

    /*
     * Rasterize it, printing the top of every span.
     */
    let tail = TailDescriptor::new("sandstone");
    let mut sink = rasterization::from_fn(|span| {
        println!(
            "column ({}, {}): {} -> {}",
            span.start.x, span.start.z, span.start.y, span.end.y
        )
    });

    match rasterization::rasterize_triangle_ramp(&ramp, &tail, &mut sink) {
        Ok(stats) => println!("{} spans emitted.", stats.emitted_spans),
        Err(e) => println!("Cannot rasterize the ramp: {e}"),
    }
}
