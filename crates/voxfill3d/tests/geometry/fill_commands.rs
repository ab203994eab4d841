use voxfill3d::request::ShapeRequest;
use voxfill3d::transformation::rasterization::{FillCommandFormat, FillCommands};

#[test]
fn ellipsoid_fill_commands() {
    let request =
        ShapeRequest::parse("ellipsoid", &["0", "64", "0", "1", "1", "1", "glass", "0"]).unwrap();
    let mut sink = FillCommands::new();
    let _ = request.rasterize(&mut sink).unwrap();

    assert_eq!(
        sink.commands(),
        [
            "fill 0 64 -1 0 64 -1 glass 0",
            "fill -1 64 0 -1 64 0 glass 0",
            "fill 0 63 0 0 65 0 glass 0",
            "fill 1 64 0 1 64 0 glass 0",
            "fill 0 64 1 0 64 1 glass 0",
        ]
    );
}

#[test]
fn triangle_fill_commands() {
    let params = [
        "0", "0", "0", "2", "0", "0", "0", "0", "2", "10", "stone", "0", "replace",
    ];
    let request = ShapeRequest::parse("triangle", &params).unwrap();
    let mut sink = FillCommands::with_format(FillCommandFormat::with_keyword("/fill"));
    let stats = request.rasterize(&mut sink).unwrap();

    assert_eq!(stats.scanned_columns, 9);
    assert_eq!(stats.emitted_spans, 6);
    assert_eq!(sink.commands()[0], "/fill 0 10 0 0 0 0 stone 0 replace");
    assert_eq!(sink.commands()[5], "/fill 0 10 2 0 0 2 stone 0 replace");
}
