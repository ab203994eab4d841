use voxfill3d::request::ShapeRequest;
use voxfill3d::transformation::rasterization::FillCommands;

// Usage: cargo run --example fill_commands3d -- ellipsoid 0 64 0 3 2 3 glass
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, params)) = args.split_first() else {
        println!("Usage: fill_commands3d <ellipsoid|triangle> <params...>");
        return;
    };

    let request = match ShapeRequest::parse(command, params) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let mut sink = FillCommands::new();
    if let Err(e) = request.rasterize(&mut sink) {
        eprintln!("{e}");
        return;
    }

    for command in sink.commands() {
        println!("{command}");
    }
}
