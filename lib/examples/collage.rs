use anyhow::{Context, Result};
use ascii_katas::{collage, Figure};

fn run() -> Result<()> {
    env_logger::init();
    let path = std::env::args().nth(1).expect("Usage: collage FIGURE");

    let text = std::fs::read_to_string(&path).with_context(|| format!("Failed to open {}", path))?;
    eprintln!("read figure from {}", path);
    let figure = Figure::parse(&text)?;
    let rects: Vec<_> = figure.rectangles().collect();

    // rebuild the figure from its rectangles; cells that differ were not covered by any of them
    let collage = collage(&rects, figure.width(), figure.height());
    print!("{}", collage);
    if collage != figure {
        eprintln!("collage differs from {}", path);
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:?}", err);
    }
}
