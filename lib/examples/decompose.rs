use anyhow::{Context, Result};
use ascii_katas::Figure;
use std::time::Instant;

fn run() -> Result<()> {
    env_logger::init();
    let path = std::env::args()
        .nth(1)
        .expect("Usage: decompose FIGURE");
    let text = std::fs::read_to_string(&path).with_context(|| format!("Failed to open {}", path))?;
    let t0 = Instant::now();
    let figure = Figure::parse(&text).with_context(|| format!("Failed to parse {}", path))?;
    let rects: Vec<_> = figure.rectangles().collect();
    println!("decompose figure took {:?}", t0.elapsed());
    for rect in rects.iter() {
        println!(
            "{:?}-{:?} {}x{}",
            rect.top_left,
            rect.bottom_right,
            rect.width(),
            rect.height()
        );
        println!("{}", rect);
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:?}", err);
    }
}
