use anyhow::Result;
use ascii_katas::Figure;

fn main() -> Result<()> {
    let figure = Figure::parse(
        "+------------+\n\
         |            |\n\
         +------+-----+\n\
         |      |     |\n\
         +------+-----+\n",
    )?;
    for rect in figure.rectangles() {
        println!("{}", rect);
    }
    Ok(())
}
