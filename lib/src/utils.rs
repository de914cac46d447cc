use crate::figure::{Figure, Rectangle, CORNER, HORIZONTAL, VERTICAL};

/// Create a collage by drawing the borders of `parts` on a blank `width` x `height` figure.
///
/// Cells shared by several parts are drawn once; a `+` is never overwritten by an edge.
/// Parts that stick out of the figure are clipped.
pub fn collage(parts: &[Rectangle], width: usize, height: usize) -> Figure {
    let mut collage = Figure::blank(width, height);
    for rect in parts.iter() {
        let (left, top) = (rect.top_left.x, rect.top_left.y);
        let (right, bottom) = (rect.bottom_right.x, rect.bottom_right.y);
        let mut draw = |x: usize, y: usize, cell: u8| {
            if !collage.is_corner(x, y) {
                collage.set(x, y, cell);
            }
        };
        for x in left + 1..right {
            draw(x, top, HORIZONTAL);
            draw(x, bottom, HORIZONTAL);
        }
        for y in top + 1..bottom {
            draw(left, y, VERTICAL);
            draw(right, y, VERTICAL);
        }
        for &(x, y) in [(left, top), (right, top), (left, bottom), (right, bottom)].iter() {
            draw(x, y, CORNER);
        }
    }
    collage
}
