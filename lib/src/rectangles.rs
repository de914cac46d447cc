use crate::figure::{Corner, Figure, Rectangle, CORNER, HORIZONTAL, VERTICAL};
use log::{debug, trace};

/// Lazy scan over the minimal rectangles of a [Figure].
///
/// Anchors (`+` cells) are visited in row-major order. Each anchor yields at most one
/// rectangle: the first valid one found when trying bottom corners top to bottom and,
/// for each of those, right corners left to right.
/// The scan resumes at the next anchor on every call to `next`.
pub struct Rectangles<'a> {
    figure: &'a Figure,
    /// Linear index of the next cell to try as an anchor
    cursor: usize,
}

impl<'a> Rectangles<'a> {
    pub fn new(figure: &'a Figure) -> Rectangles<'a> {
        Rectangles { figure, cursor: 0 }
    }
}

impl<'a> Iterator for Rectangles<'a> {
    type Item = Rectangle;

    fn next(&mut self) -> Option<Rectangle> {
        let width = self.figure.width();
        let ncells = width * self.figure.height();
        while self.cursor < ncells {
            let (x, y) = (self.cursor % width, self.cursor / width);
            self.cursor += 1;
            if !self.figure.is_corner(x, y) {
                continue;
            }
            if let Some(rect) = find_rectangle(self.figure, Corner::new(x, y)) {
                debug!(
                    "# ({}, {}) Rectangle {}x{}",
                    x,
                    y,
                    rect.width(),
                    rect.height()
                );
                return Some(rect);
            }
            debug!("# ({}, {}) no rectangle", x, y);
        }
        None
    }
}

/// Find the first valid rectangle with its top-left corner at `anchor`.
pub fn find_rectangle(figure: &Figure, anchor: Corner) -> Option<Rectangle> {
    let Corner { x, y } = anchor;
    let bottoms = (y + 1..figure.height()).filter(|&bottom| figure.is_corner(x, bottom));
    for bottom in bottoms {
        let rights = (x + 1..figure.width()).filter(|&right| figure.is_corner(right, y));
        for right in rights {
            if !figure.is_corner(right, bottom) {
                continue;
            }
            let rect = Rectangle::new(anchor, Corner::new(right, bottom));
            if is_rectangle(figure, &rect) {
                return Some(rect);
            }
        }
    }
    None
}

/// Check that `rect` is drawn in `figure` as a minimal rectangle.
///
/// The corners must be `+`, the top and bottom edges `-`, the left and right edges `|`,
/// and there must be no `+` inside. Other interior cells are not checked.
pub fn is_rectangle(figure: &Figure, rect: &Rectangle) -> bool {
    let Corner { x: left, y: top } = rect.top_left;
    let Corner {
        x: right,
        y: bottom,
    } = rect.bottom_right;
    if right <= left || bottom <= top {
        return false;
    }
    for y in top..=bottom {
        let on_edge_row = y == top || y == bottom;
        for x in left..=right {
            let on_edge_col = x == left || x == right;
            let cell = match figure.get(x, y) {
                Some(cell) => cell,
                None => return false,
            };
            let valid = match (on_edge_row, on_edge_col) {
                (true, true) => cell == CORNER,
                (true, false) => cell == HORIZONTAL,
                (false, true) => cell == VERTICAL,
                (false, false) => cell != CORNER,
            };
            if !valid {
                trace!(
                    "reject {:?}-{:?}: {:?} at ({}, {})",
                    rect.top_left,
                    rect.bottom_right,
                    cell as char,
                    x,
                    y
                );
                return false;
            }
        }
    }
    true
}

/// Draw a `width` x `height` rectangle with a blank interior, every row ending in `\n`.
///
/// Both dimensions must be at least 2.
/// ```
/// assert_eq!(ascii_katas::render(4, 3), "+--+\n|  |\n+--+\n");
/// ```
pub fn render(width: usize, height: usize) -> String {
    let inner = width.saturating_sub(2);
    let border = format!("+{}+\n", "-".repeat(inner));
    let side = format!("|{}|\n", " ".repeat(inner));
    let mut out = String::with_capacity((width + 1) * height);
    out.push_str(&border);
    for _ in 0..height.saturating_sub(2) {
        out.push_str(&side);
    }
    out.push_str(&border);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figure(text: &str) -> Figure {
        Figure::parse(text).unwrap()
    }

    fn sizes(figure: &Figure) -> Vec<(usize, usize)> {
        figure
            .rectangles()
            .map(|r| (r.width(), r.height()))
            .collect()
    }

    #[test]
    fn test_render() {
        assert_eq!(render(2, 2), "++\n++\n");
        assert_eq!(render(3, 2), "+-+\n+-+\n");
        assert_eq!(render(6, 4), "+----+\n|    |\n|    |\n+----+\n");
    }

    #[test]
    fn test_minimal_rectangle() {
        let fig = figure("++\n++\n");
        let rects: Vec<_> = fig.rectangles().collect();
        assert_eq!(
            rects,
            vec![Rectangle::new(Corner::new(0, 0), Corner::new(1, 1))]
        );
        assert_eq!(rects[0].render(), "++\n++\n");
    }

    #[test]
    fn test_side_by_side() {
        let fig = figure(
            "+------+-----+\n\
             |      |     |\n\
             +------+-----+\n",
        );
        assert_eq!(sizes(&fig), vec![(8, 3), (7, 3)]);
    }

    #[test]
    fn test_no_corners() {
        let fig = figure("----\n|  |\n----\n");
        assert_eq!(fig.rectangles().count(), 0);
    }

    #[test]
    fn test_lonely_corners() {
        let fig = figure("+  +\n    \n+   \n");
        assert_eq!(fig.rectangles().count(), 0);
    }

    #[test]
    fn test_open_side() {
        let fig = figure("+--+\n|   \n+--+\n");
        assert_eq!(fig.rectangles().count(), 0);
    }

    #[test]
    fn test_subdivided_outer_rejected() {
        let fig = figure(
            "+------+\n\
             | +--+ |\n\
             | |  | |\n\
             | +--+ |\n\
             +------+\n",
        );
        let outer = Rectangle::new(Corner::new(0, 0), Corner::new(7, 4));
        assert!(!is_rectangle(&fig, &outer));
        let rects: Vec<_> = fig.rectangles().collect();
        assert_eq!(
            rects,
            vec![Rectangle::new(Corner::new(2, 1), Corner::new(5, 3))]
        );
    }

    #[test]
    fn test_junction_on_edge_rejects_candidate() {
        let fig = figure(
            "+-----+\n\
             |     |\n\
             +--+--+\n\
             |  |  |\n\
             +--+--+\n",
        );
        let top = Rectangle::new(Corner::new(0, 0), Corner::new(6, 2));
        assert!(!is_rectangle(&fig, &top));
        assert_eq!(sizes(&fig), vec![(4, 3), (4, 3)]);
    }

    #[test]
    fn test_interior_bars_ignored() {
        let fig = figure("+---+\n| - |\n| | |\n+---+\n");
        assert_eq!(sizes(&fig), vec![(5, 4)]);
    }

    #[test]
    fn test_validator_edges() {
        let fig = figure("+-+\n| |\n+-+\n");
        let whole = Rectangle::new(Corner::new(0, 0), Corner::new(2, 2));
        assert!(is_rectangle(&fig, &whole));
        let degenerate = Rectangle::new(Corner::new(0, 0), Corner::new(0, 2));
        assert!(!is_rectangle(&fig, &degenerate));
        let outside = Rectangle::new(Corner::new(0, 0), Corner::new(3, 2));
        assert!(!is_rectangle(&fig, &outside));
    }

    #[test]
    fn test_find_rectangle_gives_up() {
        // (0, 2) has no partner on the right, and sits on the left edge of the taller candidate
        let fig = figure(
            "+--+\n\
             |  |\n\
             +  |\n\
             |  |\n\
             +--+\n",
        );
        assert_eq!(find_rectangle(&fig, Corner::new(0, 0)), None);
        assert_eq!(fig.rectangles().count(), 0);
    }

    #[test]
    fn test_lazy() {
        let fig = figure("++++\n++++\n");
        let mut rects = fig.rectangles();
        assert_eq!(
            rects.next(),
            Some(Rectangle::new(Corner::new(0, 0), Corner::new(1, 1)))
        );
        assert_eq!(
            rects.next(),
            Some(Rectangle::new(Corner::new(1, 0), Corner::new(2, 1)))
        );
        assert_eq!(rects.count(), 1);
    }
}
