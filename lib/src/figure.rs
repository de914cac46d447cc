use crate::error::{Defect, Error};
use crate::rectangles::{render, Rectangles};
use std::fmt;
use std::str::FromStr;

pub const CORNER: u8 = b'+';
pub const HORIZONTAL: u8 = b'-';
pub const VERTICAL: u8 = b'|';
pub const BLANK: u8 = b' ';

fn is_figure_char(c: char) -> bool {
    matches!(c, '+' | '-' | '|' | ' ')
}

/// An ASCII box-drawing figure, organized as a rectangular grid of cells.
///
/// Cells are addressed as `(x, y)`: `x` is the column, `y` the row, both zero based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Figure {
    rows: Vec<Vec<u8>>,
    width: usize,
}

/// A cell that holds a `+` corner marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Corner {
    pub x: usize,
    pub y: usize,
}

/// An axis aligned rectangle, given by its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub top_left: Corner,
    pub bottom_right: Corner,
}

impl Corner {
    pub fn new(x: usize, y: usize) -> Corner {
        Corner { x, y }
    }
}

impl Rectangle {
    pub fn new(top_left: Corner, bottom_right: Corner) -> Rectangle {
        Rectangle {
            top_left,
            bottom_right,
        }
    }

    pub fn width(&self) -> usize {
        self.bottom_right.x - self.top_left.x + 1
    }

    pub fn height(&self) -> usize {
        self.bottom_right.y - self.top_left.y + 1
    }

    /// The canonical depiction of this rectangle, with a blank interior.
    pub fn render(&self) -> String {
        render(self.width(), self.height())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl Figure {
    /// Parse a figure from `\n` separated rows.
    ///
    /// A final newline does not add an empty row, and a `\r` before a newline is ignored.
    /// # Errors
    /// [Error::InvalidFigure] if the rows differ in length, or a character other than
    /// `+`, `-`, `|` or space is found.
    /// # Example
    /// ```
    /// # use ascii_katas::{Figure, Error};
    /// let figure = Figure::parse("+--+\n|  |\n+--+\n")?;
    /// assert_eq!((figure.width(), figure.height()), (4, 3));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<Figure, Error> {
        let mut lines: Vec<&str> = text.split('\n').collect();
        if lines.last() == Some(&"") {
            lines.pop();
        }
        let mut rows = Vec::with_capacity(lines.len());
        let mut width = 0;
        for (row, &line) in lines.iter().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if let Some((col, ch)) = line.chars().enumerate().find(|&(_, c)| !is_figure_char(c)) {
                return Err(Defect::UnexpectedChar { ch, row, col }.into());
            }
            // only ASCII is left, so bytes and columns coincide
            if row == 0 {
                width = line.len();
            } else if line.len() != width {
                return Err(Defect::RaggedRow {
                    row,
                    expected: width,
                    found: line.len(),
                }
                .into());
            }
            rows.push(line.as_bytes().to_vec());
        }
        Ok(Figure { rows, width })
    }

    /// A figure of `width` x `height` blank cells.
    pub fn blank(width: usize, height: usize) -> Figure {
        Figure {
            rows: vec![vec![BLANK; width]; height],
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The cell at column `x`, row `y`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn is_corner(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Some(CORNER)
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, cell: u8) {
        if let Some(c) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *c = cell;
        }
    }

    /// Iterate lazily over the minimal rectangles of the figure, in scan order.
    ///
    /// # Example
    /// ```
    /// # use ascii_katas::{Figure, Error};
    /// let figure = Figure::parse("+------+-----+\n|      |     |\n+------+-----+\n")?;
    /// let sizes: Vec<_> = figure.rectangles().map(|r| (r.width(), r.height())).collect();
    /// assert_eq!(sizes, vec![(8, 3), (7, 3)]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn rectangles(&self) -> Rectangles<'_> {
        Rectangles::new(self)
    }

    /// Like [Figure::rectangles], but yields the rendered rectangles.
    pub fn rendered_rectangles(&self) -> impl Iterator<Item = String> + '_ {
        self.rectangles().map(|rect| rect.render())
    }
}

impl FromStr for Figure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Figure::parse(s)
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows.iter() {
            // cells are always ASCII
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}

/// Parse `figure` and collect the rendering of each of its rectangles.
pub fn figure_rectangles(figure: &str) -> Result<Vec<String>, Error> {
    let figure = Figure::parse(figure)?;
    Ok(figure.rendered_rectangles().collect())
}
