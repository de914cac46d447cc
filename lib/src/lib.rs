//! A library of small text-grid exercises
//!
//! The main part of this library decomposes an ASCII box-drawing figure into its rectangles.
//! It also reads bank account numbers drawn with a 3 x 3 digit font, wraps text to a column
//! limit and ranks poker hands.
//!
//! # Basic usage
//! ```
//! # use ascii_katas::{Figure, Error};
//! let figure = Figure::parse(
//!     "+------+-----+\n\
//!      |      |     |\n\
//!      +------+-----+\n",
//! )?;
//! for rect in figure.rectangles() {
//!     println!("{}", rect);
//! }
//! # Ok::<(), Error>(())
//! ```
//! This example would print both rectangles, each with a blank interior.
//!
//! ```text
//! +------+
//! |      |
//! +------+
//!
//! +-----+
//! |     |
//! +-----+
//! ```
//!
//! Rectangles are found by scanning the figure row by row for `+` corners. A rectangle is
//! only reported if its border is complete and no `+` is found inside it, so a figure with
//! a subdivided rectangle reports the parts, not the whole.
//!
//! The edges must be unbroken as well: a `+` in the middle of an edge, where another line
//! joins it (a T-junction), disqualifies that rectangle. Below, the top box is not reported,
//! only the two boxes under it.
//! ```
//! # use ascii_katas::{Figure, Error};
//! let figure = Figure::parse(
//!     "+-----+\n\
//!      |     |\n\
//!      +--+--+\n\
//!      |  |  |\n\
//!      +--+--+\n",
//! )?;
//! let sizes: Vec<_> = figure.rectangles().map(|r| (r.width(), r.height())).collect();
//! assert_eq!(sizes, vec![(4, 3), (4, 3)]);
//! # Ok::<(), Error>(())
//! ```

mod error;
mod figure;
mod ocr;
mod poker;
mod rectangles;
mod utils;
mod wrap;

pub use error::{Defect, Error};
pub use figure::{figure_rectangles, Corner, Figure, Rectangle};
pub use ocr::{parse_bank_account, Account, AccountReader};
pub use poker::{poker_hand_rank, Card, Hand, PokerRank, Suit};
pub use rectangles::{find_rectangle, is_rectangle, render, Rectangles};
pub use utils::collage;
pub use wrap::{wrap_text, Wrap};
