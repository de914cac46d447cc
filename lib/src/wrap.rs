use crate::Error;
use log::debug;
use std::iter::Peekable;
use std::str::SplitWhitespace;

/// Lazy greedy line wrapper, created by [wrap_text].
pub struct Wrap<'a> {
    words: Peekable<SplitWhitespace<'a>>,
    columns: usize,
}

/// Wrap `text` into lines of at most `columns` characters.
///
/// Words are separated by whitespace and joined by a single space. Each line takes as many
/// words as fit; a word that is longer than `columns` gets a line of its own.
/// # Errors
/// [Error::ZeroColumns] if `columns` is 0.
/// # Example
/// ```
/// # use ascii_katas::{wrap_text, Error};
/// let lines: Vec<String> = wrap_text("The quick brown fox", 10)?.collect();
/// assert_eq!(lines, vec!["The quick", "brown fox"]);
/// # Ok::<(), Error>(())
/// ```
pub fn wrap_text(text: &str, columns: usize) -> Result<Wrap<'_>, Error> {
    if columns == 0 {
        return Err(Error::ZeroColumns);
    }
    Ok(Wrap {
        words: text.split_whitespace().peekable(),
        columns,
    })
}

impl<'a> Iterator for Wrap<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let first = self.words.next()?;
        let mut line = String::from(first);
        let mut len = first.chars().count();
        while let Some(&word) = self.words.peek() {
            let word_len = word.chars().count();
            if len + 1 + word_len > self.columns {
                break;
            }
            line.push(' ');
            line.push_str(word);
            len += 1 + word_len;
            self.words.next();
        }
        debug!("wrap {} / {}: {:?}", len, self.columns, line);
        Some(line)
    }
}
