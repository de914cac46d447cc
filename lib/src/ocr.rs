use crate::Error;
use log::debug;
use std::fmt;

/// Width and height of a digit glyph, in characters
pub(crate) const GLYPH_SIZE: usize = 3;

/// The digits 0 to 9, side by side.
const DIGIT_FONT: [&str; GLYPH_SIZE] = [
    " _     _  _     _  _  _  _  _ ",
    "| |  | _| _||_||_ |_   ||_||_|",
    "|_|  ||_  _|  | _||_|  ||_| _|",
];

/// A 3 x 3 glyph, stored row by row.
pub(crate) type Glyph = [u8; GLYPH_SIZE * GLYPH_SIZE];

/// Cut the glyph at glyph column `index` out of `rows`.
fn glyph_at(rows: &[Vec<u8>], index: usize) -> Glyph {
    let mut glyph = [b' '; GLYPH_SIZE * GLYPH_SIZE];
    let start = index * GLYPH_SIZE;
    for (r, row) in rows.iter().enumerate() {
        glyph[r * GLYPH_SIZE..(r + 1) * GLYPH_SIZE]
            .copy_from_slice(&row[start..start + GLYPH_SIZE]);
    }
    glyph
}

/// Right-pad the rows to a common width that is a multiple of the glyph size.
fn pad_rows(lines: &[&str]) -> Vec<Vec<u8>> {
    let longest = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let width = (longest + GLYPH_SIZE - 1) / GLYPH_SIZE * GLYPH_SIZE;
    lines
        .iter()
        .map(|line| {
            let mut row = line.as_bytes().to_vec();
            row.resize(width, b' ');
            row
        })
        .collect()
}

/// The digits of a bank account entry. `None` marks a glyph that matches no digit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub digits: Vec<Option<u8>>,
}

impl Account {
    /// True if every glyph was recognized.
    pub fn is_legible(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    /// The account number, if every digit is legible.
    pub fn number(&self) -> Option<u64> {
        self.digits.iter().try_fold(0_u64, |acc, &digit| {
            acc.checked_mul(10)?.checked_add(u64::from(digit?))
        })
    }

    /// Validate the account checksum: the sum of each digit times its position counted from
    /// the right (starting at 1) must be divisible by 11.
    pub fn checksum_ok(&self) -> bool {
        let mut sum = 0_u64;
        for (position, digit) in self.digits.iter().rev().enumerate() {
            match digit {
                Some(d) => sum += (position as u64 + 1) * u64::from(*d),
                None => return false,
            }
        }
        sum % 11 == 0
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text: String = self
            .digits
            .iter()
            .map(|digit| match digit {
                Some(d) => char::from(b'0' + d),
                None => '?',
            })
            .collect();
        write!(f, "{}", text)
    }
}

/// Bank account entry recognizer
pub struct AccountReader {
    templates: Vec<(u8, Glyph)>,
}

impl Default for AccountReader {
    fn default() -> Self {
        AccountReader::new()
    }
}

impl AccountReader {
    pub fn new() -> AccountReader {
        let rows = pad_rows(&DIGIT_FONT);
        let templates = (0..10).map(|d| (d as u8, glyph_at(&rows, d))).collect();
        AccountReader { templates }
    }

    /// Read a bank account entry.
    ///
    /// The entry is three rows of glyphs, optionally followed by a blank fourth row.
    /// Rows may be ragged; missing cells count as spaces.
    /// # Errors
    /// [Error::AccountRows] if the entry does not have three glyph rows.
    /// # Example
    /// ```
    /// # use ascii_katas::{AccountReader, Error};
    /// let entry = "    _  _ \n  | _| _|\n  ||_  _|\n";
    /// let account = AccountReader::new().read(entry)?;
    /// assert_eq!(account.number(), Some(123));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn read(&self, text: &str) -> Result<Account, Error> {
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        if lines.last() == Some(&"") {
            lines.pop();
        }
        if lines.len() == GLYPH_SIZE + 1 && lines[GLYPH_SIZE].trim().is_empty() {
            lines.pop();
        }
        if lines.len() != GLYPH_SIZE {
            return Err(Error::AccountRows(lines.len()));
        }
        let rows = pad_rows(&lines);
        let count = rows[0].len() / GLYPH_SIZE;
        let digits: Vec<Option<u8>> = (0..count)
            .map(|index| self.match_glyph(&glyph_at(&rows, index)))
            .collect();
        let account = Account { digits };
        debug!("read account {}", account);
        Ok(account)
    }

    fn match_glyph(&self, glyph: &Glyph) -> Option<u8> {
        self.templates
            .iter()
            .find(|(_, template)| template == glyph)
            .map(|&(digit, _)| digit)
    }
}

/// Read a bank account entry and return its number.
///
/// # Errors
/// [Error::IllegibleDigit] with the position of the first glyph that is not a digit,
/// [Error::AccountOverflow] if the number does not fit in a `u64`,
/// or any error of [AccountReader::read].
pub fn parse_bank_account(text: &str) -> Result<u64, Error> {
    let account = AccountReader::new().read(text)?;
    if let Some(position) = account.digits.iter().position(Option::is_none) {
        return Err(Error::IllegibleDigit(position));
    }
    account
        .number()
        .ok_or_else(|| Error::AccountOverflow(account.digits.len()))
}
