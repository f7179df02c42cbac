//! Mapping site-hash bytes onto the printed word grid.
//!
//! The grid has twelve columns labeled `A B C D E F T U V X Y Z`, arranged
//! as four quadrants of three columns. Columns A, B, C, and Z hold 20 words;
//! the other eight hold 22, so the cell count is exactly 4×20 + 8×22 = 256
//! and every byte value names exactly one cell. Word numbers restart at 1 in
//! each quadrant and are unique within it.
//!
//! A hash byte is already a uniform value in [0, 256), so the projection
//! needs no rejection sampling — the mapping is a total bijection.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The twelve column header letters, in grid order.
pub const COLUMN_LETTERS: [char; 12] = ['A', 'B', 'C', 'D', 'E', 'F', 'T', 'U', 'V', 'X', 'Y', 'Z'];

/// Columns per quadrant.
const QUADRANT_COLUMNS: usize = 3;

/// Number of quadrants.
const QUADRANTS: usize = 4;

/// Total cells in the grid; also the number of distinct hash byte values.
pub const GRID_CELLS: usize = 256;

/// Site hashes are exactly this long, and at most this many coordinates can
/// be taken from one.
pub const HASH_LEN: usize = 32;

/// Number of words in the given column (0-11).
///
/// The first three columns and the very last hold 20; all others hold 22.
#[must_use]
pub const fn column_size(column: usize) -> usize {
    if column < 3 || column == 11 {
        20
    } else {
        22
    }
}

/// One lookup coordinate into the word grid: a column letter and a 1-based
/// word number unique within the column's quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column header letter, one of [`COLUMN_LETTERS`].
    pub letter: char,
    /// 1-based word number within the quadrant.
    pub number: u16,
}

impl std::fmt::Display for Coordinate {
    /// Formats as the letter immediately followed by the base-10 number,
    /// no separator: `"C13"`, `"X9"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.letter, self.number)
    }
}

/// Map a word index (0-255) to its column and in-quadrant word number.
///
/// Word indexes fill the grid column-major, so this walks the columns
/// accumulating sizes until the index falls inside one.
#[allow(clippy::arithmetic_side_effects)] // all sums bounded by GRID_CELLS
fn column_and_word_number(word_index: u8) -> (usize, u16) {
    let idx = usize::from(word_index);

    let mut cells_before = 0usize;
    let mut num_in_quad = 1usize;
    for column in 0..COLUMN_LETTERS.len() {
        // word numbers restart at every quadrant boundary
        if column % QUADRANT_COLUMNS == 0 {
            num_in_quad = 1;
        }

        let size = column_size(column);
        if idx < cells_before + size {
            let number = num_in_quad + (idx - cells_before);
            return (column, number as u16);
        }

        cells_before += size;
        num_in_quad += size;
    }

    // column sizes sum to 256, so every u8 lands in some column
    unreachable!("word index {word_index} fell outside the grid")
}

/// Project the first `count` bytes of a 32-byte site hash onto grid
/// coordinates, one coordinate per byte, in order.
///
/// # Errors
///
/// - `CoreError::InvalidHashLength` if `hash` is not exactly 32 bytes
/// - `CoreError::InvalidCount` if `count` is outside `1..=32`
pub fn word_coordinates(hash: &[u8], count: usize) -> Result<Vec<Coordinate>, CoreError> {
    if hash.len() != HASH_LEN {
        return Err(CoreError::InvalidHashLength(hash.len()));
    }
    if count == 0 || count > HASH_LEN {
        return Err(CoreError::InvalidCount(count));
    }

    Ok(hash[..count]
        .iter()
        .map(|&byte| {
            let (column, number) = column_and_word_number(byte);
            Coordinate {
                letter: COLUMN_LETTERS[column],
                number,
            }
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Physical layout
// ---------------------------------------------------------------------------

/// One cell of the printed grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCell {
    /// The word printed in this cell. Empty until assigned.
    pub word: String,
    /// 1-based word number within the quadrant. 0 marks a filler cell in a
    /// short column.
    pub num_in_quad: u16,
}

/// How the 256 words are arranged on screen or printed paper: twelve
/// columns, numbered column-major per quadrant, matching
/// [`word_coordinates`] cell for cell.
pub struct GridLayout {
    columns: Vec<Vec<WordCell>>,
}

impl GridLayout {
    /// Build the empty layout with every cell numbered.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)] // numbering bounded by GRID_CELLS
    pub fn new() -> Self {
        let mut columns = Vec::with_capacity(COLUMN_LETTERS.len());
        let mut num_in_quad = 1u16;
        for column in 0..COLUMN_LETTERS.len() {
            if column % QUADRANT_COLUMNS == 0 {
                num_in_quad = 1;
            }
            let cells = (0..column_size(column))
                .map(|_| {
                    let cell = WordCell {
                        word: String::new(),
                        num_in_quad,
                    };
                    num_in_quad += 1;
                    cell
                })
                .collect();
            columns.push(cells);
        }
        Self { columns }
    }

    /// Assign the 256 grid words to cells, column-major.
    ///
    /// The word ordering is part of the compatibility contract: any change
    /// to it changes what every derived coordinate points at.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::WordGrid` unless exactly [`GRID_CELLS`] words are
    /// given.
    pub fn assign_words(&mut self, words: &[&str]) -> Result<(), CoreError> {
        if words.len() != GRID_CELLS {
            return Err(CoreError::WordGrid(format!(
                "expected {GRID_CELLS} words, got {}",
                words.len()
            )));
        }

        let mut next = words.iter();
        for column in &mut self.columns {
            for cell in column {
                // exactly 256 cells, checked above
                if let Some(word) = next.next() {
                    cell.word = (*word).to_owned();
                }
            }
        }
        Ok(())
    }

    /// The cell a coordinate points at, if the coordinate is on the grid.
    #[must_use]
    pub fn cell(&self, coordinate: &Coordinate) -> Option<&WordCell> {
        let column = COLUMN_LETTERS
            .iter()
            .position(|&l| l == coordinate.letter)?;
        self.columns[column]
            .iter()
            .find(|cell| cell.num_in_quad == coordinate.number)
    }

    /// Rows of one quadrant (0 = top-left, 1 = top-right, 2 = bottom-left,
    /// 3 = bottom-right), three cells wide. The bottom-right quadrant's last
    /// column is short; its missing cells come back as `None`.
    ///
    /// # Panics
    ///
    /// Panics if `quadrant` is 4 or more.
    #[must_use]
    pub fn quadrant_rows(&self, quadrant: usize) -> Vec<[Option<&WordCell>; QUADRANT_COLUMNS]> {
        assert!(quadrant < QUADRANTS, "quadrant out of range: {quadrant}");

        let first = quadrant.saturating_mul(QUADRANT_COLUMNS);
        let height = self.columns[first].len();

        (0..height)
            .map(|row| {
                [
                    self.columns[first].get(row),
                    self.columns[first.saturating_add(1)].get(row),
                    self.columns[first.saturating_add(2)].get(row),
                ]
            })
            .collect()
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new()
    }
}
