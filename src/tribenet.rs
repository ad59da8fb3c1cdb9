//! The TribeNet sub-map coordinate format.
//!
//! TribeNet addresses cells on a 26 x 26 grid of lettered sub-maps, each
//! 30 columns wide and 21 rows tall, as a 7-character string `"RC NNMM"`:
//! sub-map row letter, sub-map column letter, a space, then 1-based
//! two-digit sub-column and sub-row. `"AA 0101"` is the global origin, and
//! the whole scheme layers onto [odd-q](crate::offset::OffsetScheme::OddQ)
//! offset coordinates, so `"ZZ 3021"` sits at offset (779, 545).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coordinate::Hex;
use crate::direction::{Direction, TRIBENET_BEARINGS};
use crate::offset::{OffsetCoord, OffsetScheme};

const SUBMAP_COLS: i32 = 30;
const SUBMAP_ROWS: i32 = 21;
const GRID_LETTERS: i32 = 26;

/// Why a TribeNet string or offset coordinate was rejected.
///
/// All of these are caller-recoverable input problems; the variant says
/// which of the format's rules was broken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TribeNetError {
    /// Not the 7-character `"RC NNMM"` shape.
    #[error("{input:?} is not a \"RC NNMM\" coordinate")]
    Format { input: String },
    /// A sub-map label character outside `A..=Z`.
    #[error("{letter:?} is not an uppercase sub-map letter")]
    GridLetter { letter: char },
    /// A sub-column outside 01..=30 or sub-row outside 01..=21.
    #[error("{text:?} is not a sub-coordinate in range")]
    SubCoordinate { text: String },
    /// An offset coordinate with no address on the lettered grid.
    #[error("offset coordinate {col},{row} is outside the lettered grid")]
    OutOfRange { col: i32, row: i32 },
}

/// A validated TribeNet coordinate.
///
/// Stores the 0-based sub-map letter indices and the 1-based sub-column
/// and sub-row; every constructed value formats back to a legal string.
/// Serializes as its text form, so deserialization runs the full parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TribeNetCoord {
    grid_row: u8,
    grid_col: u8,
    sub_col: u8,
    sub_row: u8,
}

impl TribeNetCoord {
    /// 0-based sub-map row, `0..26` (`A..=Z`).
    #[inline]
    pub fn grid_row(self) -> u8 {
        self.grid_row
    }

    /// 0-based sub-map column, `0..26` (`A..=Z`).
    #[inline]
    pub fn grid_col(self) -> u8 {
        self.grid_col
    }

    /// 1-based column within the sub-map, `1..=30`.
    #[inline]
    pub fn sub_col(self) -> u8 {
        self.sub_col
    }

    /// 1-based row within the sub-map, `1..=21`.
    #[inline]
    pub fn sub_row(self) -> u8 {
        self.sub_row
    }

    /// The global odd-q offset coordinate of this cell.
    pub fn to_offset(self) -> OffsetCoord {
        OffsetCoord::new(
            self.grid_col as i32 * SUBMAP_COLS + self.sub_col as i32 - 1,
            self.grid_row as i32 * SUBMAP_ROWS + self.sub_row as i32 - 1,
        )
    }

    /// The cube coordinate of this cell under the odd-q scheme.
    pub fn to_hex(self) -> Hex {
        OffsetScheme::OddQ.to_cube(self.to_offset())
    }

    /// The TribeNet address of a cube coordinate, when it has one.
    pub fn from_hex(hex: Hex) -> Result<TribeNetCoord, TribeNetError> {
        TribeNetCoord::try_from(OffsetScheme::OddQ.from_cube(hex))
    }
}

impl fmt::Display for TribeNetCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{} {:02}{:02}",
            (b'A' + self.grid_row) as char,
            (b'A' + self.grid_col) as char,
            self.sub_col,
            self.sub_row,
        )
    }
}

fn letter_index(letter: u8) -> Result<u8, TribeNetError> {
    if letter.is_ascii_uppercase() {
        Ok(letter - b'A')
    } else {
        Err(TribeNetError::GridLetter {
            letter: letter as char,
        })
    }
}

fn sub_value(digits: &[u8], max: i32) -> Result<u8, TribeNetError> {
    let reject = || TribeNetError::SubCoordinate {
        text: String::from_utf8_lossy(digits).into_owned(),
    };
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(reject());
    }
    let value = (digits[0] - b'0') as i32 * 10 + (digits[1] - b'0') as i32;
    if (1..=max).contains(&value) {
        Ok(value as u8)
    } else {
        Err(reject())
    }
}

impl FromStr for TribeNetCoord {
    type Err = TribeNetError;

    /// Checks run in a fixed order: overall shape, then the row and column
    /// letters, then the sub-column, then the sub-row. The reported error
    /// names the first rule broken.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[2] != b' ' {
            return Err(TribeNetError::Format {
                input: s.to_string(),
            });
        }
        let grid_row = letter_index(bytes[0])?;
        let grid_col = letter_index(bytes[1])?;
        let sub_col = sub_value(&bytes[3..5], SUBMAP_COLS)?;
        let sub_row = sub_value(&bytes[5..7], SUBMAP_ROWS)?;
        Ok(TribeNetCoord {
            grid_row,
            grid_col,
            sub_col,
            sub_row,
        })
    }
}

impl TryFrom<OffsetCoord> for TribeNetCoord {
    type Error = TribeNetError;

    fn try_from(coord: OffsetCoord) -> Result<Self, Self::Error> {
        let out_of_range = TribeNetError::OutOfRange {
            col: coord.col,
            row: coord.row,
        };
        if coord.col < 0 || coord.row < 0 {
            return Err(out_of_range);
        }
        let grid_col = coord.col / SUBMAP_COLS;
        let grid_row = coord.row / SUBMAP_ROWS;
        if grid_col >= GRID_LETTERS || grid_row >= GRID_LETTERS {
            return Err(out_of_range);
        }
        Ok(TribeNetCoord {
            grid_row: grid_row as u8,
            grid_col: grid_col as u8,
            sub_col: (coord.col % SUBMAP_COLS + 1) as u8,
            sub_row: (coord.row % SUBMAP_ROWS + 1) as u8,
        })
    }
}

impl From<TribeNetCoord> for String {
    fn from(coord: TribeNetCoord) -> String {
        coord.to_string()
    }
}

impl TryFrom<String> for TribeNetCoord {
    type Error = TribeNetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parse a TribeNet string straight to its odd-q offset coordinate.
pub fn parse(text: &str) -> Result<OffsetCoord, TribeNetError> {
    text.parse::<TribeNetCoord>().map(TribeNetCoord::to_offset)
}

/// Render an odd-q offset coordinate as a TribeNet string.
pub fn format(coord: OffsetCoord) -> Result<String, TribeNetError> {
    TribeNetCoord::try_from(coord).map(|coord| coord.to_string())
}

/// TribeNet's compass name for a direction: `SE NE N NW SW S` by index.
///
/// These parse back through [`Direction`]'s `FromStr` alongside the other
/// bearing vocabularies.
pub fn bearing(direction: Direction) -> &'static str {
    TRIBENET_BEARINGS[direction.index() as usize]
}
