use std::fmt::{Display, Formatter};
use std::str::FromStr;

use nom::Finish;
use thiserror::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// The start square of a word and the direction it is read in.
///
/// Rows and columns are 1-based, row 1 is printed as `A`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coord {
    row: u8,
    col: u8,
    dir: Direction,
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("invalid coordinate {0:?}")]
pub struct InvalidCoord(pub String);

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    pub fn other(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

impl Coord {
    pub fn new(row: u8, col: u8, dir: Direction) -> Coord {
        Coord { row, col, dir }
    }

    /// Build a coordinate from plane space: `line` is the row for horizontal words and the column
    /// for vertical ones, `pos` is the position along that line.
    pub(crate) fn from_line(dir: Direction, line: u8, pos: u8) -> Coord {
        match dir {
            Direction::Horizontal => Coord::new(line, pos, dir),
            Direction::Vertical => Coord::new(pos, line, dir),
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn dir(self) -> Direction {
        self.dir
    }

    pub fn line(self) -> u8 {
        match self.dir {
            Direction::Horizontal => self.row,
            Direction::Vertical => self.col,
        }
    }

    pub fn pos(self) -> u8 {
        match self.dir {
            Direction::Horizontal => self.col,
            Direction::Vertical => self.row,
        }
    }

    pub fn with_dir(self, dir: Direction) -> Coord {
        Coord { dir, ..self }
    }

    pub fn is_valid(self, size: u8) -> bool {
        (1..=size).contains(&self.row) && (1..=size).contains(&self.col)
    }

    fn row_char(self) -> char {
        (b'A' + self.row - 1) as char
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.dir {
            Direction::Horizontal => write!(f, "{}{}", self.row_char(), self.col),
            Direction::Vertical => write!(f, "{}{}", self.col, self.row_char()),
        }
    }
}

mod parse {
    use nom::branch::alt;
    use nom::character::complete::{digit1, satisfy};
    use nom::combinator::{eof, map, map_res, verify};
    use nom::sequence::{pair, terminated};
    use nom::IResult;

    use super::*;

    fn row(input: &str) -> IResult<&str, u8> {
        map(satisfy(|c| c.is_ascii_alphabetic()), |c| {
            c.to_ascii_uppercase() as u8 - b'A' + 1
        })(input)
    }

    fn col(input: &str) -> IResult<&str, u8> {
        verify(map_res(digit1, |s: &str| s.parse::<u8>()), |&c| c > 0)(input)
    }

    pub(super) fn coord(input: &str) -> IResult<&str, Coord> {
        terminated(
            alt((
                map(pair(row, col), |(row, col)| Coord::new(row, col, Direction::Horizontal)),
                map(pair(col, row), |(col, row)| Coord::new(row, col, Direction::Vertical)),
            )),
            eof,
        )(input)
    }
}

impl FromStr for Coord {
    type Err = InvalidCoord;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse::coord(s.trim()).finish() {
            Ok((_, coord)) => Ok(coord),
            Err(_) => Err(InvalidCoord(s.to_string())),
        }
    }
}
