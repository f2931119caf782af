use crate::layout::BoardLayout;
use crate::tile::{Letter, Mask, Tile};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Square {
    pub letter: Option<Letter>,
    pub joker: bool,
    pub letter_multiplier: u8,
    pub word_multiplier: u8,
    /// The letters that keep the perpendicular word valid. Only meaningful while the square is empty.
    pub cross: Mask,
    /// The value of the perpendicular tiles, `None` if there are none.
    pub cross_score: Option<u32>,
}

/// One orientation of the board, surrounded by a border of sentinel squares.
///
/// Words are always read along a line, with `pos` increasing. The transposed plane stores column `c`
/// as line `c`, so vertical words can be handled exactly like horizontal ones.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Plane {
    size: u8,
    squares: Vec<Square>,
}

impl Square {
    const SENTINEL: Square = Square {
        letter: None,
        joker: false,
        letter_multiplier: 0,
        word_multiplier: 0,
        cross: Mask::NONE,
        cross_score: None,
    };

    pub fn is_occupied(&self) -> bool {
        self.letter.is_some()
    }

    pub fn tile(&self) -> Option<Tile> {
        self.letter.map(|letter| if self.joker { Tile::joker(letter) } else { Tile::plain(letter) })
    }

    /// The points the placed tile contributes, without multipliers.
    pub fn points(&self) -> u32 {
        self.tile().map_or(0, Tile::points)
    }
}

impl Plane {
    pub fn new(layout: &BoardLayout, transposed: bool) -> Plane {
        let size = layout.size();
        let side = size as usize + 2;
        let mut squares = vec![Square::SENTINEL; side * side];

        for line in 1..=size {
            for pos in 1..=size {
                let (row, col) = if transposed { (pos, line) } else { (line, pos) };
                squares[line as usize * side + pos as usize] = Square {
                    letter: None,
                    joker: false,
                    letter_multiplier: layout.letter_multiplier(row, col),
                    word_multiplier: layout.word_multiplier(row, col),
                    cross: Mask::ALL_LETTERS,
                    cross_score: None,
                };
            }
        }

        Plane { size, squares }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    fn index(&self, line: u8, pos: u8) -> usize {
        debug_assert!(line <= self.size + 1 && pos <= self.size + 1);
        line as usize * (self.size as usize + 2) + pos as usize
    }

    /// Get a square, `0` and `size + 1` address the sentinel border.
    pub fn square(&self, line: u8, pos: u8) -> &Square {
        &self.squares[self.index(line, pos)]
    }

    pub fn square_mut(&mut self, line: u8, pos: u8) -> &mut Square {
        let index = self.index(line, pos);
        &mut self.squares[index]
    }

    pub fn is_occupied(&self, line: u8, pos: u8) -> bool {
        self.square(line, pos).is_occupied()
    }

    /// Whether this square is empty and touches a tile in any of the four directions.
    pub fn is_anchor(&self, line: u8, pos: u8) -> bool {
        !self.is_occupied(line, pos)
            && (self.is_occupied(line, pos - 1)
                || self.is_occupied(line, pos + 1)
                || self.is_occupied(line - 1, pos)
                || self.is_occupied(line + 1, pos))
    }

    /// The contiguous run of tiles ending just before `pos`, returns its first position.
    pub fn run_start(&self, line: u8, pos: u8) -> u8 {
        let mut start = pos;
        while self.is_occupied(line, start - 1) {
            start -= 1;
        }
        start
    }

    /// The letters of the tiles on `line` in `start..end`, which must all be occupied.
    pub fn letters(&self, line: u8, start: u8, end: u8) -> impl Iterator<Item = Letter> + '_ {
        (start..end).map(move |pos| match self.square(line, pos).letter {
            Some(letter) => letter,
            None => panic!("expected a tile at ({}, {})", line, pos),
        })
    }
}
