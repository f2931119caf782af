use std::fmt::{Debug, Display, Formatter};
use std::ops::ControlFlow;
use std::sync::Arc;

use internal_iterator::InternalIterator;
use log::debug;
use thiserror::Error;

use crate::coord::{Coord, Direction};
use crate::cross;
use crate::dictionary::{Dictionary, FstDictionary};
use crate::grid::Plane;
use crate::layout::{BoardLayout, Rules};
use crate::movegen;
use crate::rack::Rack;
use crate::results::RoundCollector;
use crate::round::{Round, RoundTile};
use crate::score::evaluate;
use crate::tile::{Letter, Mask, Tile};

/// The tiles placed so far, together with everything derived from them that move generation needs.
///
/// The board is stored twice, once as-is and once transposed, so vertical words can be generated
/// and scored exactly like horizontal ones. Both copies are only ever written together.
pub struct Board<D: Dictionary = FstDictionary> {
    dict: Arc<D>,
    layout: BoardLayout,
    rules: Rules,

    rows: Plane,
    cols: Plane,
    tile_count: usize,
}

/// The reasons a round can be rejected by [Board::check_round].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum RoundError {
    #[error("the word is preceded or followed by another tile")]
    ExtendsWord,
    #[error("a letter does not match the tile already on the board")]
    LetterMismatch,
    #[error("a letter forms an invalid perpendicular word")]
    NotInCrossCheck,
    #[error("no tile from the rack is played")]
    NoRackTile,
    #[error("the word is not connected to any tile on the board")]
    Isolated,
    #[error("the first word must be horizontal")]
    FirstWordVertical,
    #[error("the first word must cover the center square")]
    FirstWordOffCenter,
    #[error("the word does not fit on the board")]
    OutOfBoard,
    #[error("too many tiles from the rack are played")]
    TooManyRackTiles,
}

impl RoundError {
    /// A stable numeric code for this error.
    pub fn code(self) -> u8 {
        match self {
            RoundError::ExtendsWord => 1,
            RoundError::LetterMismatch => 2,
            RoundError::NotInCrossCheck => 3,
            RoundError::NoRackTile => 4,
            RoundError::Isolated => 5,
            RoundError::FirstWordVertical => 6,
            RoundError::FirstWordOffCenter => 7,
            RoundError::OutOfBoard => 8,
            RoundError::TooManyRackTiles => 9,
        }
    }
}

impl Board<FstDictionary> {
    /// An empty board with the standard layout and rules.
    pub fn standard(dict: Arc<FstDictionary>) -> Self {
        Board::new(dict, BoardLayout::standard(), Rules::default())
    }
}

impl<D: Dictionary> Board<D> {
    pub fn new(dict: Arc<D>, layout: BoardLayout, rules: Rules) -> Self {
        let rows = Plane::new(&layout, false);
        let cols = Plane::new(&layout, true);

        let mut board = Board {
            dict,
            layout,
            rules,
            rows,
            cols,
            tile_count: 0,
        };
        board.rebuild_cross_checks();
        board
    }

    fn eq_key(&self) -> impl Eq + '_ {
        (
            Arc::as_ptr(&self.dict),
            &self.layout,
            self.rules,
            &self.rows,
            &self.cols,
            self.tile_count,
        )
    }

    pub fn dict(&self) -> &Arc<D> {
        &self.dict
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn size(&self) -> u8 {
        self.layout.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tile_count == 0
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    fn check_bounds(&self, row: u8, col: u8) {
        let size = self.size();
        assert!(
            (1..=size).contains(&row) && (1..=size).contains(&col),
            "({}, {}) is outside of the board",
            row,
            col
        );
    }

    pub fn tile(&self, row: u8, col: u8) -> Option<Tile> {
        self.check_bounds(row, col);
        self.rows.square(row, col).tile()
    }

    pub fn is_vacant(&self, row: u8, col: u8) -> bool {
        self.tile(row, col).is_none()
    }

    pub fn letter_multiplier(&self, row: u8, col: u8) -> u8 {
        self.layout.letter_multiplier(row, col)
    }

    pub fn word_multiplier(&self, row: u8, col: u8) -> u8 {
        self.layout.word_multiplier(row, col)
    }

    /// The letters that can be placed on this square as part of a word in direction `dir`.
    pub fn allowed(&self, row: u8, col: u8, dir: Direction) -> Mask {
        self.check_bounds(row, col);
        match dir {
            Direction::Horizontal => self.rows.square(row, col).cross,
            Direction::Vertical => self.cols.square(col, row).cross,
        }
    }

    /// The value of the perpendicular word a tile placed on this square in direction `dir` would join.
    pub fn cross_score(&self, row: u8, col: u8, dir: Direction) -> Option<u32> {
        self.check_bounds(row, col);
        match dir {
            Direction::Horizontal => self.rows.square(row, col).cross_score,
            Direction::Vertical => self.cols.square(col, row).cross_score,
        }
    }

    fn plane(&self, dir: Direction) -> &Plane {
        match dir {
            Direction::Horizontal => &self.rows,
            Direction::Vertical => &self.cols,
        }
    }

    fn set_square(&mut self, row: u8, col: u8, letter: Option<Letter>, joker: bool) {
        let square = self.rows.square_mut(row, col);
        square.letter = letter;
        square.joker = joker;

        let square = self.cols.square_mut(col, row);
        square.letter = letter;
        square.joker = joker;
    }

    fn round_squares(&self, round: &Round) -> Vec<(u8, u8, RoundTile)> {
        let coord = round.coord();
        let size = self.size();
        assert!(
            coord.is_valid(size) && coord.pos() as usize + round.len() <= size as usize + 1,
            "{:?} does not fit on the board",
            round
        );

        let tiles = round.tiles().iter().enumerate();
        tiles
            .map(|(i, &tile)| {
                let at = Coord::from_line(coord.dir(), coord.line(), coord.pos() + i as u8);
                (at.row(), at.col(), tile)
            })
            .collect()
    }

    /// Put the rack tiles of `round` on the board. Panics if any of their squares is occupied.
    pub fn add_round(&mut self, round: &Round) {
        for (row, col, tile) in self.round_squares(round) {
            if tile.is_from_rack() {
                assert!(
                    self.is_vacant(row, col),
                    "cannot add {:?}, ({}, {}) is occupied",
                    round,
                    row,
                    col
                );
                self.set_square(row, col, Some(tile.letter), tile.joker);
                self.tile_count += 1;
            }
        }

        self.rebuild_cross_checks();
        debug!("added round {}, {} tiles on the board", round, self.tile_count);
    }

    /// Take the rack tiles of `round` off the board again. Panics if they are not there.
    pub fn remove_round(&mut self, round: &Round) {
        for (row, col, tile) in self.round_squares(round) {
            if tile.is_from_rack() {
                assert_eq!(
                    Some(tile.tile()),
                    self.tile(row, col),
                    "cannot remove {:?}, ({}, {}) does not match",
                    round,
                    row,
                    col
                );
                self.set_square(row, col, None, false);
                self.tile_count -= 1;
            }
        }

        self.rebuild_cross_checks();
        debug!("removed round {}, {} tiles on the board", round, self.tile_count);
    }

    pub fn rebuild_cross_checks(&mut self) {
        cross::rebuild(&*self.dict, &mut self.rows, &mut self.cols);
    }

    /// Check whether `candidate` can be played on this board.
    ///
    /// On success the returned round has the origin of every tile resolved, the joker flags of
    /// board tiles copied from the board, and its score computed.
    /// The word itself is not looked up in the dictionary, only the perpendicular words are checked.
    pub fn check_round(&self, candidate: &Round) -> Result<Round, RoundError> {
        let coord = candidate.coord();
        let size = self.size();

        if !coord.is_valid(size) || coord.pos() as usize + candidate.len() > size as usize + 1 {
            return Err(RoundError::OutOfBoard);
        }
        if candidate.is_empty() {
            return Err(RoundError::NoRackTile);
        }

        let plane = self.plane(coord.dir());
        let line = coord.line();
        let start = coord.pos();
        let end = start + candidate.len() as u8;

        if plane.is_occupied(line, start - 1) || plane.is_occupied(line, end) {
            return Err(RoundError::ExtendsWord);
        }

        let mut round = Round::new(coord);
        let mut connected = false;

        for (i, tile) in candidate.tiles().iter().enumerate() {
            let square = plane.square(line, start + i as u8);

            match square.letter {
                Some(letter) => {
                    if letter != tile.letter {
                        return Err(RoundError::LetterMismatch);
                    }
                    round.push(RoundTile::from_board(letter, square.joker));
                    connected = true;
                }
                None => {
                    if !square.cross.get(tile.letter) {
                        return Err(RoundError::NotInCrossCheck);
                    }
                    round.push(RoundTile::from_rack(tile.letter, tile.joker));
                    connected |= square.cross_score.is_some();
                }
            }
        }

        let from_rack = round.rack_tile_count();
        if from_rack == 0 {
            return Err(RoundError::NoRackTile);
        }
        if from_rack > self.rules.letters_to_play {
            return Err(RoundError::TooManyRackTiles);
        }

        if self.is_empty() {
            if coord.dir() != Direction::Horizontal {
                return Err(RoundError::FirstWordVertical);
            }
            let (center_row, center_col) = self.layout.center();
            if line != center_row || !(start..end).contains(&center_col) {
                return Err(RoundError::FirstWordOffCenter);
            }
        } else if !connected {
            return Err(RoundError::Isolated);
        }

        let (score, bonus) = evaluate(plane, line, start, round.tiles(), &self.rules);
        round.set_score(score, bonus);
        Ok(round)
    }

    /// Add every round that can be played with `rack` to `results`, then sort them.
    ///
    /// Only words touching the existing tiles are generated, see [Board::search_first] for the
    /// opening move.
    pub fn search(&self, rack: &Rack, results: &mut impl RoundCollector) {
        let before = results.len();
        let _ = self.for_each_round(rack, false, |round| {
            results.add(round);
            ControlFlow::<()>::Continue(())
        });
        results.sort();
        debug!("search {:?}: kept {} rounds (had {})", rack, results.len(), before);
    }

    /// Add every opening round that can be played with `rack` to `results`, then sort them.
    pub fn search_first(&self, rack: &Rack, results: &mut impl RoundCollector) {
        let before = results.len();
        let _ = self.for_each_round(rack, true, |round| {
            results.add(round);
            ControlFlow::<()>::Continue(())
        });
        results.sort();
        debug!("search_first {:?}: kept {} rounds (had {})", rack, results.len(), before);
    }

    /// All rounds playable with `rack`, the opening rounds if the board is empty.
    pub fn available_rounds<'b>(&'b self, rack: &Rack) -> RoundsIterator<'b, D> {
        RoundsIterator { board: self, rack: *rack }
    }

    #[must_use]
    fn for_each_round<R>(&self, rack: &Rack, first: bool, mut f: impl FnMut(&Round) -> ControlFlow<R>) -> ControlFlow<R> {
        let dict = &*self.dict;

        if first {
            movegen::search_first(dict, &self.rows, self.layout.center(), &self.rules, rack, &mut f)
        } else {
            movegen::search_plane(dict, &self.rows, Direction::Horizontal, &self.rules, rack, &mut f)?;
            movegen::search_plane(dict, &self.cols, Direction::Vertical, &self.rules, rack, &mut f)
        }
    }
}

#[derive(Debug)]
pub struct RoundsIterator<'b, D: Dictionary> {
    board: &'b Board<D>,
    rack: Rack,
}

impl<D: Dictionary> InternalIterator for RoundsIterator<'_, D> {
    type Item = Round;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        let RoundsIterator { board, rack } = self;
        board.for_each_round(&rack, board.is_empty(), |round| f(round.clone()))
    }
}

impl<D: Dictionary> Clone for Board<D> {
    fn clone(&self) -> Self {
        Board {
            dict: Arc::clone(&self.dict),
            layout: self.layout.clone(),
            rules: self.rules,
            rows: self.rows.clone(),
            cols: self.cols.clone(),
            tile_count: self.tile_count,
        }
    }
}

impl<D: Dictionary> PartialEq for Board<D> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_key() == other.eq_key()
    }
}

impl<D: Dictionary> Eq for Board<D> {}

impl<D: Dictionary> Debug for Board<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Board({} tiles, {:?})\n{}",
            self.tile_count, self.rules, self
        )
    }
}

impl<D: Dictionary> Display for Board<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let size = self.size();

        write!(f, "  ")?;
        for col in 1..=size {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for row in 1..=size {
            write!(f, " {}", (b'A' + row - 1) as char)?;
            for col in 1..=size {
                let c = match self.rows.square(row, col).tile() {
                    Some(tile) => tile.to_char(),
                    None => match (self.letter_multiplier(row, col), self.word_multiplier(row, col)) {
                        (_, 3) => '=',
                        (_, 2) => '-',
                        (3, _) => '"',
                        (2, _) => '\'',
                        _ => '.',
                    },
                };
                write!(f, "{:>3}", c)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
