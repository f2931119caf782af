use std::fmt::{Debug, Display, Formatter};

use crate::coord::Coord;
use crate::rack::Rack;
use crate::tile::{Letter, Tile};

/// Where a tile of a round comes from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Origin {
    Rack,
    Board,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RoundTile {
    pub letter: Letter,
    pub joker: bool,
    pub origin: Origin,
}

/// A word placement: its tiles in reading order, where it starts and what it is worth.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Round {
    tiles: Vec<RoundTile>,
    coord: Coord,
    score: u32,
    bonus: bool,
}

impl RoundTile {
    pub fn from_rack(letter: Letter, joker: bool) -> RoundTile {
        RoundTile {
            letter,
            joker,
            origin: Origin::Rack,
        }
    }

    pub fn from_board(letter: Letter, joker: bool) -> RoundTile {
        RoundTile {
            letter,
            joker,
            origin: Origin::Board,
        }
    }

    pub fn tile(self) -> Tile {
        if self.joker {
            Tile::joker(self.letter)
        } else {
            Tile::plain(self.letter)
        }
    }

    pub fn to_char(self) -> char {
        self.tile().to_char()
    }

    pub fn is_from_rack(self) -> bool {
        self.origin == Origin::Rack
    }
}

impl Round {
    pub fn new(coord: Coord) -> Round {
        Round {
            tiles: Vec::with_capacity(16),
            coord,
            score: 0,
            bonus: false,
        }
    }

    /// Build a candidate round, all tiles are assumed to come from the rack until the board
    /// says otherwise in [crate::board::Board::check_round].
    pub fn from_tiles(coord: Coord, tiles: impl IntoIterator<Item = Tile>) -> Round {
        let mut round = Round::new(coord);
        for tile in tiles {
            match tile.letter() {
                Some(letter) => round.push(RoundTile::from_rack(letter, tile.is_joker())),
                None => panic!("a round cannot contain an unassigned wildcard"),
            }
        }
        round
    }

    pub fn tiles(&self) -> &[RoundTile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_bonus(&self) -> bool {
        self.bonus
    }

    /// The word as written, jokers in lowercase.
    pub fn word(&self) -> String {
        self.tiles.iter().map(|t| t.to_char()).collect()
    }

    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.tiles.iter().map(|t| t.letter)
    }

    pub fn rack_tile_count(&self) -> u8 {
        self.tiles.iter().filter(|t| t.is_from_rack()).count() as u8
    }

    /// The tiles this round takes from the rack, jokers as wildcards.
    pub fn rack_tiles(&self) -> Rack {
        let mut rack = Rack::default();
        for t in &self.tiles {
            if t.is_from_rack() {
                rack.add(t.tile());
            }
        }
        rack
    }

    pub(crate) fn push(&mut self, tile: RoundTile) {
        self.tiles.push(tile);
    }

    pub(crate) fn pop(&mut self) -> Option<RoundTile> {
        self.tiles.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.tiles.clear();
    }

    pub(crate) fn set_coord(&mut self, coord: Coord) {
        self.coord = coord;
    }

    pub(crate) fn set_score(&mut self, score: u32, bonus: bool) {
        self.score = score;
        self.bonus = bonus;
    }
}

impl Display for Round {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.word(), self.coord, self.score)
    }
}

impl Debug for Round {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round(")?;
        for t in &self.tiles {
            match t.origin {
                Origin::Rack => write!(f, "{}", t.to_char())?,
                Origin::Board => write!(f, "({})", t.to_char())?,
            }
        }
        write!(f, " {} score={}", self.coord, self.score)?;
        if self.bonus {
            write!(f, " bonus")?;
        }
        write!(f, ")")
    }
}
