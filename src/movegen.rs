use std::ops::ControlFlow;

use log::trace;

use crate::coord::{Coord, Direction};
use crate::dictionary::Dictionary;
use crate::grid::Plane;
use crate::layout::Rules;
use crate::rack::Rack;
use crate::round::{Round, RoundTile};
use crate::score::evaluate;
use crate::tile::{Letter, Tile};

struct MoveGen<'a, D: Dictionary, F> {
    dict: &'a D,
    plane: &'a Plane,
    rules: &'a Rules,
    dir: Direction,
    line: u8,
    anchor: u8,
    start: u8,

    rack: Rack,
    placed: u8,
    round: Round,

    f: &'a mut F,
}

/// Generate all rounds along the lines of `plane`, which is read in direction `dir`.
#[must_use]
pub fn search_plane<D: Dictionary, R>(
    dict: &D,
    plane: &Plane,
    dir: Direction,
    rules: &Rules,
    rack: &Rack,
    mut f: impl FnMut(&Round) -> ControlFlow<R>,
) -> ControlFlow<R> {
    let size = plane.size();
    let mut gen = MoveGen::new(dict, plane, dir, rules, rack, &mut f);

    for line in 1..=size {
        let mut last_anchor = 0;

        for pos in 1..=size {
            if !plane.is_anchor(line, pos) {
                continue;
            }
            let limit = pos - last_anchor - 1;
            last_anchor = pos;

            let cross = plane.square(line, pos).cross;
            if !rack.can_fill(cross) {
                trace!("skipping anchor ({}, {}) {:?}, no tile fits {:?}", line, pos, dir, cross);
                continue;
            }

            trace!("anchor ({}, {}) {:?} limit={}", line, pos, dir, limit);
            gen.line = line;
            gen.anchor = pos;
            gen.run_anchor(limit)?;
        }
    }

    ControlFlow::Continue(())
}

/// Generate the opening rounds: horizontal words covering the center of an empty plane.
#[must_use]
pub fn search_first<D: Dictionary, R>(
    dict: &D,
    plane: &Plane,
    center: (u8, u8),
    rules: &Rules,
    rack: &Rack,
    mut f: impl FnMut(&Round) -> ControlFlow<R>,
) -> ControlFlow<R> {
    let (row, col) = center;
    let limit = (rack.tile_count().saturating_sub(1))
        .min(col - 1)
        .min(rules.letters_to_play.saturating_sub(1));

    let mut gen = MoveGen::new(dict, plane, Direction::Horizontal, rules, rack, &mut f);
    gen.line = row;
    gen.anchor = col;
    gen.start = col;
    gen.left_part(dict.root(), limit)
}

impl<'a, D: Dictionary, R, F: FnMut(&Round) -> ControlFlow<R>> MoveGen<'a, D, F> {
    fn new(dict: &'a D, plane: &'a Plane, dir: Direction, rules: &'a Rules, rack: &Rack, f: &'a mut F) -> Self {
        MoveGen {
            dict,
            plane,
            rules,
            dir,
            line: 0,
            anchor: 0,
            start: 0,
            rack: *rack,
            placed: 0,
            round: Round::new(Coord::new(0, 0, dir)),
            f,
        }
    }

    #[must_use]
    fn run_anchor(&mut self, limit: u8) -> ControlFlow<R> {
        debug_assert!(self.round.is_empty() && self.placed == 0);

        let (dict, plane) = (self.dict, self.plane);

        if plane.is_occupied(self.line, self.anchor - 1) {
            // the tiles before the anchor are a fixed prefix
            let start = plane.run_start(self.line, self.anchor);
            let prefix = plane.letters(self.line, start, self.anchor);

            let node = match dict.lookup(dict.root(), prefix) {
                None => return ControlFlow::Continue(()),
                Some(node) => node,
            };

            for pos in start..self.anchor {
                let square = plane.square(self.line, pos);
                if let Some(letter) = square.letter {
                    self.round.push(RoundTile::from_board(letter, square.joker));
                }
            }

            self.start = start;
            let result = self.extend_right(node, self.anchor);
            self.round.clear();
            result
        } else {
            self.start = self.anchor;
            self.left_part(dict.root(), limit)
        }
    }

    #[must_use]
    fn left_part(&mut self, node: D::Node, limit: u8) -> ControlFlow<R> {
        self.extend_right(node, self.anchor)?;

        // keep at least one tile for the anchor itself
        if limit == 0 || self.placed + 1 >= self.rules.letters_to_play {
            return ControlFlow::Continue(());
        }

        let dict = self.dict;
        for child in dict.children(node) {
            let letter = dict.letter(child);

            for joker in [false, true] {
                if !self.can_place(letter, joker) {
                    continue;
                }

                // the prefix grows to the right in reading order, the word start moves left
                self.start -= 1;
                let result = self.placing(letter, joker, |gen| gen.left_part(child, limit - 1));
                self.start += 1;
                result?;
            }
        }

        ControlFlow::Continue(())
    }

    #[must_use]
    fn extend_right(&mut self, node: D::Node, pos: u8) -> ControlFlow<R> {
        let (dict, plane) = (self.dict, self.plane);
        let square = plane.square(self.line, pos);

        match square.letter {
            None => {
                if pos > self.anchor && dict.is_end_of_word(node) {
                    self.report()?;
                }

                // the border squares have an empty cross-check
                let cross = square.cross;
                if cross.is_empty() || self.placed >= self.rules.letters_to_play {
                    return ControlFlow::Continue(());
                }

                for child in dict.children(node) {
                    let letter = dict.letter(child);
                    if !cross.get(letter) {
                        continue;
                    }

                    for joker in [false, true] {
                        if self.can_place(letter, joker) {
                            self.placing(letter, joker, |gen| gen.extend_right(child, pos + 1))?;
                        }
                    }
                }
            }
            Some(letter) => {
                if let Some(child) = dict.child_with(node, letter) {
                    self.round.push(RoundTile::from_board(letter, square.joker));
                    let result = self.extend_right(child, pos + 1);
                    self.round.pop();
                    result?;
                }
            }
        }

        ControlFlow::Continue(())
    }

    fn can_place(&self, letter: Letter, joker: bool) -> bool {
        if joker {
            self.rack.wildcards() > 0
        } else {
            self.rack.contains(Tile::plain(letter))
        }
    }

    /// Take a tile from the rack, put it in the round, run `inner` and undo everything again.
    fn placing(
        &mut self,
        letter: Letter,
        joker: bool,
        inner: impl FnOnce(&mut Self) -> ControlFlow<R>,
    ) -> ControlFlow<R> {
        let tile = if joker { Tile::WILDCARD } else { Tile::plain(letter) };
        let round_tile = RoundTile::from_rack(letter, joker);

        self.rack.remove(tile);
        self.placed += 1;
        self.round.push(round_tile);

        let result = inner(self);

        self.round.pop();
        self.placed -= 1;
        self.rack.add(tile);

        result
    }

    #[must_use]
    fn report(&mut self) -> ControlFlow<R> {
        let (score, bonus) = evaluate(self.plane, self.line, self.start, self.round.tiles(), self.rules);
        self.round.set_coord(Coord::from_line(self.dir, self.line, self.start));
        self.round.set_score(score, bonus);

        (self.f)(&self.round)
    }
}
