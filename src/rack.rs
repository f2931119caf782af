use rand::Rng;

use crate::tile::{InvalidLetter, Letter, Mask, Tile, LETTERS, LETTER_COUNT, WILDCARD_COUNT};

/// A multiset of tiles: the letters a player holds, or the bag they are drawn from.
///
/// Jokers are stored as plain wildcards, the letter they stood for is forgotten.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rack {
    mask: Mask,
    counts: [u8; LETTER_COUNT],
    wildcards: u8,
}

impl Rack {
    /// Parse a rack like `"CAT??"`, where `?` is a wildcard. Letters are case-insensitive.
    pub fn from_letters(s: &str) -> Result<Rack, InvalidLetter> {
        let mut result = Rack::default();
        for c in s.chars() {
            if c == '?' {
                result.add(Tile::WILDCARD);
            } else {
                result.add(Tile::plain(Letter::from_char(c)?));
            }
        }
        Ok(result)
    }

    /// All tiles of a new game.
    pub fn starting_bag() -> Rack {
        let mut result = Rack::default();
        for letter in Letter::all() {
            result.add_letter(letter, letter.info().initial_count());
        }
        result.wildcards = WILDCARD_COUNT;
        result
    }

    fn add_letter(&mut self, letter: Letter, count: u8) {
        if count == 0 {
            return;
        }
        self.mask.set(letter, true);
        self.counts[letter.index() as usize] += count;
    }

    pub fn add(&mut self, tile: Tile) {
        match tile.letter() {
            Some(letter) if !tile.is_joker() => self.add_letter(letter, 1),
            _ => self.wildcards += 1,
        }
    }

    /// Remove a single tile, panics if it is not present.
    pub fn remove(&mut self, tile: Tile) {
        match tile.letter() {
            Some(letter) if !tile.is_joker() => {
                let index = letter.index() as usize;
                assert!(self.counts[index] > 0, "{:?} does not contain {:?}", self, tile);

                self.counts[index] -= 1;
                if self.counts[index] == 0 {
                    self.mask.set(letter, false);
                }
            }
            _ => {
                assert!(self.wildcards > 0, "{:?} does not contain a wildcard", self);
                self.wildcards -= 1;
            }
        }
    }

    pub fn contains(&self, tile: Tile) -> bool {
        match tile.letter() {
            Some(letter) if !tile.is_joker() => self.mask.get(letter),
            _ => self.wildcards > 0,
        }
    }

    pub fn try_remove_all(&mut self, remove: &Rack) -> bool {
        if !self.is_superset_of(remove) {
            return false;
        }
        for tile in remove.tiles() {
            self.remove(tile);
        }
        true
    }

    pub fn add_all(&mut self, other: &Rack) {
        for tile in other.tiles() {
            self.add(tile);
        }
    }

    pub fn tile_count(&self) -> u8 {
        self.counts.iter().sum::<u8>() + self.wildcards
    }

    pub fn count_for(&self, letter: Letter) -> u8 {
        self.counts[letter.index() as usize]
    }

    pub fn wildcards(&self) -> u8 {
        self.wildcards
    }

    pub fn is_empty(&self) -> bool {
        self.mask.is_empty() && self.wildcards == 0
    }

    /// The letters present as plain tiles, wildcards are not included.
    pub fn usable_mask(&self) -> Mask {
        self.mask
    }

    /// Whether some tile of this rack can be placed on a square that allows `allowed`.
    pub fn can_fill(&self, allowed: Mask) -> bool {
        self.wildcards > 0 || !(self.mask & allowed).is_empty()
    }

    pub fn is_superset_of(&self, other: &Rack) -> bool {
        if self.wildcards < other.wildcards || !self.mask.is_superset_of(other.mask) {
            return false;
        }
        self.counts.iter().zip(other.counts.iter()).all(|(a, b)| a >= b)
    }

    pub fn vowel_count(&self) -> u8 {
        self.tiles().filter(|t| t.is_vowel()).count() as u8
    }

    pub fn consonant_count(&self) -> u8 {
        self.tiles().filter(|t| t.is_consonant()).count() as u8
    }

    /// All tiles, plain letters alphabetically followed by the wildcards.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        let letters = self.mask.letters().flat_map(move |letter| {
            std::iter::repeat(Tile::plain(letter)).take(self.count_for(letter) as usize)
        });
        letters.chain(std::iter::repeat(Tile::WILDCARD).take(self.wildcards as usize))
    }

    /// Remove a uniformly random tile. Panics if this rack is empty.
    pub fn remove_sample(&mut self, rng: &mut impl Rng) -> Tile {
        let total_count = self.tile_count();
        assert!(total_count > 0, "cannot draw from an empty rack");

        let index = rng.gen_range(0..total_count);

        let mut sum = 0;
        for letter in self.mask.letters() {
            sum += self.count_for(letter);
            if sum > index {
                let tile = Tile::plain(letter);
                self.remove(tile);
                return tile;
            }
        }

        self.remove(Tile::WILDCARD);
        Tile::WILDCARD
    }

    /// Move random tiles from `bag` into this rack until it holds `size` tiles or the bag is empty.
    pub fn refill_from(&mut self, bag: &mut Rack, size: u8, rng: &mut impl Rng) {
        while self.tile_count() < size && !bag.is_empty() {
            self.add(bag.remove_sample(rng));
        }
    }

    pub fn assert_valid(&self) {
        for c in Letter::all() {
            assert_eq!(
                self.counts[c.index() as usize] > 0,
                self.mask.get(c),
                "Mismatch for letter {c:?}"
            );
        }
    }
}

mod debug {
    use std::fmt::{Debug, Display, Formatter};

    use super::*;

    impl Display for Rack {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            for (i, c) in LETTERS.chars().enumerate() {
                for _ in 0..self.counts[i] {
                    write!(f, "{}", c)?;
                }
            }
            for _ in 0..self.wildcards {
                write!(f, "?")?;
            }
            Ok(())
        }
    }

    impl Debug for Rack {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "Rack(\"{}\")", self)
        }
    }
}
