use thiserror::Error;

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LETTER_COUNT: usize = LETTERS.len();
pub const LETTER_INFO: [LetterInfo; LETTER_COUNT] = [
    LetterInfo::new(1, 9, VOWEL),       // A
    LetterInfo::new(3, 2, CONSONANT),   // B
    LetterInfo::new(3, 2, CONSONANT),   // C
    LetterInfo::new(2, 4, CONSONANT),   // D
    LetterInfo::new(1, 12, VOWEL),      // E
    LetterInfo::new(4, 2, CONSONANT),   // F
    LetterInfo::new(2, 3, CONSONANT),   // G
    LetterInfo::new(4, 2, CONSONANT),   // H
    LetterInfo::new(1, 9, VOWEL),       // I
    LetterInfo::new(8, 1, CONSONANT),   // J
    LetterInfo::new(5, 1, CONSONANT),   // K
    LetterInfo::new(1, 4, CONSONANT),   // L
    LetterInfo::new(3, 2, CONSONANT),   // M
    LetterInfo::new(1, 6, CONSONANT),   // N
    LetterInfo::new(1, 8, VOWEL),       // O
    LetterInfo::new(3, 2, CONSONANT),   // P
    LetterInfo::new(10, 1, CONSONANT),  // Q
    LetterInfo::new(1, 6, CONSONANT),   // R
    LetterInfo::new(1, 4, CONSONANT),   // S
    LetterInfo::new(1, 6, CONSONANT),   // T
    LetterInfo::new(1, 4, VOWEL),       // U
    LetterInfo::new(4, 2, CONSONANT),   // V
    LetterInfo::new(4, 2, CONSONANT),   // W
    LetterInfo::new(8, 1, CONSONANT),   // X
    LetterInfo::new(4, 2, VOWEL | CONSONANT), // Y
    LetterInfo::new(10, 1, CONSONANT),  // Z
];

/// Number of wildcards in a full bag.
pub const WILDCARD_COUNT: u8 = 2;

const VOWEL: u8 = 0b01;
const CONSONANT: u8 = 0b10;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Letter {
    index: u8,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LetterInfo {
    score: u8,
    initial_count: u8,
    class: u8,
}

/// A single tile, either showing a letter or being a wildcard.
///
/// A wildcard that has been assigned a letter (when placed on the board) is a _joker_:
/// it shows that letter but is worth nothing.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Tile {
    letter: Option<Letter>,
    joker: bool,
}

#[derive(Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Mask(u32);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("invalid letter {0:?}")]
pub struct InvalidLetter(pub char);

impl LetterInfo {
    pub const fn new(score: u8, initial_count: u8, class: u8) -> Self {
        Self {
            score,
            initial_count,
            class,
        }
    }

    pub fn initial_count(&self) -> u8 {
        self.initial_count
    }
}

impl Letter {
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..LETTER_COUNT as u8).map(|index| Letter { index })
    }

    pub fn from_char(c: char) -> Result<Letter, InvalidLetter> {
        let c_upper = c.to_ascii_uppercase();
        if c_upper.is_ascii_uppercase() {
            Ok(Letter {
                index: c_upper as u8 - b'A',
            })
        } else {
            Err(InvalidLetter(c))
        }
    }

    pub fn from_index(index: u8) -> Letter {
        assert!((index as usize) < LETTER_COUNT);
        Letter { index }
    }

    pub fn to_ascii(self) -> u8 {
        self.index + b'A'
    }

    pub fn to_char(self) -> char {
        self.to_ascii() as char
    }

    pub fn to_mask(self) -> Mask {
        Mask(1 << self.index)
    }

    pub fn index(self) -> u8 {
        self.index
    }

    pub fn info(self) -> LetterInfo {
        LETTER_INFO[self.index as usize]
    }

    pub fn score_value(self) -> u8 {
        self.info().score
    }

    pub fn is_vowel(self) -> bool {
        self.info().class & VOWEL != 0
    }

    pub fn is_consonant(self) -> bool {
        self.info().class & CONSONANT != 0
    }
}

impl Tile {
    /// The unassigned wildcard, as it sits in a rack.
    pub const WILDCARD: Tile = Tile {
        letter: None,
        joker: true,
    };

    pub fn plain(letter: Letter) -> Tile {
        Tile {
            letter: Some(letter),
            joker: false,
        }
    }

    /// A wildcard standing in for `letter`.
    pub fn joker(letter: Letter) -> Tile {
        Tile {
            letter: Some(letter),
            joker: true,
        }
    }

    /// Parse the textual form: uppercase is a plain letter, lowercase a joker and `?` the wildcard.
    pub fn from_char(c: char) -> Result<Tile, InvalidLetter> {
        if c == '?' {
            return Ok(Tile::WILDCARD);
        }
        let letter = Letter::from_char(c)?;
        if c.is_ascii_lowercase() {
            Ok(Tile::joker(letter))
        } else {
            Ok(Tile::plain(letter))
        }
    }

    pub fn letter(self) -> Option<Letter> {
        self.letter
    }

    pub fn is_joker(self) -> bool {
        self.joker
    }

    pub fn is_wildcard(self) -> bool {
        self.letter.is_none()
    }

    pub fn points(self) -> u32 {
        match self.letter {
            Some(letter) if !self.joker => letter.score_value() as u32,
            _ => 0,
        }
    }

    // a wildcard can become anything, so it counts as both
    pub fn is_vowel(self) -> bool {
        match self.letter {
            Some(letter) if !self.joker => letter.is_vowel(),
            _ => true,
        }
    }

    pub fn is_consonant(self) -> bool {
        match self.letter {
            Some(letter) if !self.joker => letter.is_consonant(),
            _ => true,
        }
    }

    pub fn to_char(self) -> char {
        match self.letter {
            None => '?',
            Some(letter) if self.joker => letter.to_char().to_ascii_lowercase(),
            Some(letter) => letter.to_char(),
        }
    }
}

impl Mask {
    pub const NONE: Mask = Mask(0);
    pub const ALL_LETTERS: Mask = Mask((1 << LETTER_COUNT) - 1);

    pub fn from_letters(s: &str) -> Result<Mask, InvalidLetter> {
        let mut result = Mask::NONE;
        for c in s.chars() {
            result.set(Letter::from_char(c)?, true);
        }
        Ok(result)
    }

    pub fn inner(self) -> u32 {
        self.0
    }

    pub fn get(self, c: Letter) -> bool {
        self.0 & (1 << c.index) != 0
    }

    pub fn set(&mut self, c: Letter, value: bool) {
        if value {
            self.0 |= 1 << c.index;
        } else {
            self.0 &= !(1 << c.index);
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn has_all_letters(self) -> bool {
        self & Self::ALL_LETTERS == Self::ALL_LETTERS
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// The letters in this mask, in alphabetical order.
    pub fn letters(self) -> MaskLetters {
        MaskLetters { left: self.0 }
    }

    pub fn is_superset_of(self, other: Mask) -> bool {
        self.0 & other.0 == other.0
    }
}

#[derive(Debug, Clone)]
pub struct MaskLetters {
    left: u32,
}

impl Iterator for MaskLetters {
    type Item = Letter;

    fn next(&mut self) -> Option<Letter> {
        if self.left == 0 {
            return None;
        }
        let index = self.left.trailing_zeros() as u8;
        self.left &= self.left - 1;
        Some(Letter { index })
    }
}

mod debug {
    use std::fmt::{Debug, Display, Formatter};

    use super::*;

    impl Debug for Letter {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "Letter('{}')", self.to_char())
        }
    }

    impl Display for Letter {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.to_char())
        }
    }

    impl Debug for Tile {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "Tile('{}')", self.to_char())
        }
    }

    impl Display for Tile {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.to_char())
        }
    }

    impl Debug for Mask {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            if *self == Mask::ALL_LETTERS {
                write!(f, "Mask(ALL_LETTERS)")
            } else {
                write!(f, "Mask(\"")?;
                for letter in self.letters() {
                    write!(f, "{}", letter.to_char())?;
                }
                write!(f, "\")")
            }
        }
    }
}

mod operations {
    use super::*;

    impl std::ops::BitOr for Mask {
        type Output = Mask;

        fn bitor(self, rhs: Self) -> Self::Output {
            Mask(self.0 | rhs.0)
        }
    }

    impl std::ops::BitAnd for Mask {
        type Output = Mask;

        fn bitand(self, rhs: Self) -> Self::Output {
            Mask(self.0 & rhs.0)
        }
    }

    impl std::ops::BitOrAssign for Mask {
        fn bitor_assign(&mut self, rhs: Self) {
            self.0 |= rhs.0
        }
    }

    impl std::ops::BitAndAssign for Mask {
        fn bitand_assign(&mut self, rhs: Self) {
            self.0 &= rhs.0
        }
    }
}
