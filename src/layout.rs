use thiserror::Error;

/// The size and bonus squares of a board.
#[derive(Clone, Eq, PartialEq)]
pub struct BoardLayout {
    size: u8,
    letter_multipliers: Vec<u8>,
    word_multipliers: Vec<u8>,
}

/// Game parameters that influence move generation and scoring.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rules {
    /// The number of tiles a player holds.
    pub rack_size: u8,
    /// The maximum number of rack tiles a single round can use, playing exactly this many earns the bonus.
    pub letters_to_play: u8,
    pub bonus_points: u32,
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum LayoutError {
    #[error("board size {0} is not in 1..=26")]
    InvalidSize(usize),
    #[error("expected {expected} squares, got {actual}")]
    SquareCount { expected: usize, actual: usize },
    #[error("row {row} has length {len}, expected {size}")]
    RowLength { row: usize, len: usize, size: usize },
    #[error("invalid layout symbol {0:?}")]
    InvalidSymbol(char),
    #[error("multipliers must be at least 1")]
    ZeroMultiplier,
}

pub const MAX_SIZE: u8 = 26;

// `=` triple word, `-` double word, `"` triple letter, `'` double letter
const STANDARD_ROWS: [&str; 15] = [
    "=..'...=...'..=",
    ".-...\"...\"...-.",
    "..-...'.'...-..",
    "'..-...'...-..'",
    "....-.....-....",
    ".\"...\"...\"...\".",
    "..'...'.'...'..",
    "=..'...-...'..=",
    "..'...'.'...'..",
    ".\"...\"...\"...\".",
    "....-.....-....",
    "'..-...'...-..'",
    "..-...'.'...-..",
    ".-...\"...\"...-.",
    "=..'...=...'..=",
];

impl BoardLayout {
    /// The classic 15x15 layout.
    pub fn standard() -> BoardLayout {
        match BoardLayout::from_rows(&STANDARD_ROWS) {
            Ok(layout) => layout,
            Err(e) => unreachable!("standard layout is invalid: {}", e),
        }
    }

    /// A board of the given size without any bonus squares.
    pub fn plain(size: u8) -> Result<BoardLayout, LayoutError> {
        let count = size as usize * size as usize;
        BoardLayout::new(size, vec![1; count], vec![1; count])
    }

    /// Build a layout from row-major multiplier vectors of `size * size` squares each.
    pub fn new(size: u8, letter_multipliers: Vec<u8>, word_multipliers: Vec<u8>) -> Result<BoardLayout, LayoutError> {
        if size == 0 || size > MAX_SIZE {
            return Err(LayoutError::InvalidSize(size as usize));
        }
        let expected = size as usize * size as usize;
        for actual in [letter_multipliers.len(), word_multipliers.len()] {
            if actual != expected {
                return Err(LayoutError::SquareCount { expected, actual });
            }
        }
        if letter_multipliers.iter().chain(&word_multipliers).any(|&m| m == 0) {
            return Err(LayoutError::ZeroMultiplier);
        }

        Ok(BoardLayout {
            size,
            letter_multipliers,
            word_multipliers,
        })
    }

    /// Parse a layout from text rows, one character per square:
    /// `=` triple word, `-` double word, `"` triple letter, `'` double letter and `.` for a plain square.
    pub fn from_rows(rows: &[&str]) -> Result<BoardLayout, LayoutError> {
        let size = rows.len();
        if size == 0 || size > MAX_SIZE as usize {
            return Err(LayoutError::InvalidSize(size));
        }

        let mut letter_multipliers = Vec::with_capacity(size * size);
        let mut word_multipliers = Vec::with_capacity(size * size);

        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(LayoutError::RowLength { row: row + 1, len, size });
            }

            for c in line.chars() {
                let (letter, word) = match c {
                    '.' => (1, 1),
                    '\'' => (2, 1),
                    '"' => (3, 1),
                    '-' => (1, 2),
                    '=' => (1, 3),
                    _ => return Err(LayoutError::InvalidSymbol(c)),
                };
                letter_multipliers.push(letter);
                word_multipliers.push(word);
            }
        }

        BoardLayout::new(size as u8, letter_multipliers, word_multipliers)
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// The square the first word has to cover.
    pub fn center(&self) -> (u8, u8) {
        let c = (self.size + 1) / 2;
        (c, c)
    }

    fn index(&self, row: u8, col: u8) -> usize {
        assert!(
            (1..=self.size).contains(&row) && (1..=self.size).contains(&col),
            "({}, {}) is outside of the board",
            row,
            col
        );
        (row as usize - 1) * self.size as usize + (col as usize - 1)
    }

    pub fn letter_multiplier(&self, row: u8, col: u8) -> u8 {
        self.letter_multipliers[self.index(row, col)]
    }

    pub fn word_multiplier(&self, row: u8, col: u8) -> u8 {
        self.word_multipliers[self.index(row, col)]
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        BoardLayout::standard()
    }
}

impl std::fmt::Debug for BoardLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BoardLayout(size={}", self.size)?;
        for row in 1..=self.size {
            write!(f, "  ")?;
            for col in 1..=self.size {
                let c = match (self.letter_multiplier(row, col), self.word_multiplier(row, col)) {
                    (1, 1) => '.',
                    (2, 1) => '\'',
                    (3, 1) => '"',
                    (1, 2) => '-',
                    (1, 3) => '=',
                    _ => '*',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, ")")
    }
}

impl Rules {
    /// The variant where the rack holds eight tiles, at most seven of which can be played at once.
    pub fn seven_among_eight() -> Rules {
        Rules {
            rack_size: 8,
            ..Rules::default()
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            rack_size: 7,
            letters_to_play: 7,
            bonus_points: 50,
        }
    }
}
