use crate::grid::Plane;
use crate::layout::Rules;
use crate::round::{Origin, RoundTile};

/// Score the word made of `tiles` placed on `line` from `start` onwards.
///
/// Returns the total and whether the bonus was earned. Perpendicular words formed by rack tiles are
/// scored through the cached cross-scores of their squares.
pub fn evaluate(plane: &Plane, line: u8, start: u8, tiles: &[RoundTile], rules: &Rules) -> (u32, bool) {
    let mut pts = 0;
    let mut ptscross = 0;
    let mut wordmul = 1;
    let mut from_rack = 0;

    for (i, tile) in tiles.iter().enumerate() {
        let square = plane.square(line, start + i as u8);

        match tile.origin {
            Origin::Board => {
                if !square.joker {
                    pts += tile.letter.score_value() as u32;
                }
            }
            Origin::Rack => {
                from_rack += 1;

                let l = if tile.joker {
                    0
                } else {
                    tile.letter.score_value() as u32 * square.letter_multiplier as u32
                };
                pts += l;
                wordmul *= square.word_multiplier as u32;

                if let Some(cross_score) = square.cross_score {
                    ptscross += (cross_score + l) * square.word_multiplier as u32;
                }
            }
        }
    }

    let bonus = from_rack == rules.letters_to_play;
    let mut score = ptscross + pts * wordmul;
    if bonus {
        score += rules.bonus_points;
    }
    (score, bonus)
}
