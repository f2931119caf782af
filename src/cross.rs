use crate::dictionary::Dictionary;
use crate::grid::Plane;
use crate::tile::{Letter, Mask};

/// Recompute the cross-checks of both planes.
pub fn rebuild<D: Dictionary>(dict: &D, rows: &mut Plane, cols: &mut Plane) {
    // horizontal words are constrained by the vertical runs and the other way around
    compute_cross(dict, cols, rows);
    compute_cross(dict, rows, cols);
}

/// Fill the cross-checks of `target` from the runs along the lines of `source`,
/// which must be the transpose of `target`.
pub fn compute_cross<D: Dictionary>(dict: &D, source: &Plane, target: &mut Plane) {
    let size = source.size();
    debug_assert_eq!(size, target.size());

    for line in 1..=size {
        for pos in 1..=size {
            let (cross, cross_score) = cross_check(dict, source, line, pos);

            let square = target.square_mut(pos, line);
            square.cross = cross;
            square.cross_score = cross_score;
        }
    }
}

fn cross_check<D: Dictionary>(dict: &D, plane: &Plane, line: u8, pos: u8) -> (Mask, Option<u32>) {
    if plane.is_occupied(line, pos) {
        return (Mask::NONE, None);
    }
    if !plane.is_occupied(line, pos - 1) && !plane.is_occupied(line, pos + 1) {
        return (Mask::ALL_LETTERS, None);
    }

    let start = plane.run_start(line, pos);
    let mut end = pos + 1;
    while plane.is_occupied(line, end) {
        end += 1;
    }

    let score = (start..pos)
        .chain(pos + 1..end)
        .map(|p| plane.square(line, p).points())
        .sum();

    let mut mask = Mask::NONE;
    if let Some(node) = dict.lookup(dict.root(), plane.letters(line, start, pos)) {
        for child in dict.children(node) {
            let last = dict.lookup(child, plane.letters(line, pos + 1, end));
            if last.map_or(false, |last| dict.is_end_of_word(last)) {
                mask.set(dict.letter(child), true);
            }
        }
    }

    debug_assert_eq!(mask, cross_check_slow(dict, plane, line, start, pos, end));
    (mask, Some(score))
}

fn cross_check_slow<D: Dictionary>(dict: &D, plane: &Plane, line: u8, start: u8, pos: u8, end: u8) -> Mask {
    let mut mask = Mask::NONE;
    let mut word = vec![];

    for c in Letter::all() {
        word.clear();
        word.extend(plane.letters(line, start, pos));
        word.push(c);
        word.extend(plane.letters(line, pos + 1, end));

        mask.set(c, dict.contains(&word));
    }

    mask
}
