use std::collections::HashSet;

use internal_iterator::InternalIterator;

use scrabble_engine::board::Board;
use scrabble_engine::coord::{Coord, Direction};
use scrabble_engine::dictionary::Dictionary;
use scrabble_engine::rack::Rack;
use scrabble_engine::round::Round;

use crate::util::candidate;

mod scrabble;
mod selfplay;

/// Check everything that should hold for any board and rack:
/// search and validation agree, and playing a round can be undone.
pub fn board_test_main<D: Dictionary>(board: &Board<D>, rack: &Rack, words: &[&str]) {
    println!("Currently testing board with {:?}\n{}", rack, board);

    let available = test_available_match(board, rack, words);
    test_round_trip(board, &available);
    test_rebuild_idempotent(board);
}

fn test_available_match<D: Dictionary>(board: &Board<D>, rack: &Rack, words: &[&str]) -> Vec<Round> {
    let available: Vec<Round> = board.available_rounds(rack).collect();
    let available_set: HashSet<&Round> = available.iter().collect();
    assert_eq!(available.len(), available_set.len(), "Found duplicate round");

    // every generated round is accepted as-is
    for round in &available {
        let checked = board
            .check_round(round)
            .unwrap_or_else(|e| panic!("generated round {:?} is rejected: {}", round, e));
        assert_eq!(round, &checked, "generated round differs after checking");

        assert!(
            rack.is_superset_of(&round.rack_tiles()),
            "generated round {:?} uses tiles not in {:?}",
            round,
            rack
        );
        let letters = round.letters().collect::<Vec<_>>();
        assert!(board.dict().contains(&letters), "generated round {:?} is not a word", round);
    }

    // every accepted word that can be made with the rack is generated
    let size = board.size();
    for word in words {
        for dir in Direction::BOTH {
            for row in 1..=size {
                for col in 1..=size {
                    let coord = Coord::new(row, col, dir);
                    let candidate = candidate(word, &coord.to_string());

                    if let Ok(round) = board.check_round(&candidate) {
                        if rack.is_superset_of(&round.rack_tiles()) {
                            assert!(
                                available_set.contains(&round),
                                "valid round {:?} was not generated",
                                round
                            );
                        }
                    }
                }
            }
        }
    }

    available
}

fn test_round_trip<D: Dictionary>(board: &Board<D>, available: &[Round]) {
    for round in available.iter().take(20) {
        let mut copy = board.clone();
        copy.add_round(round);
        assert_eq!(board.tile_count() + round.rack_tile_count() as usize, copy.tile_count());

        copy.remove_round(round);
        assert_eq!(board, &copy, "add/remove of {:?} did not restore the board", round);
    }
}

fn test_rebuild_idempotent<D: Dictionary>(board: &Board<D>) {
    let mut copy = board.clone();
    copy.rebuild_cross_checks();
    assert_eq!(board, &copy);
}
