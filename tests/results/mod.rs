use internal_iterator::InternalIterator;

use scrabble_engine::board::Board;
use scrabble_engine::rack::Rack;
use scrabble_engine::results::{compare_rounds, BestResults, LimitResults, PercentResults, RoundCollector};
use scrabble_engine::round::Round;

use crate::util::{play, rack, round_strings, test_dict};

fn position() -> Board {
    let mut board = Board::standard(test_dict());
    play(&mut board, "STONE", "H8");
    play(&mut board, "STAR", "8H");
    board
}

fn searched(collector: &mut impl RoundCollector, board: &Board, rack: &Rack) -> Vec<String> {
    collector.search(board, rack);
    round_strings(collector.rounds())
}

fn all_sorted(board: &Board, rack: &Rack) -> Vec<Round> {
    let mut all: Vec<Round> = board.available_rounds(rack).collect();
    all.sort_by(compare_rounds);
    all
}

#[test]
fn best_is_uniform() {
    let board = position();
    for rack in ["AEILT?", "QUIZ", "BOX", "EEEEE"].map(rack) {
        let mut best = BestResults::default();
        best.search(&board, &rack);

        let all = all_sorted(&board, &rack);
        match all.first() {
            None => assert!(best.is_empty()),
            Some(first) => {
                assert_eq!(first, &best.rounds()[0]);
                assert!(best.rounds().iter().all(|r| r.score() == first.score()));

                let tied = all.iter().filter(|r| r.score() == first.score()).count();
                assert_eq!(tied, best.len());
            }
        }
    }
}

#[test]
fn full_percent_is_best() {
    let board = position();
    let rack = rack("AEIRT??");

    let best = searched(&mut BestResults::default(), &board, &rack);
    let full = searched(&mut PercentResults::new(1.0), &board, &rack);
    assert!(!best.is_empty());
    assert_eq!(best, full);
}

#[test]
fn percent_picks_lowest_score_above_threshold() {
    let board = position();
    let rack = rack("AEIRT??");
    let all = all_sorted(&board, &rack);
    let best = all[0].score();

    for percent in [0.0, 0.25, 0.5, 0.9] {
        let mut results = PercentResults::new(percent);
        results.search(&board, &rack);

        let threshold = (best as f32 * percent).ceil() as u32;
        let target = all.iter().map(Round::score).filter(|&s| s >= threshold).min().unwrap();

        assert!(!results.is_empty());
        assert!(results.rounds().iter().all(|r| r.score() == target), "percent {}", percent);
        let count = all.iter().filter(|r| r.score() == target).count();
        assert_eq!(count, results.len());
    }
}

#[test]
fn limit_is_prefix_of_all() {
    let board = position();
    let rack = rack("AEIRT??");

    let all = round_strings(&all_sorted(&board, &rack));
    let unlimited = searched(&mut LimitResults::new(0), &board, &rack);
    assert_eq!(all, unlimited);

    for limit in [1, 2, 5, 20, 100, all.len() + 10] {
        let results = searched(&mut LimitResults::new(limit), &board, &rack);
        let expected = all.iter().take(limit).cloned().collect::<Vec<_>>();
        assert_eq!(expected, results, "limit {}", limit);
    }

    let best = searched(&mut BestResults::default(), &board, &rack);
    let one = searched(&mut LimitResults::new(1), &board, &rack);
    assert_eq!(best[..1], one[..]);
}

#[test]
fn search_replaces_previous_results() {
    let board = position();
    let mut results = LimitResults::new(0);

    let first = searched(&mut results, &board, &rack("AEIRT??"));
    let second = searched(&mut results, &board, &rack("BOX"));
    assert_ne!(first, second);
    assert_eq!(second, searched(&mut LimitResults::new(0), &board, &rack("BOX")));
}

#[test]
fn board_search_accumulates() {
    let board = position();
    let mut results = LimitResults::new(0);

    board.search(&rack("BOX"), &mut results);
    let single = results.len();
    board.search(&rack("BOX"), &mut results);
    assert_eq!(2 * single, results.len());
}
