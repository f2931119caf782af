use std::ops::ControlFlow;

use internal_iterator::InternalIterator;

use scrabble_engine::board::{Board, RoundError};
use scrabble_engine::coord::Direction;
use scrabble_engine::layout::{BoardLayout, Rules};
use scrabble_engine::results::{BestResults, LimitResults, RoundCollector};
use scrabble_engine::tile::Mask;

use crate::board::board_test_main;
use scrabble_engine::util::tiny::consistent_rng;

use crate::util::{candidate, dict, play, rack, round_strings, test_dict, test_draw_uniform, WORDS};

#[test]
fn first_round_wildcards() {
    let board = Board::standard(dict(&["CAT"]));
    let mut results = BestResults::default();
    results.search(&board, &rack("CAT????"));

    assert_eq!(vec!["CAT H6 10", "CAT H7 10", "CAT H8 10"], round_strings(results.rounds()));
    board_test_main(&board, &rack("CAT????"), &["CAT"]);
}

#[test]
fn first_round_bonus() {
    let board = Board::standard(dict(&["RETAINS"]));
    let mut results = BestResults::default();
    results.search(&board, &rack("SATIREN"));

    // every placement but the one starting on column 5 reaches a double letter square
    assert_eq!(
        vec![
            "RETAINS H2 66",
            "RETAINS H3 66",
            "RETAINS H4 66",
            "RETAINS H6 66",
            "RETAINS H7 66",
            "RETAINS H8 66",
        ],
        round_strings(results.rounds())
    );
    assert!(results.rounds().iter().all(|r| r.is_bonus()));

    let mut all = LimitResults::new(0);
    all.search(&board, &rack("SATIREN"));
    assert_eq!(7, all.len());
    assert_eq!("RETAINS H5 64", all.rounds()[6].to_string());
}

#[test]
fn first_round_eight_tile_rack() {
    let layout = BoardLayout::standard();
    let board = Board::new(dict(&["RETAINS", "STAINER"]), layout, Rules::seven_among_eight());

    let mut all = LimitResults::new(0);
    all.search(&board, &rack("SATIRENX"));
    assert!(!all.is_empty());
    assert!(all.rounds().iter().all(|r| r.rack_tile_count() == 7 && r.is_bonus()));
}

#[test]
fn cross_checks_after_first_round() {
    let mut board = Board::standard(dict(&["CAT", "CATS", "AT", "TA", "SCAT"]));
    play(&mut board, "CAT", "H8");

    assert_eq!(Mask::from_letters("T").unwrap(), board.allowed(9, 9, Direction::Horizontal));
    assert_eq!(Some(1), board.cross_score(9, 9, Direction::Horizontal));

    assert_eq!(Mask::NONE, board.allowed(7, 8, Direction::Horizontal));
    assert_eq!(Some(3), board.cross_score(7, 8, Direction::Horizontal));

    assert_eq!(Mask::ALL_LETTERS, board.allowed(8, 11, Direction::Horizontal));
    assert_eq!(None, board.cross_score(8, 11, Direction::Horizontal));

    assert_eq!(Mask::from_letters("S").unwrap(), board.allowed(8, 11, Direction::Vertical));
    assert_eq!(Some(5), board.cross_score(8, 11, Direction::Vertical));
    assert_eq!(Mask::from_letters("S").unwrap(), board.allowed(8, 7, Direction::Vertical));
    assert_eq!(Some(5), board.cross_score(8, 7, Direction::Vertical));

    assert_eq!(Mask::NONE, board.allowed(8, 8, Direction::Horizontal));
    assert_eq!(Mask::NONE, board.allowed(8, 8, Direction::Vertical));
}

#[test]
fn extend_existing_word() {
    let mut board = Board::standard(dict(&["CAT", "CATS", "AT", "TA", "SCAT"]));
    play(&mut board, "CAT", "H8");

    let cats = board.check_round(&candidate("CATS", "H8")).unwrap();
    assert_eq!(6, cats.score());

    let mut results = BestResults::default();
    results.search(&board, &rack("S"));
    assert_eq!(vec!["CATS H8 6", "SCAT H7 6"], round_strings(results.rounds()));

    board_test_main(&board, &rack("S"), &["CAT", "CATS", "AT", "TA", "SCAT"]);
}

#[test]
fn parallel_word_scores_cross_words() {
    let words = ["AT", "TA", "CAT"];
    let mut board = Board::standard(dict(&words));
    play(&mut board, "CAT", "H8");

    // T on a double letter square under the A, A under the T
    let ta = board.check_round(&candidate("TA", "I9")).unwrap();
    assert_eq!(8, ta.score());

    let mut all = LimitResults::new(0);
    all.search(&board, &rack("TA"));
    assert!(round_strings(all.rounds()).contains(&"TA I9 8".to_string()));

    board_test_main(&board, &rack("TA"), &words);
}

#[test]
fn joker_on_letter_multiplier() {
    // the left square triples the letter and doubles the word
    let mut letter = vec![1; 9];
    let mut word = vec![1; 9];
    letter[3] = 3;
    word[3] = 2;
    let layout = BoardLayout::new(3, letter, word).unwrap();
    let board = Board::new(dict(&["CAT"]), layout, Rules::default());

    assert_eq!(22, board.check_round(&candidate("CAT", "B1")).unwrap().score());
    assert_eq!(4, board.check_round(&candidate("cAT", "B1")).unwrap().score());

    let mut results = BestResults::default();
    results.search(&board, &rack("?AT"));
    assert_eq!(vec!["cAT B1 4"], round_strings(results.rounds()));
}

#[test]
fn joker_on_board_is_worth_nothing() {
    let words = ["CAT", "CATS", "AT", "TA"];
    let mut board = Board::standard(dict(&words));
    play(&mut board, "cAT", "H8");

    // (0 + 1 + 1 + 1)
    let cats = board.check_round(&candidate("CATS", "H8")).unwrap();
    assert_eq!(3, cats.score());
    assert!(cats.tiles()[0].joker);
    assert_eq!("cATS", cats.word());
}

#[test]
fn check_round_errors() {
    let mut board = Board::standard(test_dict());
    assert_eq!(Err(RoundError::FirstWordVertical), board.check_round(&candidate("CAT", "8H")));
    assert_eq!(Err(RoundError::FirstWordOffCenter), board.check_round(&candidate("CAT", "A1")));

    play(&mut board, "CAT", "H8");
    let codes = [
        ("AT", "H9"),
        ("DOG", "H8"),
        ("AT", "G8"),
        ("CAT", "H8"),
        ("CAT", "A1"),
        ("CAT", "O14"),
    ]
    .map(|(word, coord)| board.check_round(&candidate(word, coord)).unwrap_err().code());
    assert_eq!([1, 2, 3, 4, 5, 8], codes);
}

#[test]
fn isolated_single_tile_board() {
    let words = ["AT", "TA", "TAT", "AA"];
    let mut board = Board::new(dict(&words), BoardLayout::plain(5).unwrap(), Rules::default());
    play(&mut board, "AT", "C2");

    board_test_main(&board, &rack("TA"), &words);
    board_test_main(&board, &rack("A?"), &words);
}

#[test]
fn early_exit_stops_search() {
    let mut board = Board::standard(test_dict());
    play(&mut board, "STONE", "H8");
    let rack = rack("AEIRT??");

    let total = board.available_rounds(&rack).count();
    assert!(total > 10);

    let mut seen = 0;
    let result = board.available_rounds(&rack).try_for_each(|round| {
        seen += 1;
        if seen == 10 {
            ControlFlow::Break(round)
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(10, seen);
    assert!(matches!(result, ControlFlow::Break(_)));
}

#[test]
fn concurrent_searches() {
    let mut board = Board::standard(test_dict());
    play(&mut board, "STONE", "H8");
    play(&mut board, "STAR", "8H");

    let racks = ["AEIRT??", "QUIZJAM", "LINKS", "BOX"].map(rack);
    let expected = racks.map(|rack| {
        let mut results = LimitResults::new(0);
        results.search(&board, &rack);
        round_strings(results.rounds())
    });

    let board = &board;
    std::thread::scope(|s| {
        for (rack, expected) in racks.iter().zip(&expected) {
            s.spawn(move || {
                let mut results = LimitResults::new(0);
                results.search(board, rack);
                assert_eq!(expected, &round_strings(results.rounds()));
            });
        }
    });
}

#[test]
fn later_position() {
    let mut board = Board::standard(test_dict());
    play(&mut board, "STONE", "H8");
    play(&mut board, "STAR", "8H");
    play(&mut board, "RATES", "K8");

    board_test_main(&board, &rack("AEILT?"), WORDS);
}

#[test]
fn draw_from_rack() {
    let mut rng = consistent_rng();
    test_draw_uniform(rack("AAB?"), &mut rng);
    test_draw_uniform(rack("QUIZ??E"), &mut rng);
}
