use scrabble_engine::board::Board;
use scrabble_engine::layout::{BoardLayout, Rules};
use scrabble_engine::rack::Rack;
use scrabble_engine::util::game_stats::play_solo_game;
use scrabble_engine::util::tiny::{consistent_rng, seeded_rng};

use crate::board::board_test_main;
use crate::util::{test_dict, WORDS};

#[test]
fn selfplay_positions() {
    let mut board = Board::standard(test_dict());
    let mut rng = consistent_rng();

    let mut seen = 0;
    let stats = play_solo_game(&mut board, &mut rng, |board, rack, _| {
        seen += 1;
        board_test_main(board, rack, WORDS);
    });

    assert_eq!(stats.rounds, seen);
    assert!(stats.rounds > 0);
}

#[test]
fn selfplay_stats() {
    for seed in 0..4 {
        let mut board = Board::standard(test_dict());
        let mut rng = seeded_rng(seed);

        let mut scores = vec![];
        let stats = play_solo_game(&mut board, &mut rng, |_, _, round| scores.push(round.score()));

        assert_eq!(scores.len(), stats.rounds);
        assert_eq!(scores.iter().sum::<u32>(), stats.total_score);
        assert!(stats.available_rounds >= stats.rounds);
        assert!(stats.bonus_count <= stats.rounds);

        // every tile is either on the board or still waiting to be played
        let total = Rack::starting_bag().tile_count() as usize;
        assert_eq!(total, board.tile_count() + stats.tiles_left as usize);
    }
}

#[test]
fn selfplay_eight_tile_rack() {
    let mut board = Board::new(test_dict(), BoardLayout::standard(), Rules::seven_among_eight());
    let mut rng = seeded_rng(7);

    let stats = play_solo_game(&mut board, &mut rng, |board, rack, round| {
        assert!(rack.tile_count() <= 8);
        assert!(round.rack_tile_count() <= 7);
        board.check_round(round).unwrap();
    });
    assert!(stats.rounds > 0);
}

#[test]
fn selfplay_small_board() {
    let layout = BoardLayout::from_rows(&["=.'.=", ".-.-.", "'.-.'", ".-.-.", "=.'.="]).unwrap();
    let mut board = Board::new(test_dict(), layout, Rules::default());
    let mut rng = seeded_rng(3);

    play_solo_game(&mut board, &mut rng, |board, rack, _| {
        board_test_main(board, rack, WORDS);
    });
}
