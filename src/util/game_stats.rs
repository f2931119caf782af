//! Utilities for playing out games and collecting statistics, useful to test the move generator
//! on realistic positions.
use internal_iterator::InternalIterator;
use log::{debug, info};
use rand::Rng;

use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::rack::Rack;
use crate::results::{BestResults, RoundCollector};
use crate::round::Round;

/// Structure returned by [`play_solo_game`].
#[derive(Debug, Clone, Default)]
pub struct GameStats {
    pub rounds: usize,
    pub total_score: u32,
    pub bonus_count: usize,
    /// The total number of rounds available over all turns.
    pub available_rounds: usize,
    pub tiles_left: u8,
}

/// Play a game alone, always picking the first of the best rounds, until the rack cannot be played.
///
/// Tiles are drawn from a full bag with `rng`. `on_round` is called with the board before each round is played.
pub fn play_solo_game<D: Dictionary>(
    board: &mut Board<D>,
    rng: &mut impl Rng,
    mut on_round: impl FnMut(&Board<D>, &Rack, &Round),
) -> GameStats {
    let rack_size = board.rules().rack_size;

    let mut bag = Rack::starting_bag();
    let mut rack = Rack::default();
    rack.refill_from(&mut bag, rack_size, rng);

    let mut stats = GameStats::default();
    let mut results = BestResults::default();

    loop {
        stats.available_rounds += board.available_rounds(&rack).count();

        results.search(&*board, &rack);
        let round = match results.rounds().first() {
            None => break,
            Some(round) => round.clone(),
        };
        debug!("{:?} plays {}", rack, round);
        on_round(board, &rack, &round);

        let removed = rack.try_remove_all(&round.rack_tiles());
        assert!(removed, "{:?} does not fit in {:?}", round, rack);
        board.add_round(&round);

        stats.rounds += 1;
        stats.total_score += round.score();
        stats.bonus_count += round.is_bonus() as usize;

        rack.refill_from(&mut bag, rack_size, rng);
        if rack.is_empty() {
            break;
        }
    }

    stats.tiles_left = rack.tile_count() + bag.tile_count();
    info!(
        "game finished after {} rounds, score {}, {} tiles left",
        stats.rounds, stats.total_score, stats.tiles_left
    );
    stats
}
