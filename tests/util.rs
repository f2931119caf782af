use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;

use scrabble_engine::board::Board;
use scrabble_engine::coord::Coord;
use scrabble_engine::dictionary::{Dictionary, FstDictionary};
use scrabble_engine::rack::Rack;
use scrabble_engine::round::Round;
use scrabble_engine::tile::Tile;

/// A small word list that still allows games of a reasonable length.
pub const WORDS: &[&str] = &[
    "AA", "AB", "AD", "AE", "AG", "AH", "AI", "AL", "AM", "AN", "AR", "AS", "AT", "AW", "AX", "AY", "BA", "BE", "BI",
    "BO", "BY", "DA", "DE", "DO", "ED", "EF", "EH", "EL", "EM", "EN", "ER", "ES", "EX", "FA", "FE", "GO", "HA", "HE",
    "HI", "HM", "HO", "ID", "IF", "IN", "IS", "IT", "JO", "KA", "KI", "LA", "LI", "LO", "MA", "ME", "MI", "MO", "MU",
    "MY", "NA", "NE", "NO", "NU", "OD", "OE", "OF", "OH", "OI", "OM", "ON", "OP", "OR", "OS", "OW", "OX", "OY", "PA",
    "PE", "PI", "QI", "RE", "SH", "SI", "SO", "TA", "TI", "TO", "UH", "UM", "UN", "UP", "US", "UT", "WE", "WO", "XI",
    "XU", "YA", "YE", "YO", "ZA", "CAT", "CATS", "SCAT", "ACT", "ACTS", "TAR", "RAT", "RATS", "STAR", "ARTS", "TEA",
    "EAT", "ATE", "SEA", "SAT", "SET", "NET", "TEN", "TAN", "ANT", "ANTS", "RAN", "EAR", "ERA", "ARE", "RATE", "TEAR",
    "TARE", "RATES", "STARE", "TEARS", "RETAIN", "RETAINS", "NOTE", "TONE", "STONE", "ONES", "NOSE", "ROSE", "SORE",
    "ORE", "ROE", "TOE", "DOE", "DOG", "GOD", "LOG", "OLD", "FOLD", "GOLD", "BOLD", "HOLD", "HELD", "LED", "RED",
    "BED", "BAD", "BAG", "BIG", "DIG", "FIG", "JIG", "PIG", "WIG", "ZIP", "ZAP", "QUIZ", "QUIT", "QUITE", "JUMP",
    "JAM", "HAM", "HIM", "HIT", "HAT", "MAT", "MATE", "MEAT", "TEAM", "STEAM", "SEAM", "SAME", "FAME", "GAME", "NAME",
    "LANE", "LINE", "LIME", "MILE", "TILE", "TILES", "ISLE", "LIES", "SLIT", "LIST", "SILT", "WAX", "WAXY", "BOX",
    "FOX", "YES", "YET", "KEY", "KIT", "KITE", "SKI", "INK", "LINK", "SINK", "PINK", "WINK", "VAN", "VAT", "VOTE",
    "VET", "VEST",
];

pub fn dict(words: &[&str]) -> Arc<FstDictionary> {
    Arc::new(FstDictionary::from_words(words).unwrap())
}

pub fn test_dict() -> Arc<FstDictionary> {
    dict(WORDS)
}

pub fn rack(s: &str) -> Rack {
    Rack::from_letters(s).unwrap()
}

/// A candidate round from its textual form, lowercase letters are jokers.
pub fn candidate(word: &str, coord: &str) -> Round {
    let coord: Coord = coord.parse().unwrap();
    Round::from_tiles(coord, word.chars().map(|c| Tile::from_char(c).unwrap()))
}

pub fn play<D: Dictionary>(board: &mut Board<D>, word: &str, coord: &str) -> Round {
    let round = board
        .check_round(&candidate(word, coord))
        .unwrap_or_else(|e| panic!("cannot play {} at {}: {}", word, coord, e));
    board.add_round(&round);
    round
}

pub fn round_strings(rounds: &[Round]) -> Vec<String> {
    rounds.iter().map(|r| r.to_string()).collect()
}

/// Check that drawing from `rack` picks every tile with a probability proportional to its count.
pub fn test_draw_uniform(rack: Rack, rng: &mut impl Rng) {
    let total = rack.tile_count() as u64;
    assert!(total > 0, "cannot test an empty rack");

    let samples_per_tile = 1000;
    let total_samples = samples_per_tile * total;

    let mut counts: HashMap<Tile, u64> = HashMap::new();
    for _ in 0..total_samples {
        let mut copy = rack;
        let tile = copy.remove_sample(rng);
        assert!(rack.contains(tile), "drew {:?} which is not in {:?}", tile, rack);
        *counts.entry(tile).or_default() += 1;
    }

    let mut expected: HashMap<Tile, u64> = HashMap::new();
    for tile in rack.tiles() {
        *expected.entry(tile).or_default() += 1;
    }

    for (tile, &count) in &expected {
        let sampled = counts.get(tile).copied().unwrap_or(0);
        let relative = sampled as f32 / (samples_per_tile * count) as f32;

        assert!(
            (0.8..1.2).contains(&relative),
            "Tile {:?} was over/under sampled {} ~ {}",
            tile,
            sampled,
            relative,
        );
    }
}
