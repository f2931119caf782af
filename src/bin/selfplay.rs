use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use scrabble_engine::board::Board;
use scrabble_engine::dictionary::FstDictionary;
use scrabble_engine::layout::{BoardLayout, Rules};
use scrabble_engine::util::game_stats::play_solo_game;
use scrabble_engine::util::tiny::seeded_rng;

#[derive(Parser, Debug)]
#[command(name = "selfplay", about = "Play solo games with the best round every turn and report timings.")]
struct Args {
    /// Word list with one word per line, or a serialized fst set with `--fst`.
    dictionary: PathBuf,

    /// Treat the dictionary file as serialized fst bytes.
    #[arg(long, default_value_t = false)]
    fst: bool,

    /// Seed for the tile draws.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u64,

    /// Use an eight tile rack of which at most seven can be played.
    #[arg(long, default_value_t = false)]
    seven_among_eight: bool,

    /// Print the board after every round.
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let start = Instant::now();
    let dict = if args.fst {
        let bytes = fs::read(&args.dictionary).with_context(|| format!("reading {}", args.dictionary.display()))?;
        FstDictionary::from_bytes(bytes)?
    } else {
        let list =
            fs::read_to_string(&args.dictionary).with_context(|| format!("reading {}", args.dictionary.display()))?;
        FstDictionary::from_word_list(&list)?
    };
    info!("loaded {} words in {:?}", dict.len(), start.elapsed());

    let rules = if args.seven_among_eight {
        Rules::seven_among_eight()
    } else {
        Rules::default()
    };
    let dict = Arc::new(dict);

    let mut total_rounds = 0;
    let start = Instant::now();

    for game in 0..args.games {
        let mut rng = seeded_rng(args.seed + game);
        let mut board = Board::new(Arc::clone(&dict), BoardLayout::standard(), rules);

        let stats = play_solo_game(&mut board, &mut rng, |board, rack, round| {
            if args.verbose {
                println!("{}", board);
                println!("{} plays {}", rack, round);
            }
        });

        println!("{}", board);
        println!("game {}: {:?}", game, stats);
        total_rounds += stats.rounds;
    }

    let elapsed = start.elapsed();
    info!(
        "played {} games, {} rounds in {:?} ({:?} per round)",
        args.games,
        total_rounds,
        elapsed,
        elapsed / (total_rounds.max(1) as u32)
    );

    Ok(())
}
