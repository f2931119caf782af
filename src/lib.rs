#![warn(missing_debug_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::new_without_default)]
#![allow(clippy::len_without_is_empty)]

//! A move engine for crossword board games like [Scrabble](https://en.wikipedia.org/wiki/Scrabble).
//!
//! Given a [Board](crate::board::Board), a [Dictionary](crate::dictionary::Dictionary) and a
//! [Rack](crate::rack::Rack) of tiles, the engine finds every legal word placement, scores it,
//! and keeps a ranked selection according to a [RoundCollector](crate::results::RoundCollector).
//!
//! # Features
//!
//! * Move generation based on the anchor / cross-check algorithm from
//!     [The World's Fastest Scrabble Program](https://www.cs.cmu.edu/afs/cs/academic/class/15451-s06/www/lectures/scrabble.pdf),
//!     see [movegen](crate::movegen).
//! * Wildcards, standing in for any letter and worth nothing once played.
//! * Validation and scoring of hand-built placements with [Board::check_round](crate::board::Board::check_round).
//! * Retention policies:
//!     * [BestResults](crate::results::BestResults), which keeps all rounds tied for the best score.
//!     * [PercentResults](crate::results::PercentResults), which aims for a fraction of the best score.
//!     * [LimitResults](crate::results::LimitResults), which keeps the top `n` rounds.
//! * A dictionary implementation based on the [fst](https://crates.io/crates/fst) crate,
//!     see [FstDictionary](crate::dictionary::FstDictionary).
//! * Configurable board layouts and rules, see [BoardLayout](crate::layout::BoardLayout)
//!     and [Rules](crate::layout::Rules).
//!
//! # Examples
//!
//! ## Find the best opening round
//!
//! ```
//! # use std::sync::Arc;
//! # use scrabble_engine::board::Board;
//! # use scrabble_engine::dictionary::FstDictionary;
//! # use scrabble_engine::rack::Rack;
//! # use scrabble_engine::results::{BestResults, RoundCollector};
//! let dict = FstDictionary::from_words(["CAT", "AT", "TA"]).unwrap();
//! let mut board = Board::standard(Arc::new(dict));
//! let rack = Rack::from_letters("CAT????").unwrap();
//!
//! let mut results = BestResults::default();
//! results.search(&board, &rack);
//!
//! // the same word can be placed in three spots covering the center square
//! assert_eq!(3, results.len());
//! let best = results.rounds()[0].clone();
//! assert_eq!("CAT H6 10", best.to_string());
//!
//! board.add_round(&best);
//! println!("{}", board);
//! ```
//!
//! ## Stream all rounds
//!
//! ```
//! # use std::sync::Arc;
//! # use scrabble_engine::board::Board;
//! # use scrabble_engine::dictionary::FstDictionary;
//! # use scrabble_engine::rack::Rack;
//! # use internal_iterator::InternalIterator;
//! let dict = FstDictionary::from_words(["CAT", "AT", "TA"]).unwrap();
//! let board = Board::standard(Arc::new(dict));
//!
//! board.available_rounds(&Rack::from_letters("TAC").unwrap()).for_each(|round| {
//!     println!("{}", round);
//! });
//! ```

pub mod tile;
pub mod rack;

pub mod coord;
pub mod layout;

pub mod dictionary;

pub mod grid;
pub mod cross;
pub mod score;
pub mod movegen;

pub mod round;
pub mod board;
pub mod results;

pub mod util;
