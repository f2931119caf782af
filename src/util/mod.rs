//! Various utility functions.
pub mod game_stats;
pub mod tiny;
