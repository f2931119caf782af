//! Policies that decide which of the generated rounds are kept.
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::rack::Rack;
use crate::round::Round;

/// Receives the rounds found by a search and keeps some of them.
pub trait RoundCollector {
    fn add(&mut self, round: &Round);

    fn clear(&mut self);

    /// Called once at the end of a search, puts the kept rounds in [compare_rounds] order.
    fn sort(&mut self);

    fn rounds(&self) -> &[Round];

    fn len(&self) -> usize {
        self.rounds().len()
    }

    fn is_empty(&self) -> bool {
        self.rounds().is_empty()
    }

    /// Replace the current contents with the rounds playable with `rack`,
    /// the opening rounds if the board is still empty.
    fn search<D: Dictionary>(&mut self, board: &Board<D>, rack: &Rack)
    where
        Self: Sized,
    {
        self.clear();
        if board.is_empty() {
            board.search_first(rack, self);
        } else {
            board.search(rack, self);
        }
    }
}

/// The order rounds are presented in: best score first, ties broken alphabetically so the
/// result does not depend on the order in which the rounds were found.
pub fn compare_rounds(a: &Round, b: &Round) -> Ordering {
    b.score()
        .cmp(&a.score())
        .then_with(|| a.letters().cmp(b.letters()))
        .then_with(|| a.coord().to_string().cmp(&b.coord().to_string()))
        .then_with(|| a.word().cmp(&b.word()))
}

fn sort_rounds(rounds: &mut [Round]) {
    rounds.sort_by(compare_rounds);
}

/// Keeps all rounds tied for the best score.
#[derive(Debug, Clone, Default)]
pub struct BestResults {
    best: u32,
    rounds: Vec<Round>,
}

impl RoundCollector for BestResults {
    fn add(&mut self, round: &Round) {
        if self.rounds.is_empty() || round.score() > self.best {
            self.rounds.clear();
            self.best = round.score();
        }
        if round.score() == self.best {
            self.rounds.push(round.clone());
        }
    }

    fn clear(&mut self) {
        self.best = 0;
        self.rounds.clear();
    }

    fn sort(&mut self) {
        sort_rounds(&mut self.rounds);
    }

    fn rounds(&self) -> &[Round] {
        &self.rounds
    }
}

/// Keeps the rounds with the lowest score that still reaches a fraction of the best score.
///
/// All rounds are stored during the search, the selection only happens in [RoundCollector::sort].
#[derive(Debug, Clone)]
pub struct PercentResults {
    percent: f32,
    rounds: Vec<Round>,
}

impl PercentResults {
    /// `percent` is the fraction of the best score to aim for, between 0 and 1.
    pub fn new(percent: f32) -> Self {
        assert!((0.0..=1.0).contains(&percent), "percent {} is not in 0..=1", percent);
        PercentResults {
            percent,
            rounds: vec![],
        }
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }
}

impl RoundCollector for PercentResults {
    fn add(&mut self, round: &Round) {
        self.rounds.push(round.clone());
    }

    fn clear(&mut self) {
        self.rounds.clear();
    }

    fn sort(&mut self) {
        let best = match self.rounds.iter().map(Round::score).max() {
            None => return,
            Some(best) => best,
        };

        let threshold = (best as f32 * self.percent).ceil() as u32;
        let target = self
            .rounds
            .iter()
            .map(Round::score)
            .filter(|&s| s >= threshold)
            .min()
            .unwrap_or(best);

        self.rounds.retain(|r| r.score() == target);
        sort_rounds(&mut self.rounds);
    }

    fn rounds(&self) -> &[Round] {
        &self.rounds
    }
}

/// Keeps the `limit` best rounds, or all of them if `limit` is zero.
///
/// Rounds that can no longer make it into the top are dropped during the search already.
#[derive(Debug, Clone, Default)]
pub struct LimitResults {
    limit: usize,
    rounds: Vec<Round>,
    score_counts: BTreeMap<u32, usize>,
    min_score: Option<u32>,
}

impl LimitResults {
    pub fn new(limit: usize) -> Self {
        LimitResults {
            limit,
            ..Default::default()
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Raise the minimum score to the lowest score for which at least `limit` rounds are known.
    fn raise_min_score(&mut self) {
        let mut seen = 0;
        let mut new_min = None;
        for (&score, &count) in self.score_counts.iter().rev() {
            seen += count;
            if seen >= self.limit {
                new_min = Some(score);
                break;
            }
        }

        if let Some(new_min) = new_min {
            if self.min_score.map_or(true, |min| new_min > min) {
                self.min_score = Some(new_min);
                self.score_counts = self.score_counts.split_off(&new_min);
                self.rounds.retain(|r| r.score() >= new_min);
            }
        }
    }
}

impl RoundCollector for LimitResults {
    fn add(&mut self, round: &Round) {
        if self.min_score.map_or(false, |min| round.score() < min) {
            return;
        }

        self.rounds.push(round.clone());
        *self.score_counts.entry(round.score()).or_default() += 1;

        if self.limit != 0 {
            self.raise_min_score();
        }
    }

    fn clear(&mut self) {
        self.rounds.clear();
        self.score_counts.clear();
        self.min_score = None;
    }

    fn sort(&mut self) {
        sort_rounds(&mut self.rounds);
        if self.limit != 0 {
            self.rounds.truncate(self.limit);
        }
    }

    fn rounds(&self) -> &[Round] {
        &self.rounds
    }
}
