//! Randomized motif search with best-ever tracking.

use rand::Rng;

use super::Discovery;
use super::check_inputs;
use super::check_pseudocount;
use super::random_motifs;
use super::refine;
use crate::abc::Alphabet;
use crate::err::Error;
use crate::err::Result;
use crate::seq::EncodedSequence;

/// Randomized motif search: random start, profile refinement, best-ever kept.
///
/// One run initializes the motifs with a uniformly chosen window per
/// sequence, then refines exactly like [`GreedySearch`], tracking the
/// best-scoring motif set seen across sweeps. The run stops once no sweep
/// has improved the best score for `patience` consecutive sweeps, and
/// returns the best set ever observed, which is not necessarily the last.
///
/// In practice the strategy is restarted many times with fresh randomness
/// and the global best kept; [`RandomizedSearch::run_restarts`] does so with
/// a single injected random source.
///
/// [`GreedySearch`]: super::GreedySearch
#[derive(Debug, Clone)]
pub struct RandomizedSearch<'s, A: Alphabet> {
    sequences: &'s [EncodedSequence<A>],
    width: usize,
    pseudocount: f64,
    patience: usize,
}

impl<'s, A: Alphabet> RandomizedSearch<'s, A> {
    /// Create a new randomized search for motifs of the given width.
    pub fn new(sequences: &'s [EncodedSequence<A>], width: usize) -> Self {
        Self {
            sequences,
            width,
            pseudocount: 1.0,
            patience: 5,
        }
    }

    /// Change the pseudocount used when building profiles.
    pub fn pseudocount(mut self, pseudocount: f64) -> Self {
        self.pseudocount = pseudocount;
        self
    }

    /// Change the number of consecutive non-improving sweeps tolerated
    /// before the run stops.
    pub fn patience(mut self, patience: usize) -> Self {
        self.patience = patience.max(1);
        self
    }

    /// Run a single randomized restart with the given random source.
    pub fn run<R: Rng>(&self, rng: &mut R) -> Result<Discovery<A>> {
        check_inputs(self.sequences, self.width)?;
        check_pseudocount(self.pseudocount)?;

        let mut motifs = random_motifs(self.sequences, self.width, rng);
        let mut best = Discovery::new(motifs.clone());
        let mut stagnant = 0;
        while stagnant < self.patience {
            motifs = refine(self.sequences, &motifs, self.pseudocount)?;
            let score = motifs.score();
            if score < best.score() {
                best = Discovery {
                    motifs: motifs.clone(),
                    score,
                };
                stagnant = 0;
            } else {
                stagnant += 1;
            }
        }
        Ok(best)
    }

    /// Run several restarts and keep the globally best discovery.
    pub fn run_restarts<R: Rng>(&self, restarts: usize, rng: &mut R) -> Result<Discovery<A>> {
        if restarts == 0 {
            return Err(Error::InvalidInput("restart count cannot be zero"));
        }
        let mut best = self.run(rng)?;
        for _ in 1..restarts {
            let candidate = self.run(rng)?;
            if candidate.score() < best.score() {
                best = candidate;
            }
        }
        Ok(best)
    }
}
