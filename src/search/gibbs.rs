//! Gibbs-sampling motif search.

use rand::Rng;
use rand::distributions::Uniform;

use super::Discovery;
use super::check_inputs;
use super::check_pseudocount;
use super::random_motifs;
use crate::abc::Alphabet;
use crate::err::Error;
use crate::err::Result;
use crate::motifs::Motifs;
use crate::scan;
use crate::seq::EncodedSequence;

/// A Gibbs sampler over motif sets.
///
/// The sampler owns its injected random source and advances one resampling
/// step per [`Iterator::next`] call: pick a holdout sequence uniformly at
/// random, build a profile from the remaining motifs, and resample the
/// holdout's motif with every window weighted by its probability under that
/// profile. This weighted draw is the one place a strategy samples instead
/// of taking an argmax, which lets the chain wander out of local optima.
///
/// Because sampling can wander, the best-ever motif set is tracked across
/// steps over immutable snapshots; [`GibbsSampler::run`] returns it after a
/// fixed number of steps, and each yielded [`GibbsIteration`] exposes the
/// running best score so a trace can be recorded.
#[derive(Debug)]
pub struct GibbsSampler<'s, A: Alphabet, R: Rng> {
    sequences: &'s [EncodedSequence<A>],
    pseudocount: f64,
    rng: R,
    /// The current state of the chain.
    motifs: Motifs<A>,
    /// The best-scoring snapshot observed so far.
    best: Discovery<A>,
    /// Uniform distribution over sequence indices for the holdout choice.
    holdout: Uniform<usize>,
}

impl<'s, A: Alphabet, R: Rng> GibbsSampler<'s, A, R> {
    /// Create a new sampler, drawing the initial motif set from `rng`.
    ///
    /// # Errors
    /// Returns `InvalidInput` on malformed inputs; the sampler needs at
    /// least two sequences so a profile remains once one is held out.
    pub fn new(
        sequences: &'s [EncodedSequence<A>],
        width: usize,
        pseudocount: f64,
        mut rng: R,
    ) -> Result<Self> {
        check_inputs(sequences, width)?;
        check_pseudocount(pseudocount)?;
        if sequences.len() < 2 {
            return Err(Error::InvalidInput(
                "gibbs sampling requires at least two sequences",
            ));
        }
        let motifs = random_motifs(sequences, width, &mut rng);
        let best = Discovery::new(motifs.clone());
        Ok(Self {
            sequences,
            pseudocount,
            rng,
            motifs,
            best,
            holdout: Uniform::new(0, sequences.len()),
        })
    }

    /// The best discovery observed so far.
    #[inline]
    pub fn best(&self) -> &Discovery<A> {
        &self.best
    }

    /// Advance the chain by `iterations` steps and return the best-ever
    /// discovery, which may differ from the final chain state.
    pub fn run(mut self, iterations: usize) -> Discovery<A> {
        for _ in 0..iterations {
            self.next();
        }
        self.best
    }
}

impl<'s, A: Alphabet, R: Rng> Iterator for GibbsSampler<'s, A, R> {
    type Item = GibbsIteration;

    fn next(&mut self) -> Option<Self::Item> {
        // pick the holdout and build a profile from everything else
        let z = self.rng.sample(self.holdout);
        let profile = self
            .motifs
            .counts_without(z)
            .to_freq(self.pseudocount);

        // resample the holdout's motif by weighted draw; a degenerate
        // all-zero weight vector keeps the current motif for this step
        let width = self.motifs.width();
        if let Ok(Some(start)) = scan::sample_position(&profile, &self.sequences[z], &mut self.rng)
        {
            self.motifs = self.motifs.replaced(z, self.sequences[z].kmer(start, width));
        }

        let score = self.motifs.score();
        if score < self.best.score() {
            self.best = Discovery {
                motifs: self.motifs.clone(),
                score,
            };
        }
        Some(GibbsIteration {
            holdout: z,
            score,
            best_score: self.best.score(),
        })
    }
}

/// The observable state of one Gibbs sampling step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GibbsIteration {
    /// The index of the held-out sequence.
    pub holdout: usize,
    /// The score of the motif set after this step.
    pub score: usize,
    /// The best score observed up to and including this step.
    pub best_score: usize,
}
