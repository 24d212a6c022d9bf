//! Motif search strategies sharing the profile-matrix data model.
//!
//! Every strategy consumes a list of encoded sequences and a motif width,
//! validates its inputs eagerly, and returns a [`Discovery`]: a motif set
//! (one k-mer per sequence) together with its consensus score. Strategies
//! that draw random numbers take an injected [`rand::Rng`], so runs are
//! reproducible from a seed and independent searches can proceed on
//! separate threads without shared state.

mod brute;
#[cfg(feature = "sampling")]
mod em;
mod greedy;
#[cfg(feature = "sampling")]
mod gibbs;
#[cfg(feature = "sampling")]
mod randomized;

pub use brute::BruteForce;
pub use brute::DEFAULT_COMBINATION_LIMIT;
#[cfg(feature = "sampling")]
pub use em::CoordinateAscent;
#[cfg(feature = "sampling")]
pub use em::ExpectationMaximization;
#[cfg(feature = "sampling")]
pub use gibbs::GibbsIteration;
#[cfg(feature = "sampling")]
pub use gibbs::GibbsSampler;
pub use greedy::GreedySearch;
#[cfg(feature = "sampling")]
pub use randomized::RandomizedSearch;

#[cfg(feature = "sampling")]
use rand::Rng;
#[cfg(feature = "sampling")]
use rand::distributions::Uniform;

use super::abc::Alphabet;
use super::err::Error;
use super::err::Result;
use super::motifs::Motifs;
use super::scan;
use super::seq::EncodedSequence;

/// The number of refinement sweeps strategies run by default.
pub const DEFAULT_ITERATIONS: usize = 10;

/// The outcome of a motif search: a motif set and its consensus score.
#[derive(Clone, Debug, PartialEq)]
pub struct Discovery<A: Alphabet> {
    motifs: Motifs<A>,
    score: usize,
}

impl<A: Alphabet> Discovery<A> {
    /// Record a motif set together with its score.
    pub fn new(motifs: Motifs<A>) -> Self {
        let score = motifs.score();
        Self { motifs, score }
    }

    /// The discovered motif set.
    #[inline]
    pub fn motifs(&self) -> &Motifs<A> {
        &self.motifs
    }

    /// The total Hamming distance of the motifs to their consensus.
    #[inline]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Extract the motif set.
    pub fn into_motifs(self) -> Motifs<A> {
        self.motifs
    }
}

/// Check the common strategy inputs: a non-empty sequence list and a motif
/// width no larger than the shortest sequence.
pub(crate) fn check_inputs<A: Alphabet>(
    sequences: &[EncodedSequence<A>],
    width: usize,
) -> Result<()> {
    if sequences.is_empty() {
        return Err(Error::InvalidInput("sequence list cannot be empty"));
    }
    if width == 0 {
        return Err(Error::InvalidInput("motif width cannot be zero"));
    }
    if sequences.iter().any(|s| s.len() < width) {
        return Err(Error::InvalidInput(
            "motif width exceeds the shortest sequence",
        ));
    }
    Ok(())
}

/// Check a pseudocount parameter: it must be finite and nonnegative.
pub(crate) fn check_pseudocount(pseudocount: f64) -> Result<()> {
    if pseudocount.is_finite() && pseudocount >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidInput("pseudocount must be nonnegative"))
    }
}

/// Check a caller-provided initial motif set against the search inputs.
pub(crate) fn check_initial<A: Alphabet>(
    initial: &Motifs<A>,
    sequences: &[EncodedSequence<A>],
    width: usize,
) -> Result<()> {
    if initial.len() != sequences.len() {
        return Err(Error::InvalidInput(
            "initial motif set must hold one motif per sequence",
        ));
    }
    if initial.width() != width {
        return Err(Error::InvalidInput(
            "initial motif width must match the search width",
        ));
    }
    Ok(())
}

/// One refinement sweep: build a profile from the current motif set, then
/// select the most probable window of every sequence under that profile.
///
/// All motifs are replaced simultaneously; selections within one sweep never
/// see each other. Window ties resolve to the leftmost position.
pub fn refine<A: Alphabet>(
    sequences: &[EncodedSequence<A>],
    motifs: &Motifs<A>,
    pseudocount: f64,
) -> Result<Motifs<A>> {
    let profile = motifs.profile(pseudocount);
    let refined = sequences
        .iter()
        .map(|seq| scan::most_probable_kmer(&profile, seq))
        .collect::<Result<Vec<_>>>()?;
    Ok(Motifs::new_unchecked(refined, motifs.width()))
}

/// Pick one window uniformly at random from every sequence.
#[cfg(feature = "sampling")]
pub(crate) fn random_motifs<A: Alphabet, R: Rng>(
    sequences: &[EncodedSequence<A>],
    width: usize,
    rng: &mut R,
) -> Motifs<A> {
    let motifs = sequences
        .iter()
        .map(|seq| {
            let start = rng.sample(Uniform::new(0, seq.len() - width + 1));
            seq.kmer(start, width)
        })
        .collect();
    Motifs::new_unchecked(motifs, width)
}
