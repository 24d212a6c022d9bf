//! Expectation–Maximization style motif finders.
//!
//! Two distinctly-named variants live here. [`CoordinateAscent`] is the
//! hard-assignment scheme often presented as "EM" in teaching material:
//! random initialization followed by argmax refinement sweeps, structurally
//! identical to greedy refinement. [`ExpectationMaximization`] is the
//! textbook soft-assignment algorithm: every window of every sequence
//! contributes to the next profile in proportion to its normalized
//! responsibility, instead of a single winner taking all.

use rand::Rng;

use super::DEFAULT_ITERATIONS;
use super::Discovery;
use super::check_initial;
use super::check_inputs;
use super::check_pseudocount;
use super::random_motifs;
use super::refine;
use crate::abc::Alphabet;
use crate::abc::Pseudocounts;
use crate::abc::Symbol;
use crate::dense::DenseMatrix;
use crate::err::Result;
use crate::motifs::Motifs;
use crate::pwm::FrequencyMatrix;
use crate::scan;
use crate::seq::EncodedSequence;

/// Hard-assignment coordinate ascent over motif sets.
///
/// Initializes with one uniformly chosen window per sequence, then runs a
/// fixed number of simultaneous profile → most-probable-window sweeps. A
/// sweep count of zero returns the initial set unchanged.
#[derive(Debug, Clone)]
pub struct CoordinateAscent<'s, A: Alphabet> {
    sequences: &'s [EncodedSequence<A>],
    width: usize,
    pseudocount: f64,
    iterations: usize,
    initial: Option<Motifs<A>>,
}

impl<'s, A: Alphabet> CoordinateAscent<'s, A> {
    /// Create a new coordinate-ascent search for motifs of the given width.
    pub fn new(sequences: &'s [EncodedSequence<A>], width: usize) -> Self {
        Self {
            sequences,
            width,
            pseudocount: 1.0,
            iterations: DEFAULT_ITERATIONS,
            initial: None,
        }
    }

    /// Change the pseudocount used when building profiles.
    pub fn pseudocount(mut self, pseudocount: f64) -> Self {
        self.pseudocount = pseudocount;
        self
    }

    /// Change the number of refinement sweeps.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Start from the given motif set instead of a random one.
    pub fn initial(mut self, initial: Motifs<A>) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Run the search with the given random source.
    ///
    /// The source is only drawn from when no initial motif set was supplied.
    pub fn run<R: Rng>(&self, rng: &mut R) -> Result<Discovery<A>> {
        check_inputs(self.sequences, self.width)?;
        check_pseudocount(self.pseudocount)?;

        let mut motifs = match &self.initial {
            Some(initial) => {
                check_initial(initial, self.sequences, self.width)?;
                initial.clone()
            }
            None => random_motifs(self.sequences, self.width, rng),
        };
        for _ in 0..self.iterations {
            motifs = refine(self.sequences, &motifs, self.pseudocount)?;
        }
        Ok(Discovery::new(motifs))
    }
}

/// Soft-assignment Expectation–Maximization motif finder.
///
/// The E-step scores every window of every sequence under the current
/// profile and normalizes the scores per sequence into responsibilities.
/// The M-step rebuilds the profile from counts weighted by those
/// responsibilities, with pseudocounts applied as usual. After the final
/// iteration the motif read-out is the most probable window per sequence.
#[derive(Debug, Clone)]
pub struct ExpectationMaximization<'s, A: Alphabet> {
    sequences: &'s [EncodedSequence<A>],
    width: usize,
    pseudocount: f64,
    iterations: usize,
    initial: Option<Motifs<A>>,
}

impl<'s, A: Alphabet> ExpectationMaximization<'s, A> {
    /// Create a new EM search for motifs of the given width.
    pub fn new(sequences: &'s [EncodedSequence<A>], width: usize) -> Self {
        Self {
            sequences,
            width,
            pseudocount: 1.0,
            iterations: DEFAULT_ITERATIONS,
            initial: None,
        }
    }

    /// Change the pseudocount used when building profiles.
    pub fn pseudocount(mut self, pseudocount: f64) -> Self {
        self.pseudocount = pseudocount;
        self
    }

    /// Change the number of EM iterations.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Initialize the first profile from the given motif set instead of a
    /// random one.
    pub fn initial(mut self, initial: Motifs<A>) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Run the search with the given random source.
    ///
    /// The source is only drawn from when no initial motif set was supplied.
    pub fn run<R: Rng>(&self, rng: &mut R) -> Result<Discovery<A>> {
        check_inputs(self.sequences, self.width)?;
        check_pseudocount(self.pseudocount)?;

        let pseudo = Pseudocounts::<A>::from(self.pseudocount);
        let initial = match &self.initial {
            Some(initial) => {
                check_initial(initial, self.sequences, self.width)?;
                initial.clone()
            }
            None => random_motifs(self.sequences, self.width, rng),
        };
        let mut profile = initial.profile(self.pseudocount);

        for _ in 0..self.iterations {
            profile = self.update_profile(&profile, &pseudo)?;
        }

        // hard read-out of the final soft profile
        let motifs = self
            .sequences
            .iter()
            .map(|seq| scan::most_probable_kmer(&profile, seq))
            .collect::<Result<Vec<_>>>()?;
        Ok(Discovery::new(Motifs::new_unchecked(motifs, self.width)))
    }

    /// One E+M round: accumulate responsibility-weighted symbol counts over
    /// every window, then renormalize into the next profile.
    fn update_profile(
        &self,
        profile: &FrequencyMatrix<A>,
        pseudo: &Pseudocounts<A>,
    ) -> Result<FrequencyMatrix<A>> {
        let mut weights = DenseMatrix::<f64, A::K>::new(self.width);
        for seq in self.sequences {
            let scores = scan::score_windows(profile, seq)?;
            let total: f64 = scores.iter().sum();
            if total <= 0.0 {
                // no window has mass under the profile; the sequence
                // contributes nothing this round
                continue;
            }
            for (start, &p) in scores.iter().enumerate() {
                let responsibility = p / total;
                let window = &seq.symbols()[start..start + self.width];
                for (i, s) in window.iter().enumerate() {
                    weights[i][s.as_index()] += responsibility;
                }
            }
        }
        Ok(FrequencyMatrix::from_weights(weights, pseudo))
    }
}
