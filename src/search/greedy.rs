//! Greedy profile-refinement search.

use super::DEFAULT_ITERATIONS;
use super::Discovery;
use super::check_initial;
use super::check_inputs;
use super::check_pseudocount;
use super::refine;
use crate::abc::Alphabet;
use crate::err::Result;
use crate::motifs::Motifs;
use crate::seq::EncodedSequence;

/// Greedy motif search by repeated profile refinement.
///
/// Starting from the first window of every sequence (or a caller-provided
/// motif set), each sweep builds a profile from the current motifs and
/// replaces every motif with its sequence's most probable window under that
/// profile. The sweep count is fixed; there is no convergence check, so the
/// result is whatever the last sweep produced. Callers wanting stability can
/// run one extra sweep over the result and compare for equality, since a
/// sweep count of zero returns the initial set unchanged.
#[derive(Debug, Clone)]
pub struct GreedySearch<'s, A: Alphabet> {
    sequences: &'s [EncodedSequence<A>],
    width: usize,
    pseudocount: f64,
    iterations: usize,
    initial: Option<Motifs<A>>,
}

impl<'s, A: Alphabet> GreedySearch<'s, A> {
    /// Create a new greedy search for motifs of the given width.
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

    /// Start from the given motif set instead of the first window of every
    /// sequence.
    pub fn initial(mut self, initial: Motifs<A>) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Run the search.
    pub fn run(&self) -> Result<Discovery<A>> {
        check_inputs(self.sequences, self.width)?;
        check_pseudocount(self.pseudocount)?;

        let mut motifs = match &self.initial {
            Some(initial) => {
                check_initial(initial, self.sequences, self.width)?;
                initial.clone()
            }
            None => Motifs::new_unchecked(
                self.sequences.iter().map(|s| s.kmer(0, self.width)).collect(),
                self.width,
            ),
        };
        for _ in 0..self.iterations {
            motifs = refine(self.sequences, &motifs, self.pseudocount)?;
        }
        Ok(Discovery::new(motifs))
    }
}
