//! Exhaustive motif search over the Cartesian product of windows.

use super::Discovery;
use super::check_inputs;
use crate::abc::Alphabet;
use crate::err::Error;
use crate::err::Result;
use crate::motifs::Motifs;
use crate::seq::EncodedSequence;

/// The default ceiling on the number of window combinations a brute-force
/// search will accept.
pub const DEFAULT_COMBINATION_LIMIT: u128 = 100_000;

/// Exhaustive search over every combination of one window per sequence.
///
/// The returned motif set is globally optimal by total Hamming distance to
/// the consensus. The cost is exponential in the number of sequences, so the
/// search refuses to run when the combination count exceeds its ceiling;
/// this strategy is meant for small inputs only.
///
/// # Example
/// ```
/// # use demotif::abc::Dna;
/// # use demotif::seq::EncodedSequence;
/// # use demotif::search::BruteForce;
/// let dna = ["ATGATG", "CATGCA", "TTGATG"]
///     .iter()
///     .map(|s| EncodedSequence::<Dna>::encode(s).unwrap())
///     .collect::<Vec<_>>();
/// let best = BruteForce::new(&dna, 3).run().unwrap();
/// assert_eq!(best.score(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct BruteForce<'s, A: Alphabet> {
    sequences: &'s [EncodedSequence<A>],
    width: usize,
    limit: u128,
}

impl<'s, A: Alphabet> BruteForce<'s, A> {
    /// Create a new brute-force search for motifs of the given width.
    pub fn new(sequences: &'s [EncodedSequence<A>], width: usize) -> Self {
        Self {
            sequences,
            width,
            limit: DEFAULT_COMBINATION_LIMIT,
        }
    }

    /// Change the ceiling on the number of combinations to evaluate.
    pub fn limit(mut self, limit: u128) -> Self {
        self.limit = limit;
        self
    }

    /// Run the search and return the optimal motif set.
    ///
    /// Combinations are enumerated in product order with the last sequence
    /// varying fastest; among equally-scored optima the first one found in
    /// that order is returned.
    ///
    /// # Errors
    /// Returns `InvalidInput` on malformed inputs, or `ExhaustedSearchSpace`
    /// when the combination count exceeds the configured ceiling.
    pub fn run(&self) -> Result<Discovery<A>> {
        check_inputs(self.sequences, self.width)?;

        let window_counts: Vec<usize> = self
            .sequences
            .iter()
            .map(|s| s.len() - self.width + 1)
            .collect();
        let combinations = window_counts
            .iter()
            .fold(1u128, |acc, &c| acc.saturating_mul(c as u128));
        if combinations > self.limit {
            return Err(Error::ExhaustedSearchSpace {
                combinations,
                limit: self.limit,
            });
        }

        let t = self.sequences.len();
        let mut starts = vec![0usize; t];
        let mut best: Option<Discovery<A>> = None;
        'product: loop {
            let candidate = Motifs::new_unchecked(
                self.sequences
                    .iter()
                    .zip(&starts)
                    .map(|(seq, &start)| seq.kmer(start, self.width))
                    .collect(),
                self.width,
            );
            let score = candidate.score();
            // strict comparison keeps the first optimum in product order
            if best.as_ref().map_or(true, |b| score < b.score()) {
                best = Some(Discovery {
                    motifs: candidate,
                    score,
                });
            }

            // advance the odometer, last sequence fastest
            let mut pos = t - 1;
            loop {
                starts[pos] += 1;
                if starts[pos] < window_counts[pos] {
                    break;
                }
                starts[pos] = 0;
                if pos == 0 {
                    break 'product;
                }
                pos -= 1;
            }
        }

        // best is always set: the product is never empty after validation
        best.ok_or(Error::InvalidInput("sequence list cannot be empty"))
    }
}
