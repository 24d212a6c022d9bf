//! Ordered motif collections and their consensus score.

use std::ops::Index;

use super::abc::Alphabet;
use super::abc::Pseudocounts;
use super::abc::Symbol;
use super::dense::DenseMatrix;
use super::err::Error;
use super::err::Result;
use super::pwm::CountMatrix;
use super::pwm::FrequencyMatrix;
use super::seq::EncodedSequence;

/// An ordered collection of equal-length motifs, one per input sequence.
///
/// A `Motifs` value is an immutable snapshot: refinement steps produce a new
/// value rather than mutating in place, so keeping the best set seen so far
/// is a plain compare-and-keep.
#[derive(Clone, Debug, PartialEq)]
pub struct Motifs<A: Alphabet> {
    motifs: Vec<EncodedSequence<A>>,
    width: usize,
}

impl<A: Alphabet> Motifs<A> {
    /// Create a new motif set from the given motifs.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the collection is empty, if any motif is
    /// empty, or if the motifs do not all share the same length.
    pub fn new(motifs: Vec<EncodedSequence<A>>) -> Result<Self> {
        let width = match motifs.first() {
            Some(m) => m.len(),
            None => return Err(Error::InvalidInput("motif collection cannot be empty")),
        };
        if width == 0 {
            return Err(Error::InvalidInput("motifs cannot be empty"));
        }
        if motifs.iter().any(|m| m.len() != width) {
            return Err(Error::InvalidInput("motifs must all share one length"));
        }
        Ok(Self { motifs, width })
    }

    /// Create a motif set whose invariants are already known to hold.
    pub(crate) fn new_unchecked(motifs: Vec<EncodedSequence<A>>, width: usize) -> Self {
        debug_assert!(motifs.iter().all(|m| m.len() == width));
        Self { motifs, width }
    }

    /// The shared length of the motifs.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of motifs in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    /// Whether the set contains no motifs. Always `false` for a validated
    /// set; provided for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    /// Iterate over the motifs in sequence order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, EncodedSequence<A>> {
        self.motifs.iter()
    }

    /// View the motifs as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[EncodedSequence<A>] {
        &self.motifs
    }

    /// Count symbol occurrences at every position across the set.
    pub fn counts(&self) -> CountMatrix<A> {
        let mut data = DenseMatrix::new(self.width);
        for motif in &self.motifs {
            for (i, s) in motif.into_iter().enumerate() {
                data[i][s.as_index()] += 1;
            }
        }
        CountMatrix::new_unchecked(data, self.motifs.len() as u32)
    }

    /// Count symbol occurrences across the set, leaving out one motif.
    ///
    /// This is the profile base for a Gibbs resampling step, where the
    /// held-out sequence must not inform its own replacement.
    pub fn counts_without(&self, hold_out: usize) -> CountMatrix<A> {
        let mut data = DenseMatrix::new(self.width);
        for (z, motif) in self.motifs.iter().enumerate() {
            if z == hold_out {
                continue;
            }
            for (i, s) in motif.into_iter().enumerate() {
                data[i][s.as_index()] += 1;
            }
        }
        CountMatrix::new_unchecked(data, (self.motifs.len() - 1) as u32)
    }

    /// Build a profile matrix from the set using the given pseudocounts.
    pub fn profile<P>(&self, pseudo: P) -> FrequencyMatrix<A>
    where
        P: Into<Pseudocounts<A>>,
    {
        self.counts().to_freq(pseudo)
    }

    /// The consensus sequence of the set (ties resolve to the lowest symbol
    /// index).
    pub fn consensus(&self) -> EncodedSequence<A> {
        self.counts().consensus()
    }

    /// The total Hamming distance of every motif to the consensus. Lower is
    /// better; 0 means all motifs are identical.
    pub fn score(&self) -> usize {
        let consensus = self.consensus();
        self.motifs
            .iter()
            .map(|m| {
                m.symbols()
                    .iter()
                    .zip(consensus.symbols())
                    .filter(|(a, b)| a != b)
                    .count()
            })
            .sum()
    }

    /// Return a copy of the set with the motif at `index` replaced.
    pub(crate) fn replaced(&self, index: usize, motif: EncodedSequence<A>) -> Self {
        debug_assert_eq!(motif.len(), self.width);
        let mut motifs = self.motifs.clone();
        motifs[index] = motif;
        Self::new_unchecked(motifs, self.width)
    }
}

impl<A: Alphabet> AsRef<[EncodedSequence<A>]> for Motifs<A> {
    fn as_ref(&self) -> &[EncodedSequence<A>] {
        &self.motifs
    }
}

impl<A: Alphabet> Index<usize> for Motifs<A> {
    type Output = EncodedSequence<A>;
    fn index(&self, index: usize) -> &Self::Output {
        &self.motifs[index]
    }
}

impl<'a, A: Alphabet> IntoIterator for &'a Motifs<A> {
    type Item = &'a EncodedSequence<A>;
    type IntoIter = std::slice::Iter<'a, EncodedSequence<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::abc::Dna;

    fn motifs(strings: &[&str]) -> Motifs<Dna> {
        Motifs::new(
            strings
                .iter()
                .map(|s| EncodedSequence::encode(s).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn validation() {
        assert_eq!(
            Motifs::<Dna>::new(Vec::new()),
            Err(Error::InvalidInput("motif collection cannot be empty")),
        );
        let unequal = vec![
            EncodedSequence::<Dna>::encode("ACG").unwrap(),
            EncodedSequence::<Dna>::encode("AC").unwrap(),
        ];
        assert_eq!(
            Motifs::new(unequal),
            Err(Error::InvalidInput("motifs must all share one length")),
        );
    }

    #[test]
    fn consensus_tie_break() {
        // position 0 ties A/T and must resolve to A, position 1 ties C/G to C
        let m = motifs(&["AC", "AG", "TC", "TG"]);
        assert_eq!(m.consensus().to_string(), "AC");
    }

    #[test]
    fn score_zero_iff_identical() {
        assert_eq!(motifs(&["ACG", "ACG", "ACG"]).score(), 0);
        assert!(motifs(&["ACG", "ACG", "ACT"]).score() > 0);
    }

    #[test]
    fn score_matches_hamming_sum() {
        let m = motifs(&["ATGCA", "AAGCA", "ATGGA", "ATGCC"]);
        let consensus = m.consensus();
        assert_eq!(consensus.to_string(), "ATGCA");
        let total: usize = m
            .iter()
            .map(|motif| motif.hamming(&consensus).unwrap())
            .sum();
        assert_eq!(m.score(), total);
        assert_eq!(m.score(), 3);
    }
}
