//! Count and profile matrices derived from motif collections.

use super::abc::Alphabet;
use super::abc::Pseudocounts;
use super::abc::Symbol;
use super::dense::DenseMatrix;
use super::err::Error;
use super::err::Result;
use super::seq::EncodedSequence;

// --- CountMatrix -------------------------------------------------------------

/// A matrix storing symbol occurrences at each motif position.
///
/// Rows index motif positions and columns index alphabet symbols.
#[derive(Clone, Debug, PartialEq)]
pub struct CountMatrix<A: Alphabet> {
    /// The alphabet of the count matrix.
    alphabet: std::marker::PhantomData<A>,
    /// The actual counts for each position of the motif.
    data: DenseMatrix<u32, A::K>,
    /// The number of motifs from which this count matrix was obtained.
    n: u32,
}

impl<A: Alphabet> CountMatrix<A> {
    /// Create a new count matrix without checking the contents.
    pub(crate) fn new_unchecked(data: DenseMatrix<u32, A::K>, n: u32) -> Self {
        Self {
            alphabet: std::marker::PhantomData,
            n,
            data,
        }
    }

    /// Create a new count matrix from the given data.
    ///
    /// The matrix must contain count data for motifs of the same length,
    /// i.e. every row must sum to the same nonzero value.
    pub fn new(data: DenseMatrix<u32, A::K>) -> Result<Self> {
        let mut rows = data.iter();
        let n: u32 = match rows.next() {
            Some(row) => row.iter().sum(),
            None => return Err(Error::InvalidInput("motif collection cannot be empty")),
        };
        if n == 0 {
            return Err(Error::InvalidInput("motif collection cannot be empty"));
        }
        if rows.any(|row| row.iter().sum::<u32>() != n) {
            return Err(Error::InvalidInput("motifs must all share one length"));
        }
        Ok(Self::new_unchecked(data, n))
    }

    /// Create a new count matrix from the given motifs.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the collection is empty, if any motif is
    /// empty, or if the motifs do not all share the same length.
    pub fn from_sequences<I>(sequences: I) -> Result<Self>
    where
        I: IntoIterator,
        <I as IntoIterator>::Item: AsRef<EncodedSequence<A>>,
    {
        let mut n = 0;
        let mut data: Option<DenseMatrix<u32, A::K>> = None;
        for seq in sequences {
            let seq = seq.as_ref();
            if seq.is_empty() {
                return Err(Error::InvalidInput("motifs cannot be empty"));
            }
            let d = match data.as_mut() {
                Some(d) => d,
                None => {
                    data = Some(DenseMatrix::new(seq.len()));
                    data.as_mut().unwrap()
                }
            };
            if seq.len() != d.rows() {
                return Err(Error::InvalidInput("motifs must all share one length"));
            }
            for (i, x) in seq.into_iter().enumerate() {
                d[i][x.as_index()] += 1;
            }
            n += 1;
        }
        match data {
            None => Err(Error::InvalidInput("motif collection cannot be empty")),
            Some(matrix) => Ok(Self::new_unchecked(matrix, n)),
        }
    }

    /// The length of the motif described by this count matrix.
    #[inline]
    pub fn width(&self) -> usize {
        self.data.rows()
    }

    /// The number of motifs the counts were collected from.
    #[inline]
    pub fn sequence_count(&self) -> u32 {
        self.n
    }

    /// The raw counts from the count matrix.
    #[inline]
    pub fn counts(&self) -> &DenseMatrix<u32, A::K> {
        &self.data
    }

    /// Extract the consensus sequence: at each position, the symbol with the
    /// highest count. Ties resolve to the symbol with the lowest index, so
    /// for DNA the priority is `A < C < G < T` on every run.
    pub fn consensus(&self) -> EncodedSequence<A> {
        let symbols = A::symbols();
        let mut consensus = Vec::with_capacity(self.width());
        for row in self.data.iter() {
            let mut best = 0;
            for (j, &count) in row.iter().enumerate() {
                if count > row[best] {
                    best = j;
                }
            }
            consensus.push(symbols[best]);
        }
        EncodedSequence::new(consensus)
    }

    /// Build a profile matrix from this count matrix using pseudocounts.
    ///
    /// Every cell receives its symbol's pseudocount before each position is
    /// normalized; with a uniform pseudocount `p` over `n` motifs this
    /// computes `(count + p) / (n + 4p)` for DNA.
    pub fn to_freq<P>(&self, pseudo: P) -> FrequencyMatrix<A>
    where
        P: Into<Pseudocounts<A>>,
    {
        let p = pseudo.into();
        let mut probas = DenseMatrix::new(self.data.rows());
        for (src, dst) in self.data.iter().zip(probas.iter_mut()) {
            for (j, &x) in src.iter().enumerate() {
                dst[j] = x as f64 + p.counts()[j];
            }
            let s: f64 = dst.iter().sum();
            if s > 0.0 {
                for x in dst.iter_mut() {
                    *x /= s;
                }
            }
        }
        FrequencyMatrix {
            alphabet: std::marker::PhantomData,
            data: probas,
        }
    }
}

impl<A: Alphabet> AsRef<DenseMatrix<u32, A::K>> for CountMatrix<A> {
    fn as_ref(&self) -> &DenseMatrix<u32, A::K> {
        &self.data
    }
}

impl<A: Alphabet> FromIterator<EncodedSequence<A>> for Result<CountMatrix<A>> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = EncodedSequence<A>>,
    {
        CountMatrix::from_sequences(iter)
    }
}

// --- FrequencyMatrix ---------------------------------------------------------

/// A profile matrix: a per-position probability distribution over symbols.
///
/// Invariant: the probabilities of every position sum to 1. Built with
/// nonzero pseudocounts, no cell is ever exactly 0.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyMatrix<A: Alphabet> {
    alphabet: std::marker::PhantomData<A>,
    data: DenseMatrix<f64, A::K>,
}

impl<A: Alphabet> FrequencyMatrix<A> {
    /// Build a profile from fractional symbol weights.
    ///
    /// Used by soft-assignment EM, where positions accumulate fractional
    /// responsibilities rather than integral counts. Pseudocounts are applied
    /// the same way as in [`CountMatrix::to_freq`].
    pub(crate) fn from_weights(
        mut weights: DenseMatrix<f64, A::K>,
        pseudo: &Pseudocounts<A>,
    ) -> Self {
        for row in weights.iter_mut() {
            for (j, x) in row.iter_mut().enumerate() {
                *x += pseudo.counts()[j];
            }
            let s: f64 = row.iter().sum();
            if s > 0.0 {
                for x in row.iter_mut() {
                    *x /= s;
                }
            }
        }
        Self {
            alphabet: std::marker::PhantomData,
            data: weights,
        }
    }

    /// The length of the motif described by this profile.
    #[inline]
    pub fn width(&self) -> usize {
        self.data.rows()
    }

    /// The probability of `kmer` under this profile: the product over
    /// positions of the profile cell for the symbol at that position.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the k-mer length differs from the profile
    /// width.
    pub fn probability<S>(&self, kmer: S) -> Result<f64>
    where
        S: AsRef<[A::Symbol]>,
    {
        let kmer = kmer.as_ref();
        if kmer.len() != self.width() {
            return Err(Error::InvalidInput(
                "k-mer length must match the profile width",
            ));
        }
        Ok(self.window_probability(kmer))
    }

    /// Probability of a window already known to span the profile width.
    #[inline]
    pub(crate) fn window_probability(&self, window: &[A::Symbol]) -> f64 {
        debug_assert_eq!(window.len(), self.width());
        self.data
            .iter()
            .zip(window)
            .map(|(row, s)| row[s.as_index()])
            .product()
    }
}

impl<A: Alphabet> AsRef<DenseMatrix<f64, A::K>> for FrequencyMatrix<A> {
    fn as_ref(&self) -> &DenseMatrix<f64, A::K> {
        &self.data
    }
}
