//! Storage for alphabet-encoded sequences.

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::ops::Index;
use std::str::FromStr;

use super::abc::Alphabet;
use super::abc::ComplementableSymbol;
use super::abc::Symbol;
use super::err::Error;
use super::err::Result;

/// A biological sequence encoded with an alphabet.
///
/// Sequences are immutable once encoded; every operation that would modify
/// one returns a fresh value instead.
#[derive(Clone, Debug)]
pub struct EncodedSequence<A: Alphabet> {
    alphabet: std::marker::PhantomData<A>,
    data: Vec<A::Symbol>,
}

impl<A: Alphabet> EncodedSequence<A> {
    /// Create a new encoded sequence.
    pub fn new(data: Vec<A::Symbol>) -> Self {
        Self {
            data,
            alphabet: std::marker::PhantomData,
        }
    }

    /// Create a new encoded sequence from a textual representation.
    pub fn encode(sequence: &str) -> Result<Self> {
        sequence
            .chars()
            .map(A::Symbol::from_char)
            .collect::<Result<_>>()
            .map(Self::new)
    }

    /// Return the number of symbols in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the sequence contains no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the symbols of the sequence as a slice.
    #[inline]
    pub fn symbols(&self) -> &[A::Symbol] {
        &self.data
    }

    /// Iterate over every window of `width` consecutive symbols.
    ///
    /// # Panics
    /// Panics if `width` is zero.
    #[inline]
    pub fn windows(&self, width: usize) -> std::slice::Windows<'_, A::Symbol> {
        self.data.windows(width)
    }

    /// Extract the window of `width` symbols starting at `start` as an
    /// owned sequence.
    ///
    /// # Panics
    /// Panics if the window extends past the end of the sequence.
    pub fn kmer(&self, start: usize, width: usize) -> Self {
        Self::new(self.data[start..start + width].to_vec())
    }

    /// Count the number of positions at which two sequences differ.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the sequences have different lengths.
    pub fn hamming(&self, other: &Self) -> Result<usize> {
        if self.len() != other.len() {
            return Err(Error::InvalidInput(
                "hamming distance requires sequences of equal length",
            ));
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .filter(|(a, b)| a != b)
            .count())
    }

    /// Return the start positions of every (possibly overlapping)
    /// occurrence of `pattern` in this sequence.
    pub fn positions(&self, pattern: &Self) -> Vec<usize> {
        if pattern.is_empty() || pattern.len() > self.len() {
            return Vec::new();
        }
        self.windows(pattern.len())
            .enumerate()
            .filter(|(_, w)| *w == pattern.symbols())
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the (possibly overlapping) occurrences of `pattern`.
    pub fn count(&self, pattern: &Self) -> usize {
        self.positions(pattern).len()
    }

    /// Return the reverse complement of the sequence.
    pub fn reverse_complement(&self) -> Self
    where
        A::Symbol: ComplementableSymbol,
    {
        Self::new(self.data.iter().rev().map(|s| s.complement()).collect())
    }
}

impl<A: Alphabet> AsRef<EncodedSequence<A>> for EncodedSequence<A> {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl<A: Alphabet> AsRef<[<A as Alphabet>::Symbol]> for EncodedSequence<A> {
    fn as_ref(&self) -> &[<A as Alphabet>::Symbol] {
        self.data.as_slice()
    }
}

impl<A: Alphabet> Default for EncodedSequence<A> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<A: Alphabet> Display for EncodedSequence<A> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        for c in self.data.iter() {
            write!(f, "{}", c.as_char())?;
        }
        Ok(())
    }
}

impl<A: Alphabet> FromStr for EncodedSequence<A> {
    type Err = Error;
    fn from_str(seq: &str) -> Result<Self> {
        Self::encode(seq)
    }
}

impl<A: Alphabet> From<Vec<A::Symbol>> for EncodedSequence<A> {
    fn from(data: Vec<A::Symbol>) -> Self {
        Self::new(data)
    }
}

impl<A: Alphabet> Index<usize> for EncodedSequence<A> {
    type Output = A::Symbol;
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<'a, A: Alphabet> IntoIterator for &'a EncodedSequence<A> {
    type Item = &'a A::Symbol;
    type IntoIter = std::slice::Iter<'a, A::Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<A, S> PartialEq<S> for EncodedSequence<A>
where
    A: Alphabet,
    S: AsRef<[<A as Alphabet>::Symbol]>,
{
    fn eq(&self, other: &S) -> bool {
        self.data.as_slice() == other.as_ref()
    }
}
