//! Dense row-major matrix storage with a type-level column count.

use std::fmt::Debug;
use std::fmt::Error as FmtError;
use std::fmt::Formatter;
use std::marker::PhantomData;
use std::ops::Index;
use std::ops::IndexMut;

use typenum::marker_traits::Unsigned;

/// A dense matrix with a constant number of columns.
///
/// Rows index motif positions and columns index alphabet symbols, so the
/// column count is fixed by the alphabet cardinality at the type level.
#[derive(Clone, PartialEq)]
pub struct DenseMatrix<T: Default + Copy, C: Unsigned> {
    data: Vec<T>,
    rows: usize,
    _columns: PhantomData<C>,
}

impl<T: Default + Copy, C: Unsigned> DenseMatrix<T, C> {
    /// Create a new zero-initialized matrix with the given number of rows.
    pub fn new(rows: usize) -> Self {
        Self {
            data: vec![T::default(); rows * C::USIZE],
            rows,
            _columns: PhantomData,
        }
    }

    /// Create a new dense matrix from an iterable of rows.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator,
        <I as IntoIterator>::Item: AsRef<[T]>,
    {
        let mut matrix = Self::new(0);
        for row in rows {
            matrix.data.extend_from_slice(row.as_ref());
            matrix.rows += 1;
        }
        matrix
    }

    /// The number of columns of the matrix.
    #[inline]
    pub const fn columns(&self) -> usize {
        C::USIZE
    }

    /// The number of rows of the matrix.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Change the number of rows of the matrix, zero-filling new rows.
    pub fn resize(&mut self, rows: usize) {
        self.data.resize(rows * C::USIZE, T::default());
        self.rows = rows;
    }

    /// Iterate over the rows of the matrix.
    #[inline]
    pub fn iter(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(C::USIZE)
    }

    /// Iterate mutably over the rows of the matrix.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::ChunksExactMut<'_, T> {
        self.data.chunks_exact_mut(C::USIZE)
    }
}

impl<T: Default + Copy, C: Unsigned> Index<usize> for DenseMatrix<T, C> {
    type Output = [T];
    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        let start = row * C::USIZE;
        &self.data[start..start + C::USIZE]
    }
}

impl<T: Default + Copy, C: Unsigned> IndexMut<usize> for DenseMatrix<T, C> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        let start = row * C::USIZE;
        &mut self.data[start..start + C::USIZE]
    }
}

impl<T: Default + Copy + Debug, C: Unsigned> Debug for DenseMatrix<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T: Default + Copy, C: Unsigned> IntoIterator for &'a DenseMatrix<T, C> {
    type Item = &'a [T];
    type IntoIter = std::slice::ChunksExact<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
