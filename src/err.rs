//! Error types for sequence encoding and motif search.

use thiserror::Error;

/// A `Result` alias using the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// An error produced while encoding sequences or searching for motifs.
///
/// All conditions are detected eagerly when an operation is entered; no
/// operation retries internally or returns a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The given character is not a valid symbol of the alphabet.
    #[error("invalid symbol {0:?}")]
    InvalidSymbol(char),
    /// The input collection or parameters are malformed.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// A brute-force search was requested over more combinations than the
    /// configured safety ceiling allows.
    #[error("search space of {combinations} combinations exceeds the limit of {limit}")]
    ExhaustedSearchSpace { combinations: u128, limit: u128 },
}
