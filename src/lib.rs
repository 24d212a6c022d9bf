#![doc = include_str!("../README.md")]

extern crate generic_array;
extern crate typenum;

pub mod abc;
pub mod dense;
pub mod err;
pub mod motifs;
pub mod pwm;
pub mod scan;
pub mod scores;
pub mod search;
pub mod seq;

pub use abc::Alphabet;
pub use abc::ComplementableAlphabet;
pub use abc::ComplementableSymbol;
pub use abc::Dna;
pub use abc::Nucleotide;
pub use abc::Pseudocounts;
pub use abc::Symbol;
pub use dense::DenseMatrix;
pub use err::Error;
pub use motifs::Motifs;
pub use pwm::CountMatrix;
pub use pwm::FrequencyMatrix;
pub use scores::Scores;
pub use search::Discovery;
pub use seq::EncodedSequence;
