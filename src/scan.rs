//! Window scoring of sequences against a profile matrix.

#[cfg(feature = "sampling")]
use rand::Rng;
#[cfg(feature = "sampling")]
use rand::distributions::Distribution;
#[cfg(feature = "sampling")]
use rand_distr::WeightedIndex;

use super::abc::Alphabet;
use super::err::Error;
use super::err::Result;
use super::pwm::FrequencyMatrix;
use super::scores::Scores;
use super::seq::EncodedSequence;

/// Compute the probability of every window of `seq` under `profile`.
///
/// # Errors
/// Returns `InvalidInput` if the sequence is shorter than the profile width
/// or if the profile width is zero.
pub fn score_windows<A: Alphabet>(
    profile: &FrequencyMatrix<A>,
    seq: &EncodedSequence<A>,
) -> Result<Scores> {
    let width = profile.width();
    if width == 0 {
        return Err(Error::InvalidInput("profile width cannot be zero"));
    }
    if seq.len() < width {
        return Err(Error::InvalidInput(
            "sequence is shorter than the profile width",
        ));
    }
    Ok(Scores::new(
        seq.windows(width)
            .map(|w| profile.window_probability(w))
            .collect(),
    ))
}

/// Find the start position of the most probable window of `seq` under
/// `profile`.
///
/// The selection is deterministic: an exact probability tie resolves to the
/// leftmost window.
pub fn most_probable<A: Alphabet>(
    profile: &FrequencyMatrix<A>,
    seq: &EncodedSequence<A>,
) -> Result<usize> {
    let scores = score_windows(profile, seq)?;
    // scores is nonempty once score_windows validated the lengths
    Ok(scores.argmax().unwrap_or(0))
}

/// Extract the most probable window of `seq` under `profile` as an owned
/// k-mer.
pub fn most_probable_kmer<A: Alphabet>(
    profile: &FrequencyMatrix<A>,
    seq: &EncodedSequence<A>,
) -> Result<EncodedSequence<A>> {
    let start = most_probable(profile, seq)?;
    Ok(seq.kmer(start, profile.width()))
}

/// Draw a window start position at random, weighting every window by its
/// probability under `profile`.
///
/// This drives the Gibbs resampling update: the window probabilities act as
/// unnormalized weights for a categorical draw from the injected random
/// source. Returns `None` when every window has zero probability, which can
/// only happen with a zero pseudocount.
#[cfg(feature = "sampling")]
pub fn sample_position<A: Alphabet, R: Rng>(
    profile: &FrequencyMatrix<A>,
    seq: &EncodedSequence<A>,
    rng: &mut R,
) -> Result<Option<usize>> {
    let scores = score_windows(profile, seq)?;
    match WeightedIndex::new(scores.iter().copied()) {
        Ok(dist) => Ok(Some(dist.sample(rng))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::abc::Dna;
    use crate::motifs::Motifs;

    fn profile(strings: &[&str]) -> FrequencyMatrix<Dna> {
        Motifs::new(
            strings
                .iter()
                .map(|s| EncodedSequence::encode(s).unwrap())
                .collect(),
        )
        .unwrap()
        .profile(1.0)
    }

    #[test]
    fn most_probable_is_deterministic() {
        let profile = profile(&["TGA", "GTT", "GAA", "TGT"]);
        let seq = EncodedSequence::<Dna>::encode("TGACGTTC").unwrap();
        let first = most_probable(&profile, &seq).unwrap();
        for _ in 0..10 {
            assert_eq!(most_probable(&profile, &seq).unwrap(), first);
        }
        assert_eq!(first, 0);
    }

    #[test]
    fn ties_resolve_leftmost() {
        // under this profile both TAA (pos 0) and GTT (pos 5) score 18/512
        let profile = profile(&["TGA", "GTT", "GAA", "TGT"]);
        let seq = EncodedSequence::<Dna>::encode("TAAGAGTT").unwrap();
        assert_eq!(most_probable(&profile, &seq).unwrap(), 0);
    }

    #[test]
    fn short_sequence_is_rejected() {
        let profile = profile(&["TGA", "GTT"]);
        let seq = EncodedSequence::<Dna>::encode("TG").unwrap();
        assert!(score_windows(&profile, &seq).is_err());
    }

    #[cfg(feature = "sampling")]
    #[test]
    fn sample_position_stays_in_range() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let profile = profile(&["TGA", "GTT", "GAA", "TGT"]);
        let seq = EncodedSequence::<Dna>::encode("TGACGTTC").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let pos = sample_position(&profile, &seq, &mut rng).unwrap().unwrap();
            assert!(pos <= seq.len() - profile.width());
        }
    }
}
