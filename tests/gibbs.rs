#![cfg(feature = "sampling")]

extern crate demotif;

use demotif::abc::Dna;
use demotif::err::Error;
use demotif::search::GibbsSampler;
use demotif::seq::EncodedSequence;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn encode(strings: &[&str]) -> Vec<EncodedSequence<Dna>> {
    strings
        .iter()
        .map(|s| EncodedSequence::encode(s).unwrap())
        .collect()
}

const DNA: &[&str] = &[
    "CGCCCCTCTCGGGGGTGTTCAGTAAACGGCCA",
    "GGGCGAGGTATGTGTAAGTGCCAAGGTGCCAG",
    "TAGTACCGAGACCGAAAGAAGTATACAGGCGT",
    "TAGATCAAGTTTCAGGTGCACGTCGGTGAACC",
    "AATCCACCAGCTCCACGTGCAATGTTGGCCTA",
];

#[test]
fn best_score_trace_never_worsens() {
    let sequences = encode(DNA);
    let sampler = GibbsSampler::new(&sequences, 8, 1.0, StdRng::seed_from_u64(42)).unwrap();
    let mut previous = usize::MAX;
    for step in sampler.take(200) {
        assert!(step.best_score <= previous);
        assert!(step.best_score <= step.score);
        assert!(step.holdout < DNA.len());
        previous = step.best_score;
    }
}

#[test]
fn run_returns_the_best_ever_seen() {
    let sequences = encode(DNA);
    let sampler = GibbsSampler::new(&sequences, 8, 1.0, StdRng::seed_from_u64(42)).unwrap();
    let initial_best = sampler.best().clone();
    let best = sampler.run(100);
    assert!(best.score() <= initial_best.score());
    assert_eq!(best.motifs().len(), 5);
    assert_eq!(best.motifs().width(), 8);
}

#[test]
fn runs_are_reproducible_from_a_seed() {
    let sequences = encode(DNA);
    let a = GibbsSampler::new(&sequences, 8, 1.0, StdRng::seed_from_u64(7))
        .unwrap()
        .run(100);
    let b = GibbsSampler::new(&sequences, 8, 1.0, StdRng::seed_from_u64(7))
        .unwrap()
        .run(100);
    assert_eq!(a, b);
}

#[test]
fn sampler_validates_eagerly() {
    let sequences = encode(DNA);
    let single = encode(&DNA[..1]);
    assert_eq!(
        GibbsSampler::new(&single, 8, 1.0, StdRng::seed_from_u64(0)).err(),
        Some(Error::InvalidInput(
            "gibbs sampling requires at least two sequences",
        )),
    );
    assert_eq!(
        GibbsSampler::new(&sequences, 33, 1.0, StdRng::seed_from_u64(0)).err(),
        Some(Error::InvalidInput("motif width exceeds the shortest sequence")),
    );
    assert_eq!(
        GibbsSampler::new(&sequences, 8, f64::NAN, StdRng::seed_from_u64(0)).err(),
        Some(Error::InvalidInput("pseudocount must be nonnegative")),
    );
}
