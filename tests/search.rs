extern crate demotif;

use demotif::abc::Dna;
use demotif::err::Error;
use demotif::motifs::Motifs;
use demotif::search::BruteForce;
use demotif::search::GreedySearch;
use demotif::search::refine;
use demotif::seq::EncodedSequence;

fn encode(strings: &[&str]) -> Vec<EncodedSequence<Dna>> {
    strings
        .iter()
        .map(|s| EncodedSequence::encode(s).unwrap())
        .collect()
}

fn motifs(strings: &[&str]) -> Motifs<Dna> {
    Motifs::new(encode(strings)).unwrap()
}

const DNA: &[&str] = &["AGCTAGCAGT", "TGCATGCAGT", "AGCTTGCAGT", "TGCTAGCAGT"];

#[test]
fn refinement_sweep_concrete_case() {
    let sequences = encode(&["TGACGTTC", "TAAGAGTT", "GGACGAAA", "CTGTTCGC"]);
    let initial = motifs(&["TGA", "GTT", "GAA", "TGT"]);
    let refined = refine(&sequences, &initial, 1.0).unwrap();
    assert_eq!(refined, motifs(&["TGA", "TAA", "GGA", "TGT"]));
}

#[test]
fn brute_force_finds_the_optimum() {
    let sequences = encode(DNA);
    let best = BruteForce::new(&sequences, 3).run().unwrap();
    // GCA appears in every sequence; the all-GCA combination comes before
    // the all-CAG one in product order
    assert_eq!(best.score(), 0);
    for motif in best.motifs() {
        assert_eq!(motif.to_string(), "GCA");
    }
}

#[test]
fn brute_force_respects_its_ceiling() {
    let sequences = encode(DNA);
    // 8 windows per sequence: 8^4 = 4096 combinations
    let err = BruteForce::new(&sequences, 3).limit(100).run().unwrap_err();
    assert_eq!(
        err,
        Error::ExhaustedSearchSpace {
            combinations: 4096,
            limit: 100,
        },
    );
    assert!(BruteForce::new(&sequences, 3).limit(4096).run().is_ok());
}

#[test]
fn brute_force_bounds_greedy() {
    let sequences = encode(DNA);
    let brute = BruteForce::new(&sequences, 3).run().unwrap();
    let greedy = GreedySearch::new(&sequences, 3).iterations(5).run().unwrap();
    assert!(brute.score() <= greedy.score());
}

#[test]
fn greedy_is_idempotent_at_zero_iterations() {
    let sequences = encode(DNA);
    let found = GreedySearch::new(&sequences, 3).iterations(5).run().unwrap();
    let replay = GreedySearch::new(&sequences, 3)
        .initial(found.motifs().clone())
        .iterations(0)
        .run()
        .unwrap();
    assert_eq!(replay.motifs(), found.motifs());
}

#[test]
fn greedy_converges_on_a_planted_motif() {
    let sequences = encode(DNA);
    let found = GreedySearch::new(&sequences, 3).iterations(5).run().unwrap();
    // one more sweep must not change a converged motif set
    let again = GreedySearch::new(&sequences, 3)
        .initial(found.motifs().clone())
        .iterations(1)
        .run()
        .unwrap();
    assert_eq!(again.motifs(), found.motifs());
}

#[test]
fn input_validation() {
    let sequences = encode(DNA);
    let empty: Vec<EncodedSequence<Dna>> = Vec::new();

    assert_eq!(
        BruteForce::new(&empty, 3).run().unwrap_err(),
        Error::InvalidInput("sequence list cannot be empty"),
    );
    assert_eq!(
        GreedySearch::new(&sequences, 11).run().unwrap_err(),
        Error::InvalidInput("motif width exceeds the shortest sequence"),
    );
    assert_eq!(
        GreedySearch::new(&sequences, 0).run().unwrap_err(),
        Error::InvalidInput("motif width cannot be zero"),
    );
    assert_eq!(
        GreedySearch::new(&sequences, 3)
            .pseudocount(-1.0)
            .run()
            .unwrap_err(),
        Error::InvalidInput("pseudocount must be nonnegative"),
    );
    assert_eq!(
        GreedySearch::new(&sequences, 3)
            .initial(motifs(&["GCAT", "GCAT", "GCAT", "GCAT"]))
            .run()
            .unwrap_err(),
        Error::InvalidInput("initial motif width must match the search width"),
    );
    assert_eq!(
        GreedySearch::new(&sequences, 3)
            .initial(motifs(&["GCA", "GCA"]))
            .run()
            .unwrap_err(),
        Error::InvalidInput("initial motif set must hold one motif per sequence"),
    );
}

#[cfg(feature = "sampling")]
mod sampling {
    use demotif::search::CoordinateAscent;
    use demotif::search::ExpectationMaximization;
    use demotif::search::RandomizedSearch;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn randomized_search_is_reproducible_from_a_seed() {
        let sequences = encode(DNA);
        let search = RandomizedSearch::new(&sequences, 3);
        let a = search.run(&mut StdRng::seed_from_u64(42)).unwrap();
        let b = search.run(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.motifs().len(), 4);
        assert_eq!(a.motifs().width(), 3);
    }

    #[test]
    fn randomized_restarts_never_lose_the_best() {
        let sequences = encode(DNA);
        let search = RandomizedSearch::new(&sequences, 3);
        let mut rng = StdRng::seed_from_u64(7);
        let best = search.run_restarts(20, &mut rng).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let single = search.run(&mut rng).unwrap();
            assert!(best.score() <= single.score());
        }
    }

    #[test]
    fn brute_force_bounds_coordinate_ascent() {
        let sequences = encode(DNA);
        let brute = BruteForce::new(&sequences, 3).run().unwrap();
        let ascent = CoordinateAscent::new(&sequences, 3)
            .iterations(5)
            .run(&mut StdRng::seed_from_u64(42))
            .unwrap();
        assert!(brute.score() <= ascent.score());
    }

    #[test]
    fn coordinate_ascent_is_idempotent_at_zero_iterations() {
        let sequences = encode(DNA);
        let initial = motifs(&["AGC", "TGC", "AGC", "TGC"]);
        let replay = CoordinateAscent::new(&sequences, 3)
            .initial(initial.clone())
            .iterations(0)
            .run(&mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(replay.motifs(), &initial);
    }

    #[test]
    fn soft_em_is_reproducible_from_a_seed() {
        let sequences = encode(DNA);
        let em = ExpectationMaximization::new(&sequences, 3).iterations(10);
        let a = em.run(&mut StdRng::seed_from_u64(3)).unwrap();
        let b = em.run(&mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.motifs().len(), 4);
        assert_eq!(a.motifs().width(), 3);
    }

    #[test]
    fn soft_em_with_a_fixed_start_is_deterministic() {
        let sequences = encode(DNA);
        let initial = motifs(&["AGC", "TGC", "AGC", "TGC"]);
        let em = ExpectationMaximization::new(&sequences, 3)
            .initial(initial)
            .iterations(5);
        let a = em.run(&mut StdRng::seed_from_u64(1)).unwrap();
        let b = em.run(&mut StdRng::seed_from_u64(99)).unwrap();
        // the random source is never drawn once an initial set is supplied
        assert_eq!(a, b);
    }
}
