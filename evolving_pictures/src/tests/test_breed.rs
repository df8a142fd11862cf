use rstest::rstest;

use super::common::{assert_compact, assert_well_formed, rng, small_options};
use crate::{BreedError, Individual, Population, breed};

fn survivors(n: usize, seed: u64) -> Vec<Individual> {
    let mut rng = rng(seed);
    let opts = small_options();
    (0..n).map(|_| Individual::new_random(&mut rng, &opts)).collect()
}

fn shared_channels(a: &Individual, b: &Individual) -> usize {
    a.channels()
        .iter()
        .zip(b.channels())
        .filter(|(x, y)| x.to_string() == y.to_string())
        .count()
}

#[rstest]
#[case(1, 9)]
#[case(3, 9)]
#[case(9, 9)]
#[case(2, 5)]
fn offspring_count_and_first_parents(#[case] k: usize, #[case] n: usize) {
    let parents = survivors(k, 100 + k as u64);
    let texts: Vec<String> = parents.iter().map(|p| p.to_string()).collect();
    let mut rng = rng(7);
    let kids = breed(&parents, n, &mut rng).unwrap();
    assert_eq!(kids.len(), n);
    for (i, kid) in kids.iter().enumerate() {
        for ch in kid.channels() {
            assert_well_formed(ch);
            assert_compact(ch);
        }
        if i < k {
            // Crossover rewrites one channel of a copy of the first parent.
            assert!(shared_channels(kid, &parents[i]) >= 2, "offspring {i}");
        }
    }
    let after: Vec<String> = parents.iter().map(|p| p.to_string()).collect();
    assert_eq!(texts, after);
}

#[test]
fn empty_survivors() {
    let mut rng = rng(0);
    let none: Vec<Individual> = Vec::new();
    assert_eq!(breed(&none, 9, &mut rng).unwrap_err(), BreedError::NoSurvivors);
}

#[test]
fn more_survivors_than_slots() {
    let mut rng = rng(0);
    let parents = survivors(4, 1);
    assert_eq!(
        breed(&parents, 3, &mut rng).unwrap_err(),
        BreedError::TooManySurvivors { survivors: 4, target: 3 }
    );
}

#[test]
fn next_generation_resolves_indices() {
    let mut rng = rng(11);
    let opts = small_options();
    let pop = Population::new_random(&mut rng, &opts);
    let next = pop.next_generation(&[0, 4, 8], &mut rng, &opts).unwrap();
    assert_eq!(next.len(), opts.population_size);
    assert!(shared_channels(&next.members[1], &pop.members[4]) >= 2);

    let err = pop.next_generation(&[2, 9], &mut rng, &opts).unwrap_err();
    assert_eq!(err, BreedError::IndexOutOfRange { index: 9, len: 9 });
}
