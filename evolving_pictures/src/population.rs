use core::fmt;
use std::borrow::Borrow;

use rand::Rng;
use tracing::debug;

use crate::individual::Individual;
use crate::mutation_functions::crossover;
use crate::options::Options;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreedError {
    NoSurvivors,
    /// Every survivor seeds one offspring, so there must be at least as many offspring.
    TooManySurvivors { survivors: usize, target: usize },
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for BreedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreedError::NoSurvivors => f.write_str("cannot breed from an empty set of survivors"),
            BreedError::TooManySurvivors { survivors, target } => {
                write!(f, "{survivors} survivors do not fit in a generation of {target}")
            }
            BreedError::IndexOutOfRange { index, len } => {
                write!(f, "selected individual {index} is out of range for a population of {len}")
            }
        }
    }
}

impl std::error::Error for BreedError {}

/// Produce `n` offspring from `survivors`.
///
/// Offspring `i < survivors.len()` is `crossover(survivors[i], survivors[random])`; the rest
/// cross two random survivors. Survivors are only read.
pub fn breed<S, R>(survivors: &[S], n: usize, rng: &mut R) -> Result<Vec<Individual>, BreedError>
where
    S: Borrow<Individual>,
    R: Rng + ?Sized,
{
    let k = survivors.len();
    if k == 0 {
        return Err(BreedError::NoSurvivors);
    }
    if n < k {
        return Err(BreedError::TooManySurvivors { survivors: k, target: n });
    }

    let mut out = Vec::with_capacity(n);
    for first in survivors {
        let second = &survivors[rng.random_range(0..k)];
        out.push(crossover(first.borrow(), second.borrow(), rng));
    }
    while out.len() < n {
        let a = &survivors[rng.random_range(0..k)];
        let b = &survivors[rng.random_range(0..k)];
        out.push(crossover(a.borrow(), b.borrow(), rng));
    }
    debug!(survivors = k, offspring = n, "bred generation");
    Ok(out)
}

#[derive(Debug)]
pub struct Population {
    pub members: Vec<Individual>,
}

impl Population {
    pub fn new(members: Vec<Individual>) -> Self {
        Self { members }
    }

    /// `options.population_size` random individuals.
    pub fn new_random<R: Rng + ?Sized>(rng: &mut R, options: &Options) -> Self {
        let members: Vec<Individual> = (0..options.population_size)
            .map(|_| Individual::new_random(rng, options))
            .collect();
        debug!(size = members.len(), "random population");
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.members.iter()
    }

    /// Breed a new population of `options.population_size` from the members at `selected`.
    pub fn next_generation<R: Rng + ?Sized>(
        &self,
        selected: &[usize],
        rng: &mut R,
        options: &Options,
    ) -> Result<Population, BreedError> {
        let len = self.members.len();
        let survivors = selected
            .iter()
            .map(|&index| self.members.get(index).ok_or(BreedError::IndexOutOfRange { index, len }))
            .collect::<Result<Vec<&Individual>, _>>()?;
        let members = breed(&survivors, options.population_size, rng)?;
        Ok(Population { members })
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
