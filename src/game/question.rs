//! file: question.rs
//! author: Jacob Xie
//! date: 2025/12/20 11:02:16 Saturday
//! brief: one round's target plus its shuffled answer options

use rand::{Rng, seq::SliceRandom};

use super::ServiceEntry;
use crate::error::{GameError, Result};

pub const MAX_DISTRACTORS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    target: ServiceEntry,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    /// Picks a target uniformly and mixes its description with up to
    /// [`MAX_DISTRACTORS`] other descriptions, then shuffles.
    pub fn generate<R: Rng + ?Sized>(catalog: &[ServiceEntry], rng: &mut R) -> Result<Self> {
        if catalog.len() < 2 {
            return Err(GameError::InsufficientCatalog { len: catalog.len() });
        }
        let target = catalog
            .choose(rng)
            .cloned()
            .ok_or(GameError::InsufficientCatalog { len: 0 })?;

        let pool: Vec<&str> = catalog
            .iter()
            .map(|entry| entry.description.as_str())
            .filter(|description| *description != target.description)
            .collect();

        let mut options = Vec::with_capacity(MAX_DISTRACTORS + 1);
        options.push(target.description.clone());
        options.extend(
            pool.choose_multiple(rng, MAX_DISTRACTORS.min(pool.len()))
                .map(|description| (*description).to_owned()),
        );
        options.shuffle(rng);

        let correct_index = options
            .iter()
            .position(|option| *option == target.description)
            .ok_or(GameError::InsufficientCatalog { len: catalog.len() })?;

        Ok(Self {
            target,
            options,
            correct_index,
        })
    }

    pub fn target(&self) -> &ServiceEntry {
        &self.target
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::game::{Rgb, default_entries};

    fn numbered_catalog(size: usize) -> Vec<ServiceEntry> {
        (0..size)
            .map(|i| {
                ServiceEntry::new(
                    &format!("svc-{i}"),
                    &format!("does thing {i}"),
                    Rgb::new(0, 0, 0),
                )
            })
            .collect()
    }

    #[test]
    fn default_catalog_yields_four_options() {
        let mut rng = StdRng::seed_from_u64(7);
        let question = Question::generate(&default_entries(), &mut rng).unwrap();

        assert_eq!(question.options().len(), 4);
        assert_eq!(
            question.options()[question.correct_index()],
            question.target().description
        );
        let unique: HashSet<&String> = question.options().iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn small_catalog_uses_every_other_description() {
        let mut rng = StdRng::seed_from_u64(1);
        let question = Question::generate(&numbered_catalog(2), &mut rng).unwrap();
        assert_eq!(question.options().len(), 2);
        assert!(question.is_correct(question.correct_index()));

        let question = Question::generate(&numbered_catalog(3), &mut rng).unwrap();
        assert_eq!(question.options().len(), 3);
    }

    #[test]
    fn too_small_catalog_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            Question::generate(&numbered_catalog(1), &mut rng),
            Err(GameError::InsufficientCatalog { len: 1 })
        ));
        assert!(matches!(
            Question::generate(&[], &mut rng),
            Err(GameError::InsufficientCatalog { len: 0 })
        ));
    }

    #[test]
    fn targets_are_roughly_uniform() {
        let catalog = default_entries();
        let mut rng = StdRng::seed_from_u64(2025);
        let trials = 6_000;
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..trials {
            let question = Question::generate(&catalog, &mut rng).unwrap();
            *counts.entry(question.target().name.clone()).or_default() += 1;
        }

        assert_eq!(counts.len(), catalog.len());
        let expected = trials / catalog.len();
        for (name, count) in counts {
            assert!(
                count.abs_diff(expected) < expected / 5,
                "{name} picked {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn correct_answer_lands_in_every_slot() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut slots = HashSet::new();
        for _ in 0..200 {
            let question = Question::generate(&default_entries(), &mut rng).unwrap();
            slots.insert(question.correct_index());
        }
        assert_eq!(slots, HashSet::from([0, 1, 2, 3]));
    }

    proptest! {
        #[test]
        fn exactly_one_option_matches_target(size in 4usize..24, seed in any::<u64>()) {
            let catalog = numbered_catalog(size);
            let mut rng = StdRng::seed_from_u64(seed);
            let question = Question::generate(&catalog, &mut rng).unwrap();

            prop_assert_eq!(question.options().len(), 4);
            let matches = question
                .options()
                .iter()
                .filter(|option| **option == question.target().description)
                .count();
            prop_assert_eq!(matches, 1);
            prop_assert_eq!(
                &question.options()[question.correct_index()],
                &question.target().description
            );
        }
    }
}
