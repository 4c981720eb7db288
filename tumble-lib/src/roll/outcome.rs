use crate::dice;
use crate::error;
use crate::error::Error;
use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;

/// Dices thrown for one group, in the order they were thrown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OutcomeRecord")]
pub struct Outcome {
    sides: u64,
    count: u64,
    results: Vec<u64>,
    subtotal: i64,
}

impl Outcome {
    pub(crate) fn new(group: dice::Group, results: Vec<u64>) -> error::Result<Self> {
        let subtotal = results
            .iter()
            .try_fold(0i128, |acc, &value| acc.checked_add(i128::from(value)))
            .and_then(|sum| i64::try_from(sum).ok())
            .ok_or(Error::Overflow)?;
        Ok(Outcome {
            sides: group.sides,
            count: group.count,
            results,
            subtotal,
        })
    }

    pub fn sides(&self) -> u64 {
        self.sides
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn group(&self) -> dice::Group {
        dice::Group::new(self.sides, self.count)
    }

    pub fn results(&self) -> &[u64] {
        &self.results
    }

    pub fn subtotal(&self) -> i64 {
        self.subtotal
    }

    /// Each dice value with its critic marker
    pub fn marked(&self) -> impl Iterator<Item = (u64, dice::Critic)> + '_ {
        self.results
            .iter()
            .map(|&value| (value, dice::Critic::of(value, self.sides)))
    }

    /// Critics rolled in this group, `Critic::Not` excluded
    pub fn critics(&self) -> HashSet<dice::Critic> {
        self.marked()
            .map(|(_, critic)| critic)
            .filter(|critic| *critic != dice::Critic::Not)
            .collect()
    }
}

/// Wire form of an `Outcome`, checked before it becomes one
#[derive(Deserialize)]
struct OutcomeRecord {
    sides: u64,
    count: u64,
    results: Vec<u64>,
    subtotal: i64,
}

impl TryFrom<OutcomeRecord> for Outcome {
    type Error = Error;

    fn try_from(record: OutcomeRecord) -> error::Result<Self> {
        if record.sides == 0 {
            return Err(Error::InvalidSides(record.sides));
        }
        if record.results.len() as u64 != record.count {
            return Err(Error::Inconsistent("dice count does not match results"));
        }
        if !record
            .results
            .iter()
            .all(|value| (1..=record.sides).contains(value))
        {
            return Err(Error::Inconsistent("dice value out of range"));
        }
        let outcome = Outcome::new(dice::Group::new(record.sides, record.count), record.results)?;
        if outcome.subtotal != record.subtotal {
            return Err(Error::Inconsistent("subtotal does not match results"));
        }
        Ok(outcome)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.results.iter().format(", "))
    }
}
