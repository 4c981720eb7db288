pub mod outcome;
pub use outcome::Outcome;

use crate::dice;
use crate::error;
use crate::error::Error;
use crate::evaluator::limits;
use crate::solver::RandomSource;
use chrono::DateTime;
use chrono::Utc;
use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;

/// Keep a roll expression result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ResultRecord")]
pub struct Result {
    notation: String,
    rolls: Vec<Outcome>,
    modifier: i64,
    subtotal: i64,
    total: i64,
    timestamp: DateTime<Utc>,
}

impl Result {
    pub(crate) fn new(
        notation: String,
        rolls: Vec<Outcome>,
        modifier: i64,
        timestamp: DateTime<Utc>,
    ) -> error::Result<Self> {
        let subtotal = rolls
            .iter()
            .try_fold(0i128, |acc, outcome| {
                acc.checked_add(i128::from(outcome.subtotal()))
            })
            .and_then(|sum| i64::try_from(sum).ok())
            .ok_or(Error::Overflow)?;
        let total = subtotal.checked_add(modifier).ok_or(Error::Overflow)?;
        Ok(Result {
            notation,
            rolls,
            modifier,
            subtotal,
            total,
            timestamp,
        })
    }

    /// The query as it was typed
    pub fn notation(&self) -> &str {
        &self.notation
    }

    pub fn rolls(&self) -> &[Outcome] {
        &self.rolls
    }

    pub fn modifier(&self) -> i64 {
        self.modifier
    }

    /// Sum of every group before the modifier
    pub fn subtotal(&self) -> i64 {
        self.subtotal
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn critics(&self) -> HashSet<dice::Critic> {
        self.rolls.iter().flat_map(Outcome::critics).collect()
    }
}

/// Wire form of a `Result`, totals are checked against the rolls
#[derive(Deserialize)]
struct ResultRecord {
    notation: String,
    rolls: Vec<Outcome>,
    modifier: i64,
    subtotal: i64,
    total: i64,
    timestamp: DateTime<Utc>,
}

impl TryFrom<ResultRecord> for Result {
    type Error = Error;

    fn try_from(record: ResultRecord) -> error::Result<Self> {
        let result = Result::new(
            record.notation,
            record.rolls,
            record.modifier,
            record.timestamp,
        )?;
        if result.subtotal != record.subtotal || result.total != record.total {
            return Err(Error::Inconsistent("totals do not match rolls"));
        }
        Ok(result)
    }
}

impl std::fmt::Display for Result {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let notation = self.notation.trim();
        if !notation.is_empty() {
            write!(f, "`{}` ", notation)?;
        }
        if self.rolls.is_empty() {
            return write!(f, "= **{}**", self.total);
        }
        write!(f, "`{}", self.rolls.iter().format(" + "))?;
        match self.modifier {
            0 => (),
            m if m > 0 => write!(f, " + {m}")?,
            m => write!(f, " - {}", m.unsigned_abs())?,
        }
        write!(f, "` = **{}**", self.total)
    }
}

/// Interface for rolling dices
pub trait Source {
    fn throw(&mut self, sides: u64) -> u64;
}

/// Roll a single dice using the default Rng source
pub fn roll_one(sides: u64) -> error::Result<u64> {
    roll_one_with_source(
        sides,
        &mut RandomSource {
            generator: &mut rand::thread_rng(),
        },
    )
}

/// Roll a single dice using the provided source
pub fn roll_one_with_source<S: Source>(sides: u64, source: &mut S) -> error::Result<u64> {
    if sides == 0 {
        return Err(Error::InvalidSides(sides));
    }
    Ok(source.throw(sides))
}

/// Roll `count` dices using the default Rng source
pub fn roll_many(sides: u64, count: u64) -> error::Result<Vec<u64>> {
    roll_many_with_source(
        sides,
        count,
        &mut RandomSource {
            generator: &mut rand::thread_rng(),
        },
    )
}

/// Roll `count` dices using the provided source
///
/// No more than `MAX_DICE_AMOUNT` dices are thrown at once.
pub fn roll_many_with_source<S: Source>(
    sides: u64,
    count: u64,
    source: &mut S,
) -> error::Result<Vec<u64>> {
    if sides == 0 {
        return Err(Error::InvalidSides(sides));
    }
    if count > limits::MAX_DICE_AMOUNT {
        return Err(Error::TooManyDice(limits::MAX_DICE_AMOUNT));
    }
    Ok((0..count).map(|_| source.throw(sides)).collect())
}
