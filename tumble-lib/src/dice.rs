use crate::parser;
use crate::pool;
use serde::Deserialize;
use serde::Serialize;
use std::convert::Infallible;
use std::str::FromStr;

/// Mark if a dice result is a critic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Critic {
    Max,
    Min,
    Not,
}

impl Critic {
    pub fn of(value: u64, sides: u64) -> Self {
        match value {
            v if v == sides => Critic::Max,
            1 => Critic::Min,
            _ => Critic::Not,
        }
    }
}

/// A cluster of dice sharing the same number of sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group {
    pub sides: u64,
    /// `0` marks a group left out when building notation
    pub count: u64,
}

impl Group {
    pub fn new(sides: u64, count: u64) -> Self {
        Group { sides, count }
    }

    pub fn is_active(&self) -> bool {
        self.count > 0
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// Structured form of a dice notation
///
/// Groups keep the order they had in the text. The order only matters for
/// display, never for totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub groups: Vec<Group>,
    pub modifier: i64,
}

impl Expression {
    pub fn new(groups: Vec<Group>, modifier: i64) -> Self {
        Expression { groups, modifier }
    }

    /// True when there is nothing to roll, the modifier aside
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| !group.is_active())
    }

    pub fn dice_count(&self) -> u64 {
        self.groups
            .iter()
            .fold(0, |acc, group| acc.saturating_add(group.count))
    }

    /// Lowest reachable total
    pub fn min(&self) -> i64 {
        let dice = self
            .groups
            .iter()
            .fold(0i128, |acc, group| acc.saturating_add(group.count.into()));
        clamp(dice.saturating_add(self.modifier.into()))
    }

    /// Highest reachable total
    pub fn max(&self) -> i64 {
        let dice = self.groups.iter().fold(0i128, |acc, group| {
            let faces = u128::from(group.count) * u128::from(group.sides);
            acc.saturating_add(i128::try_from(faces).unwrap_or(i128::MAX))
        });
        clamp(dice.saturating_add(self.modifier.into()))
    }

    /// Expected total
    pub fn average(&self) -> f64 {
        self.groups.iter().fold(self.modifier as f64, |acc, group| {
            acc + group.count as f64 * (group.sides as f64 + 1.0) / 2.0
        })
    }
}

fn clamp(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", pool::build_notation(&self.groups, self.modifier))
    }
}

impl FromStr for Expression {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parser::parse(s))
    }
}
