use crate::dice;
use crate::error::Error;
use crate::error::Result;
use crate::roll;
use chrono::Utc;
use tracing::debug;

pub(crate) mod limits {
    /// Arbitrary limit to avoid oom, per group and per `roll_many`
    pub(crate) const MAX_DICE_AMOUNT: u64 = 5000;
}

/// Represent an evaluator
pub(crate) struct Evaluator;

impl Evaluator {
    fn eval_group<S: roll::Source>(group: dice::Group, source: &mut S) -> Result<roll::Outcome> {
        let results = roll::roll_many_with_source(group.sides, group.count, source)?;
        roll::Outcome::new(group, results)
    }

    // roll a whole expression, groups in order
    pub(crate) fn eval<S: roll::Source>(
        notation: &str,
        expr: &dice::Expression,
        source: &mut S,
    ) -> Result<roll::Result> {
        if expr
            .groups
            .iter()
            .any(|group| group.count > limits::MAX_DICE_AMOUNT)
        {
            return Err(Error::TooManyDice(limits::MAX_DICE_AMOUNT));
        }
        let rolls = expr
            .groups
            .iter()
            .map(|group| Self::eval_group(*group, source))
            .collect::<Result<Vec<_>>>()?;
        let result = roll::Result::new(notation.to_owned(), rolls, expr.modifier, Utc::now())?;
        debug!(
            "Rolled `{}` for a total of {}",
            result.notation(),
            result.total()
        );
        Ok(result)
    }
}
