use crate::dice;
use pest::iterators::Pair;
use pest::Parser as _;
use pest_derive::Parser;
use tracing::debug;
use tracing::trace;

/// Pest parser
#[derive(Parser)]
#[grammar = "tumble.pest"]
pub(crate) struct Parser;

impl Parser {
    fn extract_dice(dice: Pair<Rule>) -> Option<dice::Group> {
        let mut count = 1;
        let mut sides = 0;
        for inner in dice.into_inner() {
            match inner.as_rule() {
                Rule::count => count = inner.as_str().parse::<u64>().ok()?,
                Rule::sides => sides = inner.as_str().parse::<u64>().ok()?,
                _ => (),
            }
        }
        (sides > 0).then(|| dice::Group::new(sides, count))
    }

    fn extract_modifier(modifier: Pair<Rule>) -> Option<i64> {
        let mut negative = false;
        let mut magnitude = None;
        for inner in modifier.into_inner() {
            match inner.as_rule() {
                Rule::sign => negative = inner.as_str() == "-",
                Rule::number => magnitude = inner.as_str().parse::<u64>().ok(),
                _ => (),
            }
        }
        let magnitude = i128::from(magnitude?);
        i64::try_from(if negative { -magnitude } else { magnitude }).ok()
    }
}

/// Parse a dice notation like `3d6 + 1d20 - 2`
///
/// Case and whitespace are ignored. Every dice token becomes a group, in
/// order, and every standalone signed integer is summed into the modifier.
/// Anything else is skipped: malformed input degrades to an empty or partial
/// expression and never fails.
pub fn parse(notation: &str) -> dice::Expression {
    let cleaned: String = notation
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    let mut expression = dice::Expression::default();
    if cleaned.is_empty() {
        return expression;
    }
    let tokens = match Parser::parse(Rule::notation, &cleaned) {
        Ok(mut pairs) => match pairs.next() {
            Some(pair) => pair.into_inner(),
            None => return expression,
        },
        Err(error) => {
            debug!("Unable to scan `{}`: {}", notation, error);
            return expression;
        }
    };
    for token in tokens {
        let text = token.as_str();
        match token.as_rule() {
            Rule::dice => match Parser::extract_dice(token) {
                Some(group) => expression.groups.push(group),
                None => debug!("Dropped malformed dice `{}`", text),
            },
            Rule::modifier | Rule::leading => match Parser::extract_modifier(token) {
                Some(value) => expression.modifier = expression.modifier.saturating_add(value),
                None => debug!("Dropped out of range modifier `{}`", text),
            },
            _ => (),
        }
    }
    trace!("Parsed `{}` into {:?}", notation, expression);
    expression
}
