use crate::dice;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::parser;
use crate::roll;
use rand::Rng;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides)
    }
}

/// Parse and roll a notation using the default Rng source
///
/// Malformed text is not an error, it rolls whatever could be read from it.
/// The only failure is a group asking for too many dices.
pub fn evaluate(notation: &str) -> Result<roll::Result> {
    Solver::new(notation).solve()
}

/// Parse and roll a notation using the provided source
pub fn evaluate_with_source<S: roll::Source>(
    notation: &str,
    source: &mut S,
) -> Result<roll::Result> {
    Solver::new(notation).solve_with_source(source)
}

/// Represent a solver and holds the query string
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solver(String);

impl Solver {
    pub fn new(input: &str) -> Self {
        Solver(input.to_owned())
    }

    /// Solve the roll expression using the default Rng source
    pub fn solve(&self) -> Result<roll::Result> {
        self.solve_with(&mut rand::thread_rng())
    }

    /// Solve the roll expression using the provided Rng source
    pub fn solve_with<S: Rng>(&self, generator: &mut S) -> Result<roll::Result> {
        self.solve_with_source(&mut RandomSource { generator })
    }

    /// Solve the roll expression using the provided source
    pub fn solve_with_source<S: roll::Source>(&self, source: &mut S) -> Result<roll::Result> {
        Evaluator::eval(&self.0, &self.expression(), source)
    }

    pub fn expression(&self) -> dice::Expression {
        parser::parse(&self.0)
    }

    /// Return an iterator on the dices in the roll expression
    pub fn dices(&self) -> impl Iterator<Item = String> {
        self.expression()
            .groups
            .into_iter()
            .map(|group| group.to_string())
    }

    /// Return the query string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
