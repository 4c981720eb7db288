/// Crate Error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("a dice needs at least one side, got `{0}`")]
    InvalidSides(u64),
    #[error("exceeded max allowed amount of dices `{0}`")]
    TooManyDice(u64),
    #[error("roll total does not fit in a 64 bit integer")]
    Overflow,
    #[error("inconsistent roll record: {0}")]
    Inconsistent(&'static str),
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
