use crate::dice;
use itertools::Itertools;

/// Render a dice pool and a modifier back to notation
///
/// Groups with no dice are left out. `[3d6, 1d20]` with `-2` gives
/// `3d6 + 1d20 - 2`. Without any dice the modifier stands alone with its sign
/// (`+5`), and an empty pool without modifier renders as an empty string.
pub fn build_notation(pool: &[dice::Group], modifier: i64) -> String {
    let dice = pool
        .iter()
        .filter(|group| group.is_active())
        .format(" + ")
        .to_string();
    match (dice.is_empty(), modifier) {
        (_, 0) => dice,
        (true, m) if m > 0 => format!("+{m}"),
        (true, m) => format!("-{}", m.unsigned_abs()),
        (false, m) if m > 0 => format!("{dice} + {m}"),
        (false, m) => format!("{dice} - {}", m.unsigned_abs()),
    }
}

/// A pool can be rolled once it holds at least one dice
pub fn is_valid_pool(pool: &[dice::Group]) -> bool {
    pool.iter().any(dice::Group::is_active)
}
