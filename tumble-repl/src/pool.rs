use tumble_lib::build_notation;
use tumble_lib::dice::Group;
use tumble_lib::is_valid_pool;

/// Dices offered by the builder before anything is added
pub(crate) const STANDARD_DICE: [u64; 7] = [4, 6, 8, 10, 12, 20, 100];

/// Dice pool assembled one die type at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PoolBuilder {
    groups: Vec<Group>,
    modifier: i64,
}

impl PoolBuilder {
    pub(crate) fn new() -> Self {
        Self {
            groups: STANDARD_DICE
                .iter()
                .map(|&sides| Group::new(sides, 0))
                .collect(),
            modifier: 0,
        }
    }

    /// Set how many dices of this type are in the pool, adding the type if needed
    pub(crate) fn set(&mut self, group: Group) {
        match self.groups.iter_mut().find(|g| g.sides == group.sides) {
            Some(existing) => existing.count = group.count,
            None => self.groups.push(group),
        }
    }

    pub(crate) fn set_modifier(&mut self, modifier: i64) {
        self.modifier = modifier;
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn notation(&self) -> String {
        build_notation(&self.groups, self.modifier)
    }

    pub(crate) fn is_valid(&self) -> bool {
        is_valid_pool(&self.groups)
    }
}
