use std::collections::VecDeque;
use tumble_lib::roll;

/// Bounded log of the last rolls, oldest first
#[derive(Debug, Clone)]
pub(crate) struct RollLog {
    limit: usize,
    entries: VecDeque<roll::Result>,
}

impl RollLog {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            limit,
            entries: VecDeque::with_capacity(limit),
        }
    }

    pub(crate) fn push(&mut self, result: roll::Result) {
        self.entries.push_back(result);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &roll::Result> {
        self.entries.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
