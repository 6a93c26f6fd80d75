//! Identifier allocation for nodes and edges.

/// Hands out `"{prefix}_{n}"` identifiers with a monotonically increasing counter.
///
/// The allocator does not own the collection it allocates for, so callers pass a
/// predicate telling it which candidates are already taken.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    prefix: String,
    next: u64,
}

impl IdAllocator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Allocates the next identifier for which `is_taken` returns false.
    ///
    /// The counter wraps back to 1 after `u64::MAX` and keeps skipping taken ids.
    pub fn allocate(&mut self, is_taken: impl Fn(&str) -> bool) -> String {
        loop {
            let candidate = format!("{}_{}", self.prefix, self.next);
            self.next = self.next.checked_add(1).unwrap_or(1);
            if !is_taken(&candidate) {
                return candidate;
            }
        }
    }

    /// Moves the counter past every `"{prefix}_{n}"` identifier in `existing`.
    ///
    /// A counter of `u64::MAX` cannot be moved past and is left to `allocate`'s
    /// taken-check instead.
    pub fn reseed<'a>(&mut self, existing: impl IntoIterator<Item = &'a str>) {
        let highest = existing
            .into_iter()
            .filter_map(|id| self.counter_of(id))
            .filter(|&n| n < u64::MAX)
            .max();
        if let Some(highest) = highest {
            self.next = self.next.max(highest + 1);
        }
    }

    fn counter_of(&self, id: &str) -> Option<u64> {
        id.strip_prefix(self.prefix.as_str())?
            .strip_prefix('_')?
            .parse()
            .ok()
    }
}
