// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::fmt;

/// Counts values created, cloned and dropped.
#[derive(Debug, Default)]
pub struct Ledger {
    created: Cell<usize>,
    clones: Cell<usize>,
    drops: Cell<usize>,
    clone_budget: Cell<Option<usize>>,
}

impl Ledger {
    /// Creates a ledger whose values clone without limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger whose values panic on clone after `budget` clones.
    pub fn with_clone_budget(budget: usize) -> Self {
        let ledger = Self::default();
        ledger.clone_budget.set(Some(budget));
        ledger
    }

    /// Replaces the clone budget; `None` removes the limit.
    pub fn set_clone_budget(&self, budget: Option<usize>) {
        self.clone_budget.set(budget);
    }

    /// Creates a new tracked value.
    pub fn track(&self, value: u32) -> Tracked<'_> {
        self.created.set(self.created.get() + 1);
        Tracked {
            value,
            ledger: self,
        }
    }

    /// Values created so far, clones included.
    pub fn created(&self) -> usize {
        self.created.get()
    }

    /// Successful clones so far.
    pub fn clones(&self) -> usize {
        self.clones.get()
    }

    /// Drops so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }

    /// Values created and not yet dropped.
    ///
    /// # Panics
    ///
    /// Panics if more values were dropped than created (a double drop).
    pub fn live(&self) -> usize {
        self.created()
            .checked_sub(self.drops())
            .expect("Ledger: more drops than values created (double drop)")
    }
}

/// A `u32` whose lifecycle is recorded in a [`Ledger`].
pub struct Tracked<'a> {
    value: u32,
    ledger: &'a Ledger,
}

impl Tracked<'_> {
    /// Returns the wrapped value.
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl Clone for Tracked<'_> {
    fn clone(&self) -> Self {
        if let Some(remaining) = self.ledger.clone_budget.get() {
            if remaining == 0 {
                panic!("Tracked: clone budget exhausted");
            }
            self.ledger.clone_budget.set(Some(remaining - 1));
        }

        self.ledger.clones.set(self.ledger.clones.get() + 1);
        self.ledger.track(self.value)
    }
}

impl Drop for Tracked<'_> {
    fn drop(&mut self) {
        self.ledger.drops.set(self.ledger.drops.get() + 1);
    }
}

impl PartialEq for Tracked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked<'_> {}

impl PartialEq<u32> for Tracked<'_> {
    fn eq(&self, other: &u32) -> bool {
        self.value == *other
    }
}

impl fmt::Debug for Tracked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
