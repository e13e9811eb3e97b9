//! Category locks for CloudNav.
//!
//! A locked category is one with a password set; unlocking it adds the
//! category id to an in-memory set that resets on every run. This is a
//! client-side visibility filter, the plaintext comparison included, and
//! deliberately not a security boundary.

use std::collections::HashSet;

use crate::types::errors::LockError;
use crate::types::record::{Category, Link};

/// Trait defining category lock operations.
pub trait LockManagerTrait {
    fn unlock(&mut self, category: &Category, password: &str) -> Result<(), LockError>;
    fn lock(&mut self, category_id: &str);
    fn is_unlocked(&self, category: Option<&Category>) -> bool;
    fn visible_links<'a>(&self, links: &'a [Link], categories: &[Category]) -> Vec<&'a Link>;
}

/// In-memory unlock set. Never persisted: a reload locks everything again.
pub struct LockManager {
    unlocked: HashSet<String>,
}

impl LockManager {
    pub fn new() -> Self {
        Self {
            unlocked: HashSet::new(),
        }
    }
}

impl Default for LockManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LockManagerTrait for LockManager {
    /// Unlocks a category by plaintext password comparison.
    fn unlock(&mut self, category: &Category, password: &str) -> Result<(), LockError> {
        match &category.password {
            None => Err(LockError::NotLocked(category.id.clone())),
            Some(expected) if expected == password => {
                self.unlocked.insert(category.id.clone());
                Ok(())
            }
            Some(_) => Err(LockError::WrongPassword),
        }
    }

    /// Re-locks a category for this run.
    fn lock(&mut self, category_id: &str) {
        self.unlocked.remove(category_id);
    }

    /// A category is unlocked when it has no password or has been unlocked
    /// this run. `None` means a dangling reference: those links belong to
    /// no locked category and are always visible.
    fn is_unlocked(&self, category: Option<&Category>) -> bool {
        match category {
            None => true,
            Some(c) => c.password.is_none() || self.unlocked.contains(&c.id),
        }
    }

    /// Filters links down to those whose category is currently visible.
    fn visible_links<'a>(&self, links: &'a [Link], categories: &[Category]) -> Vec<&'a Link> {
        links
            .iter()
            .filter(|link| {
                let category = categories.iter().find(|c| c.id == link.category_id);
                self.is_unlocked(category)
            })
            .collect()
    }
}
