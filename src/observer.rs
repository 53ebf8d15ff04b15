//! One-shot visibility observers.
//!
//! DESIGN
//! ======
//! Counters, progress bars, card reveals and lazy images all share one
//! pattern: watch a set of targets, fire once per target on its first
//! qualifying intersection, then stop watching it. [`OneShotObserver`] owns
//! that bookkeeping; the host only forwards raw intersection entries and
//! mirrors `observe`/`unobserve` onto the platform observer.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use serde::{Deserialize, Serialize};

/// Threshold and root margin handed to the platform observer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    /// Minimum visible ratio for an entry to qualify.
    pub threshold: f64,
    /// CSS-style margin applied to the root bounds.
    pub root_margin: String,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self { threshold: 0.0, root_margin: "0px".to_owned() }
    }
}

impl ObserverOptions {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, ..Self::default() }
    }

    #[must_use]
    pub fn with_root_margin(mut self, root_margin: &str) -> Self {
        root_margin.clone_into(&mut self.root_margin);
        self
    }

    /// Whether `entry` is visible enough to trigger.
    #[must_use]
    pub fn qualifies(&self, entry: IntersectionEntry) -> bool {
        entry.intersecting && entry.ratio >= self.threshold
    }
}

/// A single intersection notification for one target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub intersecting: bool,
    /// Visible fraction of the target, `0.0..=1.0`.
    pub ratio: f64,
}

impl IntersectionEntry {
    #[must_use]
    pub fn visible(ratio: f64) -> Self {
        Self { intersecting: ratio > 0.0, ratio }
    }

    #[must_use]
    pub fn hidden() -> Self {
        Self { intersecting: false, ratio: 0.0 }
    }
}

/// Observe-until-triggered bookkeeping for a set of targets.
#[derive(Clone, Debug)]
pub struct OneShotObserver<T> {
    options: ObserverOptions,
    pending: Vec<T>,
}

impl<T: PartialEq> OneShotObserver<T> {
    #[must_use]
    pub fn new(options: ObserverOptions) -> Self {
        Self { options, pending: Vec::new() }
    }

    #[must_use]
    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Start watching `target`. Returns `false` if it is already watched.
    pub fn observe(&mut self, target: T) -> bool {
        if self.pending.contains(&target) {
            return false;
        }
        self.pending.push(target);
        true
    }

    /// Feed one entry. Returns `true` exactly once per target: on its first
    /// qualifying entry, at which point the target is no longer watched.
    pub fn notify(&mut self, target: &T, entry: IntersectionEntry) -> bool {
        if !self.options.qualifies(entry) {
            return false;
        }
        let Some(index) = self.pending.iter().position(|t| t == target) else {
            return false;
        };
        self.pending.remove(index);
        true
    }

    #[must_use]
    pub fn is_observing(&self, target: &T) -> bool {
        self.pending.contains(target)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
