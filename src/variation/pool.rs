//! Approach pool for anti-repetition.
//!
//! Approaches are drawn without replacement until the pool is empty,
//! then the pool is refilled with the full set in declared order.
//! Within one generation call every approach is used once before any
//! repeats.

use super::Approach;

/// Draw-until-exhausted pool of approaches.
#[derive(Debug, Clone)]
pub struct ApproachPool {
    available: Vec<Approach>,
    /// Completed refills (for diagnostics).
    refills: u64,
}

impl ApproachPool {
    /// Creates a full pool.
    pub fn new() -> Self {
        Self {
            available: Approach::ALL.to_vec(),
            refills: 0,
        }
    }

    /// Draws the approach at `selector mod remaining` and removes it.
    pub fn draw(&mut self, selector: u8) -> Approach {
        if self.available.is_empty() {
            self.refill();
        }

        let idx = usize::from(selector) % self.available.len();
        let approach = self.available.remove(idx);

        tracing::trace!(
            approach = approach.id(),
            remaining = self.available.len(),
            "Drew approach from pool"
        );
        approach
    }

    fn refill(&mut self) {
        self.available = Approach::ALL.to_vec();
        self.refills += 1;
        tracing::debug!(refills = self.refills, "Approach pool exhausted, refilled");
    }

    /// Returns the approaches not yet drawn in this cycle.
    pub fn available(&self) -> &[Approach] {
        &self.available
    }

    /// Returns the number of refills performed.
    pub fn refills(&self) -> u64 {
        self.refills
    }
}

impl Default for ApproachPool {
    fn default() -> Self {
        Self::new()
    }
}
