//! Bounded-resampling technique selection.
//!
//! A candidate combination is read from the byte block. If that sorted
//! combination was already used in the current call, the block is rotated
//! left by one byte and read again, until [`MAX_ATTEMPTS`] candidates have
//! been checked. The last checked candidate is then accepted as a duplicate.

use super::catalog::Technique;
use std::collections::HashSet;

/// Candidates checked before a used combination is accepted.
pub const MAX_ATTEMPTS: usize = 10;

/// Most techniques stacked onto one prompt.
pub const MAX_STACK: usize = 3;

/// Smallest usable block: one count byte plus one byte per stacked technique.
pub const MIN_STACK_BLOCK: usize = 1 + MAX_STACK;

/// Outcome of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Techniques in application order.
    pub techniques: Vec<Technique>,
    /// Rotations performed before acceptance.
    pub attempts: usize,
    /// True when the bound was hit and a used combination was accepted.
    pub duplicate: bool,
}

/// Reads one candidate combination from the front of `bytes`.
fn candidate(bytes: &[u8]) -> Vec<Technique> {
    let Some(&first) = bytes.first() else {
        return vec![Technique::StepByStep];
    };
    let count = usize::from(first) % MAX_STACK + 1;

    let mut available = Technique::ALL.to_vec();
    let mut selected = Vec::with_capacity(count);
    for &byte in bytes.iter().skip(1).take(count) {
        let idx = usize::from(byte) % available.len();
        selected.push(available.remove(idx));
    }

    if selected.is_empty() {
        selected.push(Technique::StepByStep);
    }
    selected
}

fn combination_key(techniques: &[Technique]) -> Vec<Technique> {
    let mut key = techniques.to_vec();
    key.sort_unstable();
    key
}

/// Tracks combinations used during one generation call.
#[derive(Debug, Default)]
pub struct TechniqueSelector {
    used: HashSet<Vec<Technique>>,
}

impl TechniqueSelector {
    /// Creates a selector with no used combinations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a combination and records it as used.
    pub fn select(&mut self, bytes: &[u8]) -> Selection {
        let mut window = bytes.to_vec();
        let mut selected = candidate(&window);

        for attempt in 0..MAX_ATTEMPTS {
            if !self.used.contains(&combination_key(&selected)) {
                self.used.insert(combination_key(&selected));
                return Selection {
                    techniques: selected,
                    attempts: attempt,
                    duplicate: false,
                };
            }
            if attempt + 1 < MAX_ATTEMPTS {
                if !window.is_empty() {
                    window.rotate_left(1);
                }
                selected = candidate(&window);
            }
        }

        // `selected` is the last checked candidate, already in `used`.
        tracing::debug!(
            attempts = MAX_ATTEMPTS,
            "No unused technique combination found, accepting duplicate"
        );
        Selection {
            techniques: selected,
            attempts: MAX_ATTEMPTS - 1,
            duplicate: true,
        }
    }

    /// Returns how many distinct combinations have been used.
    pub fn used_count(&self) -> usize {
        self.used.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_reads_count_then_indices() {
        // count = 2 % 3 + 1 = 3; indices 0, 0, 0 over a shrinking list
        let picked = candidate(&[2, 0, 0, 0]);
        assert_eq!(
            picked,
            vec![Technique::StepByStep, Technique::ExpertRole, Technique::Examples]
        );
    }

    #[test]
    fn test_candidate_single_technique() {
        assert_eq!(candidate(&[0, 9]), vec![Technique::Concise]);
    }

    #[test]
    fn test_repeat_triggers_rotation() {
        let mut selector = TechniqueSelector::new();
        let block = [0, 4, 7, 1];

        let first = selector.select(&block);
        assert_eq!(first.techniques, vec![Technique::Reasoning]);
        assert!(!first.duplicate);

        // Same block again: rotation to [4, 7, 1, 0] gives count 2.
        let second = selector.select(&block);
        assert_eq!(second.attempts, 1);
        assert_eq!(
            second.techniques,
            vec![Technique::Actionable, Technique::ExpertRole]
        );
        assert_eq!(selector.used_count(), 2);
    }

    #[test]
    fn test_exhausted_bound_accepts_duplicate() {
        let mut selector = TechniqueSelector::new();
        let block = [0u8; 20];

        selector.select(&block);
        let again = selector.select(&block);

        assert!(again.duplicate);
        assert_eq!(again.attempts, MAX_ATTEMPTS - 1);
        assert_eq!(again.techniques, vec![Technique::StepByStep]);
    }

    #[test]
    fn test_duplicate_is_last_checked_candidate() {
        let mut selector = TechniqueSelector::new();
        // Rotations 0..=9 all read [StepByStep]; rotation 10 would read [ProsCons].
        let mut block = [0u8; 20];
        block[11] = 5;

        let first = selector.select(&block);
        let again = selector.select(&block);

        assert_eq!(first.techniques, vec![Technique::StepByStep]);
        assert!(again.duplicate);
        assert_eq!(again.techniques, vec![Technique::StepByStep]);
        assert_eq!(selector.used_count(), 1);
    }

    #[test]
    fn test_distinct_used_candidates_accept_tenth() {
        let mut selector = TechniqueSelector::new();
        for i in 0..Technique::ALL.len() as u8 {
            assert!(!selector.select(&[0, i]).duplicate);
        }

        // Byte k is 3k: every rotation reads a single technique at index
        // 3(k + 1) % 10, so rotations 0..=9 cover all ten, each already used.
        let block: Vec<u8> = (0..20).map(|k| 3 * k).collect();
        let picked = selector.select(&block);

        assert!(picked.duplicate);
        assert_eq!(picked.attempts, MAX_ATTEMPTS - 1);
        assert_eq!(picked.techniques, vec![Technique::ALL[0]]);
        assert_ne!(candidate(&block), picked.techniques);
        assert_eq!(selector.used_count(), Technique::ALL.len());
    }
}
