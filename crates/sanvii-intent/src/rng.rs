//! Injectable random-selection source.
//!
//! Varied phrasing (greetings, jokes, acknowledgements) draws uniformly
//! from fixed reply lists. The draw goes through a `RandomSource` so that
//! hosts use real entropy while tests pin the selection.

use rand::Rng;

/// Source of uniform random indices for reply-variant selection.
pub trait RandomSource: Send {
    /// Return an index in `0..len`. `len` is always at least 1.
    fn pick(&mut self, len: usize) -> usize;
}

/// Thread-local entropy source used by hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

/// Deterministic source replaying a fixed sequence of indices.
///
/// Each draw takes the next value modulo the list length, wrapping around
/// the sequence when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn pick(&mut self, len: usize) -> usize {
        if self.values.is_empty() || len == 0 {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_in_range() {
        let mut rng = ThreadRandom;
        for _ in 0..100 {
            let idx = rng.pick(5);
            assert!(idx < 5);
        }
    }

    #[test]
    fn test_thread_random_single_element() {
        assert_eq!(ThreadRandom.pick(1), 0);
    }

    #[test]
    fn test_sequence_random_replays_values() {
        let mut rng = SequenceRandom::new(vec![2, 0, 4]);
        assert_eq!(rng.pick(5), 2);
        assert_eq!(rng.pick(5), 0);
        assert_eq!(rng.pick(5), 4);
        // Wraps around
        assert_eq!(rng.pick(5), 2);
    }

    #[test]
    fn test_sequence_random_wraps_modulo_len() {
        let mut rng = SequenceRandom::new(vec![7]);
        assert_eq!(rng.pick(3), 1);
    }

    #[test]
    fn test_sequence_random_empty_values() {
        let mut rng = SequenceRandom::new(vec![]);
        assert_eq!(rng.pick(4), 0);
    }
}
