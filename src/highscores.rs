//! Session leaderboard
//!
//! Best final scores of the current process, highest first. Bounded: when a
//! new score arrives at capacity, the lowest entry is evicted. Nothing is
//! persisted.

use serde::{Deserialize, Serialize};

/// Default maximum number of retained scores
pub const DEFAULT_CAPACITY: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    capacity: usize,
    scores: Vec<i32>,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Leaderboard {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            scores: Vec::with_capacity(capacity),
        }
    }

    /// Retained scores, highest first
    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn top_score(&self) -> Option<i32> {
        self.scores.first().copied()
    }

    /// Insert a score, keeping the list sorted descending and bounded.
    /// Returns the 1-indexed rank when the score is retained.
    pub fn add(&mut self, score: i32) -> Option<usize> {
        let pos = self
            .scores
            .iter()
            .position(|&s| score > s)
            .unwrap_or(self.scores.len());
        if pos >= self.capacity {
            // Below the retained tail at capacity
            return None;
        }
        self.scores.insert(pos, score);
        self.scores.truncate(self.capacity);
        Some(pos + 1)
    }

    /// Lines for the display sink, scores zero-padded to three digits
    pub fn render_lines(&self) -> Vec<String> {
        self.scores
            .iter()
            .enumerate()
            .map(|(i, score)| format!("{}. {:03}", i + 1, score))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_stay_sorted_descending() {
        let mut board = Leaderboard::default();
        board.add(10);
        board.add(30);
        board.add(20);
        assert_eq!(board.scores(), &[30, 20, 10]);
    }

    #[test]
    fn test_rank_is_one_indexed() {
        let mut board = Leaderboard::default();
        assert_eq!(board.add(10), Some(1));
        assert_eq!(board.add(30), Some(1));
        assert_eq!(board.add(20), Some(2));
        assert_eq!(board.add(5), Some(4));
    }

    #[test]
    fn test_capacity_evicts_lowest() {
        let mut board = Leaderboard::new(3);
        board.add(10);
        board.add(20);
        board.add(30);
        assert_eq!(board.add(25), Some(2));
        assert_eq!(board.scores(), &[30, 25, 20]);
    }

    #[test]
    fn test_score_below_tail_is_rejected_at_capacity() {
        let mut board = Leaderboard::new(3);
        board.add(10);
        board.add(20);
        board.add(30);
        assert_eq!(board.add(5), None);
        assert_eq!(board.scores(), &[30, 20, 10]);
    }

    #[test]
    fn test_ties_rank_behind_existing_entries() {
        let mut board = Leaderboard::default();
        board.add(20);
        assert_eq!(board.add(20), Some(2));
        assert_eq!(board.scores(), &[20, 20]);
    }

    #[test]
    fn test_top_score() {
        let mut board = Leaderboard::default();
        assert_eq!(board.top_score(), None);
        board.add(7);
        board.add(12);
        assert_eq!(board.top_score(), Some(12));
    }

    #[test]
    fn test_render_lines_zero_pads() {
        let mut board = Leaderboard::default();
        board.add(7);
        board.add(112);
        assert_eq!(board.render_lines(), vec!["1. 112", "2. 007"]);
    }
}
