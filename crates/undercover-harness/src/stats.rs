//! Frequency tallies for statistical uniformity checks.

use std::{collections::HashMap, hash::Hash};

/// Counts how often each outcome occurs over repeated trials.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    counts: HashMap<K, u64>,
    trials: u64,
}

impl<K: Eq + Hash> Default for Tally<K> {
    fn default() -> Self {
        Self { counts: HashMap::new(), trials: 0 }
    }
}

impl<K: Eq + Hash> Tally<K> {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one trial.
    pub fn record(&mut self, outcome: K) {
        *self.counts.entry(outcome).or_insert(0) += 1;
        self.trials += 1;
    }

    /// Number of recorded trials.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Number of distinct outcomes seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// How often `outcome` occurred.
    pub fn count(&self, outcome: &K) -> u64 {
        self.counts.get(outcome).copied().unwrap_or(0)
    }

    /// Largest relative deviation from a uniform split over `buckets`
    /// outcomes.
    ///
    /// Outcomes never seen count as zero, so a missing bucket yields a
    /// deviation of 1.0.
    #[allow(clippy::cast_precision_loss)]
    pub fn max_relative_deviation(&self, buckets: usize) -> f64 {
        if buckets == 0 || self.trials == 0 {
            return 0.0;
        }

        let expected = self.trials as f64 / buckets as f64;
        let unseen = buckets.saturating_sub(self.counts.len());
        let worst_seen = self
            .counts
            .values()
            .map(|&count| (count as f64 - expected).abs() / expected)
            .fold(0.0_f64, f64::max);

        if unseen > 0 { worst_seen.max(1.0) } else { worst_seen }
    }

    /// Pearson chi-square statistic against a uniform split over `buckets`
    /// outcomes.
    #[allow(clippy::cast_precision_loss)]
    pub fn chi_square(&self, buckets: usize) -> f64 {
        if buckets == 0 || self.trials == 0 {
            return 0.0;
        }

        let expected = self.trials as f64 / buckets as f64;
        let unseen = buckets.saturating_sub(self.counts.len()) as f64;
        let seen: f64 = self
            .counts
            .values()
            .map(|&count| {
                let diff = count as f64 - expected;
                diff * diff / expected
            })
            .sum();

        seen + unseen * expected
    }
}

/// Binomial coefficient `C(n, k)`.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(20, 3), 1140);
        assert_eq!(binomial(4, 0), 1);
        assert_eq!(binomial(3, 4), 0);
    }

    #[test]
    fn perfectly_uniform_tally() {
        let mut tally = Tally::new();
        for i in 0..400 {
            tally.record(i % 4);
        }

        assert_eq!(tally.trials(), 400);
        assert_eq!(tally.distinct(), 4);
        assert_eq!(tally.count(&2), 100);
        assert!(tally.max_relative_deviation(4) < f64::EPSILON);
        assert!(tally.chi_square(4) < f64::EPSILON);
    }

    #[test]
    fn missing_bucket_is_maximal_deviation() {
        let mut tally = Tally::new();
        for _ in 0..10 {
            tally.record("a");
        }

        assert!(tally.max_relative_deviation(2) >= 1.0);
        assert!(tally.chi_square(2) > 9.0);
    }
}
