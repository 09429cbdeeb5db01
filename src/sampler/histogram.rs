use std::collections::BTreeMap;

use crate::core::{interval::Interval, sampler::Sampler};

use super::{draw_range, sample_interval, SampleError};

/// Empirical distribution of repeated draws from one interval.
pub struct Histogram {
    count: i64,
    trials: usize,
    counts: BTreeMap<i64, usize>,
}

impl Histogram {
    pub fn collect<S: Sampler + ?Sized>(
        interval: &Interval,
        sampler: &mut S,
        trials: usize,
    ) -> Result<Self, SampleError> {
        let (_, count) = draw_range(interval)?;
        let mut counts = BTreeMap::new();
        for _ in 0..trials {
            *counts.entry(sample_interval(interval, sampler)?).or_insert(0) += 1;
        }
        Ok(Self {
            count,
            trials,
            counts,
        })
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn bins(&self) -> u64 {
        // a zero-width open interval only ever yields its lower bound
        self.count.max(1) as u64
    }

    pub fn count(&self, value: i64) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Observed values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.counts.keys().copied()
    }

    /// Pearson's statistic against a uniform distribution over every bin,
    /// with `bins() - 1` degrees of freedom.
    pub fn chi_square(&self) -> f64 {
        let bins = self.bins();
        let expected = self.trials as f64 / bins as f64;
        let observed: f64 = self
            .counts
            .values()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();
        // bins that never came up
        let empty = bins - self.counts.len() as u64;
        observed + empty as f64 * expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sampler::FixedSampler;

    #[test]
    fn counts_every_draw() {
        let mut sampler = FixedSampler::new(vec![0.0, 0.3, 0.6, 0.9]);
        let interval = Interval::new(0, 3, '[', ')');
        let histogram = Histogram::collect(&interval, &mut sampler, 8).unwrap();
        assert_eq!(histogram.trials(), 8);
        assert_eq!(histogram.bins(), 4);
        assert_eq!(histogram.values().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        for value in 0..4 {
            assert_eq!(histogram.count(value), 2);
        }
        assert_eq!(histogram.chi_square(), 0.0);
    }

    #[test]
    fn empty_bins_count_against_uniformity() {
        let mut sampler = FixedSampler::new(vec![0.0]);
        let interval = Interval::new(0, 1, '[', ')');
        let histogram = Histogram::collect(&interval, &mut sampler, 10).unwrap();
        assert_eq!(histogram.bins(), 2);
        // (10 - 5)^2 / 5 + (0 - 5)^2 / 5
        assert!((histogram.chi_square() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn zero_width_open_interval_has_one_bin() {
        let mut sampler = FixedSampler::new(vec![0.7]);
        let interval = Interval::new(2, 2, '(', ')');
        let histogram = Histogram::collect(&interval, &mut sampler, 5).unwrap();
        assert_eq!(histogram.bins(), 1);
        assert_eq!(histogram.count(2), 5);
    }

    #[test]
    fn bounds_are_checked_without_trials() {
        let mut sampler = FixedSampler::new(vec![0.7]);
        let inverted = Interval::new(5, 1, '[', ')');
        assert_eq!(
            Histogram::collect(&inverted, &mut sampler, 0).err(),
            Some(SampleError::InvalidInterval {
                minimum: 5,
                maximum: 1
            })
        );
        let full = Interval::new(i64::MIN, i64::MAX, '[', ')');
        assert_eq!(
            Histogram::collect(&full, &mut sampler, 0).err(),
            Some(SampleError::Overflow)
        );
    }

    #[test]
    fn widest_valid_range_has_no_overflow() {
        let mut sampler = FixedSampler::new(vec![0.7]);
        let interval = Interval::new(0, i64::MAX - 1, '[', ')');
        let histogram = Histogram::collect(&interval, &mut sampler, 0).unwrap();
        assert_eq!(histogram.bins(), i64::MAX as u64);
    }

    #[test]
    fn invalid_interval_propagates() {
        let mut sampler = FixedSampler::new(vec![0.7]);
        let interval = Interval::new(5, 1, '[', ']');
        assert!(Histogram::collect(&interval, &mut sampler, 5).is_err());
    }
}
