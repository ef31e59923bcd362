//! Descriptive statistics over a non-empty sample of vote values.
//!
//! # Numeric contract
//!
//! - A [`VoteSample`] can only be built from at least one value, so every
//!   function below is total. Empty input is reported once, at construction,
//!   as [`StatisticsError::EmptySample`].
//! - Population functions divide by `N`, sample functions by `N - 1`.
//! - With a single value the sample variance (and therefore the sample
//!   standard deviation) is `NaN`. There is no spread to estimate from one
//!   observation and no finite value would be truthful.
//! - The median of an even-length sample is the mean of the two middle values.

use super::StatisticsError;

/// A non-empty sequence of vote values, kept in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteSample {
    values: Vec<f64>,
}

impl VoteSample {
    /// Creates a sample, rejecting empty input.
    pub fn new(values: Vec<f64>) -> Result<Self, StatisticsError> {
        if values.is_empty() {
            return Err(StatisticsError::EmptySample);
        }
        Ok(Self { values })
    }

    /// Creates a sample from integer vote weights.
    pub fn from_votes<I>(votes: I) -> Result<Self, StatisticsError>
    where
        I: IntoIterator<Item = i32>,
    {
        Self::new(votes.into_iter().map(f64::from).collect())
    }

    /// Number of values in the sample.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Arithmetic mean: sum divided by count.
    pub fn mean(&self) -> f64 {
        self.sum() / self.len() as f64
    }

    pub fn median(&self) -> f64 {
        median_of(self.values.clone())
    }

    /// Variance with denominator `N`.
    pub fn population_variance(&self) -> f64 {
        self.sum_of_squared_deviations() / self.len() as f64
    }

    /// Variance with denominator `N - 1`; `NaN` for a single value.
    pub fn sample_variance(&self) -> f64 {
        if self.len() < 2 {
            return f64::NAN;
        }
        self.sum_of_squared_deviations() / (self.len() - 1) as f64
    }

    /// Median of the absolute deviations from the sample median.
    pub fn median_absolute_deviation_population(&self) -> f64 {
        let median = self.median();
        median_of(self.values.iter().map(|v| (v - median).abs()).collect())
    }

    pub fn standard_deviation_population(&self) -> f64 {
        self.population_variance().sqrt()
    }

    /// Square root of the sample variance; `NaN` for a single value.
    pub fn standard_deviation_sample(&self) -> f64 {
        self.sample_variance().sqrt()
    }

    /// Computes every metric in one pass over the API.
    pub fn summarize(&self) -> SampleSummary {
        SampleSummary {
            min: self.min(),
            max: self.max(),
            mean: self.mean(),
            median: self.median(),
            population_variance: self.population_variance(),
            sample_variance: self.sample_variance(),
            median_absolute_deviation_population: self.median_absolute_deviation_population(),
            standard_deviation_population: self.standard_deviation_population(),
            standard_deviation_sample: self.standard_deviation_sample(),
        }
    }

    fn sum_of_squared_deviations(&self) -> f64 {
        let mean = self.mean();
        self.values.iter().map(|v| (v - mean).powi(2)).sum()
    }
}

/// Central tendency and dispersion of a [`VoteSample`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub population_variance: f64,
    pub sample_variance: f64,
    pub median_absolute_deviation_population: f64,
    pub standard_deviation_population: f64,
    pub standard_deviation_sample: f64,
}

fn median_of(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn sample(values: &[i32]) -> VoteSample {
        VoteSample::from_votes(values.iter().copied()).unwrap()
    }

    #[test]
    fn empty_sample_is_rejected() {
        assert_eq!(VoteSample::new(vec![]), Err(StatisticsError::EmptySample));
        assert_eq!(
            VoteSample::from_votes(Vec::<i32>::new()),
            Err(StatisticsError::EmptySample)
        );
    }

    #[test]
    fn summary_of_three_votes() {
        let s = sample(&[5, 20, 15]).summarize();

        assert_eq!(s.min, 5.0);
        assert_eq!(s.max, 20.0);
        assert!((s.mean - 40.0 / 3.0).abs() < EPSILON);
        assert_eq!(s.median, 15.0);
        assert!((s.population_variance - 350.0 / 9.0).abs() < EPSILON);
        assert!((s.sample_variance - 175.0 / 3.0).abs() < EPSILON);
        assert_eq!(s.median_absolute_deviation_population, 5.0);
        assert!((s.standard_deviation_population - (350.0f64 / 9.0).sqrt()).abs() < EPSILON);
        assert!((s.standard_deviation_sample - (175.0f64 / 3.0).sqrt()).abs() < EPSILON);
    }

    #[test]
    fn median_of_even_count_averages_middle_values() {
        assert_eq!(sample(&[4, 1, 3, 2]).median(), 2.5);
    }

    #[test]
    fn median_ignores_input_order() {
        assert_eq!(sample(&[9, 1, 5]).median(), 5.0);
    }

    #[test]
    fn median_absolute_deviation_of_even_sample() {
        // median 2.5, deviations [1.5, 0.5, 0.5, 1.5]
        assert_eq!(sample(&[1, 2, 3, 4]).median_absolute_deviation_population(), 1.0);
    }

    #[test]
    fn single_value_has_zero_population_spread() {
        let s = sample(&[7]).summarize();
        assert_eq!(s.min, 7.0);
        assert_eq!(s.max, 7.0);
        assert_eq!(s.mean, 7.0);
        assert_eq!(s.median, 7.0);
        assert_eq!(s.population_variance, 0.0);
        assert_eq!(s.standard_deviation_population, 0.0);
        assert_eq!(s.median_absolute_deviation_population, 0.0);
    }

    #[test]
    fn single_value_sample_variance_is_nan() {
        let s = sample(&[7]);
        assert!(s.sample_variance().is_nan());
        assert!(s.standard_deviation_sample().is_nan());
    }

    #[test]
    fn negative_votes_are_supported() {
        let s = sample(&[-10, 0, 10]);
        assert_eq!(s.min(), -10.0);
        assert_eq!(s.mean(), 0.0);
        assert!((s.population_variance() - 200.0 / 3.0).abs() < EPSILON);
    }

    proptest! {
        #[test]
        fn mean_and_median_lie_between_min_and_max(
            votes in prop::collection::vec(-1000i32..1000, 1..50)
        ) {
            let s = sample(&votes).summarize();
            prop_assert!(s.min <= s.mean + EPSILON && s.mean <= s.max + EPSILON);
            prop_assert!(s.min <= s.median && s.median <= s.max);
        }

        #[test]
        fn sample_variance_scales_population_variance(
            votes in prop::collection::vec(-1000i32..1000, 2..50)
        ) {
            let s = sample(&votes);
            let n = votes.len() as f64;
            let expected = s.population_variance() * n / (n - 1.0);
            prop_assert!((s.sample_variance() - expected).abs() < 1e-6);
        }

        #[test]
        fn summary_ignores_input_order(
            votes in prop::collection::vec(-1000i32..1000, 1..50)
        ) {
            let mut reversed = votes.clone();
            reversed.reverse();
            let a = sample(&votes).summarize();
            let b = sample(&reversed).summarize();
            prop_assert_eq!(a.min, b.min);
            prop_assert_eq!(a.max, b.max);
            prop_assert_eq!(a.median, b.median);
            prop_assert!((a.population_variance - b.population_variance).abs() < 1e-6);
        }

        #[test]
        fn dispersion_is_never_negative(
            votes in prop::collection::vec(-1000i32..1000, 1..50)
        ) {
            let s = sample(&votes).summarize();
            prop_assert!(s.population_variance >= 0.0);
            prop_assert!(s.standard_deviation_population >= 0.0);
            prop_assert!(s.median_absolute_deviation_population >= 0.0);
        }
    }
}
