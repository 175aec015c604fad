use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashSet;
use thiserror::Error;

use crate::types::{DailyAggregate, ForecastSeries, WeatherSample};

/// Aggregation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AggregateError {
    /// A sample did not carry the requested metric
    #[error("metric '{metric}' missing from sample at {timestamp}")]
    MissingMetric {
        metric: String,
        timestamp: DateTime<Utc>,
    },
}

/// Reduce time-ordered samples to per-day minimum and maximum of `metric`.
///
/// Samples are walked once. A date seen for the first time opens a new
/// aggregate; every value is folded into the most recently opened aggregate.
/// Same-date samples are expected to be contiguous, which the provider's
/// time ordering guarantees. A date that shows up again after another date
/// does not open a second aggregate.
pub fn aggregate(samples: &[WeatherSample], metric: &str) -> Result<ForecastSeries, AggregateError> {
    let mut series = ForecastSeries::new();
    let mut seen: HashSet<NaiveDate> = HashSet::new();

    for sample in samples {
        let value = sample
            .metric(metric)
            .ok_or_else(|| AggregateError::MissingMetric {
                metric: metric.to_string(),
                timestamp: sample.timestamp,
            })?;

        let date = sample.date();
        if seen.insert(date) {
            series.push(DailyAggregate::new(date));
        }
        if let Some(day) = series.last_mut() {
            day.observe(value);
        }
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn sample(day: u32, hour: u32, temp: f64) -> WeatherSample {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap();
        WeatherSample::new(timestamp, HashMap::from([("temp".to_string(), temp)]))
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_two_day_scenario() {
        let samples = vec![
            sample(15, 0, 10.0),
            sample(15, 3, 15.0),
            sample(15, 6, 5.0),
            sample(16, 0, 20.0),
            sample(16, 3, 18.0),
        ];

        let series = aggregate(&samples, "temp").unwrap();
        assert_eq!(
            series.as_slice(),
            &[
                DailyAggregate {
                    date: date(15),
                    min: Some(5.0),
                    max: Some(15.0)
                },
                DailyAggregate {
                    date: date(16),
                    min: Some(18.0),
                    max: Some(20.0)
                },
            ]
        );
    }

    #[test]
    fn test_empty_samples() {
        let series = aggregate(&[], "temp").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_single_sample() {
        let series = aggregate(&[sample(15, 12, -3.5)], "temp").unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.mins(), vec![Some(-3.5)]);
        assert_eq!(series.maxes(), vec![Some(-3.5)]);
    }

    #[test]
    fn test_zero_is_a_real_value() {
        let samples = vec![sample(15, 0, 0.0), sample(15, 3, 4.0), sample(15, 6, -0.0)];

        let series = aggregate(&samples, "temp").unwrap();
        assert_eq!(series.mins(), vec![Some(0.0)]);
        assert_eq!(series.maxes(), vec![Some(4.0)]);
    }

    #[test]
    fn test_missing_metric() {
        let mut samples = vec![sample(15, 0, 10.0), sample(15, 3, 12.0)];
        samples[1].metrics.clear();

        let err = aggregate(&samples, "temp").unwrap_err();
        assert_eq!(
            err,
            AggregateError::MissingMetric {
                metric: "temp".to_string(),
                timestamp: samples[1].timestamp,
            }
        );
    }

    #[test]
    fn test_unknown_metric_fails_on_first_sample() {
        let samples = vec![sample(15, 0, 10.0)];
        assert!(matches!(
            aggregate(&samples, "humidity"),
            Err(AggregateError::MissingMetric { .. })
        ));
    }

    #[test]
    fn test_dates_in_first_appearance_order() {
        let samples: Vec<_> = (15..20)
            .flat_map(|day| (0..24).step_by(3).map(move |hour| sample(day, hour, hour as f64)))
            .collect();

        let series = aggregate(&samples, "temp").unwrap();
        assert_eq!(series.dates(), (15..20).map(date).collect::<Vec<_>>());
        for day in &series {
            assert_eq!(day.min, Some(0.0));
            assert_eq!(day.max, Some(21.0));
        }
    }

    #[test]
    fn test_repeated_calls_match() {
        let samples = vec![sample(15, 0, 1.0), sample(16, 0, 2.0), sample(16, 3, 3.0)];
        assert_eq!(aggregate(&samples, "temp"), aggregate(&samples, "temp"));
    }

    #[test]
    fn test_non_contiguous_date_folds_into_last_day() {
        // Provider order guarantees contiguous dates; when that breaks, the
        // stray sample lands in the most recent day instead of its own.
        let samples = vec![
            sample(15, 0, 10.0),
            sample(16, 0, 20.0),
            sample(15, 3, 30.0),
            sample(16, 3, 1.0),
        ];

        let series = aggregate(&samples, "temp").unwrap();
        assert_eq!(series.dates(), vec![date(15), date(16)]);
        assert_eq!(series.mins(), vec![Some(10.0), Some(1.0)]);
        assert_eq!(series.maxes(), vec![Some(10.0), Some(30.0)]);
    }
}
