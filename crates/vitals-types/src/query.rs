//! Query parameters for dated sample lists.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime, Time};

use crate::types::{MetricType, Reading};

/// Maximum number of samples returned by a "today" query.
pub const TODAY_SAMPLE_LIMIT: usize = 10;

/// Half-open time window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateRange {
    /// Inclusive start.
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub start: OffsetDateTime,
    /// Exclusive end.
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub end: OffsetDateTime,
}

impl DateRange {
    /// Create a range from explicit bounds.
    #[must_use]
    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        Self { start, end }
    }

    /// The calendar day containing `now`, in `now`'s own offset.
    ///
    /// Runs from local midnight to the next local midnight.
    ///
    /// ```
    /// use time::macros::datetime;
    /// use vitals_types::DateRange;
    ///
    /// let day = DateRange::day_containing(datetime!(2026-10-17 15:42 +02:00));
    /// assert_eq!(day.start, datetime!(2026-10-17 00:00 +02:00));
    /// assert_eq!(day.end, datetime!(2026-10-18 00:00 +02:00));
    /// ```
    #[must_use]
    pub fn day_containing(now: OffsetDateTime) -> Self {
        let start = now.replace_time(Time::MIDNIGHT);
        Self {
            start,
            end: start + Duration::days(1),
        }
    }

    /// Whether `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: OffsetDateTime) -> bool {
        self.start <= date && date < self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

/// Ordering applied to a sample list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortOrder {
    /// Whatever order the store returns.
    #[default]
    Unspecified,
    /// Most recent end date first.
    EndDateDescending,
}

/// Parameters of a dated sample-list query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleQuery {
    /// Metric to query.
    pub metric: MetricType,
    /// Optional time window filter.
    pub range: Option<DateRange>,
    /// Result ordering.
    pub sort: SortOrder,
    /// Optional maximum number of results.
    pub limit: Option<usize>,
}

impl SampleQuery {
    /// Unfiltered, unordered, unlimited query for `metric`.
    #[must_use]
    pub fn new(metric: MetricType) -> Self {
        Self {
            metric,
            range: None,
            sort: SortOrder::Unspecified,
            limit: None,
        }
    }

    /// Query for the samples of a single day, newest first, capped at
    /// [`TODAY_SAMPLE_LIMIT`].
    #[must_use]
    pub fn today(metric: MetricType, day: DateRange) -> Self {
        Self::new(metric)
            .range(day)
            .sort(SortOrder::EndDateDescending)
            .limit(TODAY_SAMPLE_LIMIT)
    }

    /// Restrict to a time window.
    #[must_use]
    pub fn range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the ordering.
    #[must_use]
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Cap the number of results.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Evaluate this query against an in-memory sample list.
    ///
    /// Filters by range, sorts (stable), then truncates to the limit.
    #[must_use]
    pub fn apply(&self, samples: &[Reading]) -> Vec<Reading> {
        let mut matched: Vec<Reading> = samples
            .iter()
            .filter(|reading| self.range.is_none_or(|range| range.contains(reading.date)))
            .copied()
            .collect();

        if self.sort == SortOrder::EndDateDescending {
            matched.sort_by(|a, b| b.date.cmp(&a.date));
        }
        if let Some(limit) = self.limit {
            matched.truncate(limit);
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use time::macros::datetime;

    fn day() -> DateRange {
        DateRange::day_containing(datetime!(2026-10-17 12:00 +02:00))
    }

    #[test]
    fn test_day_bounds_are_half_open() {
        let day = day();
        assert!(day.contains(datetime!(2026-10-17 00:00 +02:00)));
        assert!(day.contains(datetime!(2026-10-17 23:59:59 +02:00)));
        assert!(!day.contains(datetime!(2026-10-18 00:00 +02:00)));
        assert!(!day.contains(datetime!(2026-10-16 23:59:59 +02:00)));
    }

    #[test]
    fn test_day_uses_the_offset_of_now() {
        // 23:30 UTC on the 16th is already the 17th at +02:00.
        let utc = DateRange::day_containing(datetime!(2026-10-16 23:30 UTC));
        let local = DateRange::day_containing(datetime!(2026-10-17 01:30 +02:00));
        assert_eq!(utc.start, datetime!(2026-10-16 00:00 UTC));
        assert_eq!(local.start, datetime!(2026-10-17 00:00 +02:00));
    }

    #[test]
    fn test_today_query_defaults() {
        let query = SampleQuery::today(MetricType::HeartRate, day());
        assert_eq!(query.limit, Some(TODAY_SAMPLE_LIMIT));
        assert_eq!(query.sort, SortOrder::EndDateDescending);
        assert_eq!(query.range, Some(day()));
    }

    #[test]
    fn test_apply_filters_sorts_and_limits() {
        let samples = vec![
            Reading::new(60.0, datetime!(2026-10-17 08:00 +02:00)),
            Reading::new(99.0, datetime!(2026-10-16 22:00 +02:00)),
            Reading::new(75.0, datetime!(2026-10-17 11:00 +02:00)),
            Reading::new(68.0, datetime!(2026-10-17 09:15 +02:00)),
        ];

        let result = SampleQuery::today(MetricType::HeartRate, day())
            .limit(2)
            .apply(&samples);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].value, 75.0);
        assert_eq!(result[1].value, 68.0);
    }

    #[test]
    fn test_apply_unspecified_keeps_store_order() {
        let samples = vec![
            Reading::new(1.0, datetime!(2026-10-10 08:00 UTC)),
            Reading::new(2.0, datetime!(2026-10-12 08:00 UTC)),
        ];
        let result = SampleQuery::new(MetricType::Height).limit(1).apply(&samples);
        assert_eq!(result, vec![samples[0]]);
    }

    #[test]
    fn test_apply_empty() {
        assert!(SampleQuery::today(MetricType::HeartRate, day()).apply(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_descending_query_first_is_most_recent(
            offsets in proptest::collection::vec(0i64..86_400, 1..40)
        ) {
            let start = day().start;
            let samples: Vec<Reading> = offsets
                .iter()
                .map(|secs| Reading::new(*secs as f64, start + Duration::seconds(*secs)))
                .collect();

            let result = SampleQuery::today(MetricType::HeartRate, day()).apply(&samples);
            let newest = samples.iter().map(|r| r.date).max().unwrap();

            prop_assert!(result.len() <= TODAY_SAMPLE_LIMIT);
            prop_assert_eq!(result[0].date, newest);
            prop_assert!(result.windows(2).all(|w| w[0].date >= w[1].date));
        }
    }
}
