//! Calendar-day grouping for notes, notifications and activity feeds.
//!
//! Records are bucketed by the local calendar day of their timestamp, compared
//! against a reference day. Two timestamps a couple of minutes apart on either
//! side of midnight land in different buckets.

use chrono::NaiveDate;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;

use crate::utils::datetime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayBucket {
    Today,
    Yesterday,
    /// Any other calendar day, past or future
    Day(NaiveDate),
    /// Timestamp missing or unparseable
    Undated,
}

impl DayBucket {
    /// Bucket for a record on `day`, seen from `today`.
    pub fn classify(day: Option<NaiveDate>, today: NaiveDate) -> Self {
        match day {
            None => DayBucket::Undated,
            Some(day) => match datetime::days_before(day, today) {
                0 => DayBucket::Today,
                1 => DayBucket::Yesterday,
                _ => DayBucket::Day(day),
            },
        }
    }

    /// Header text, rendering literal dates with `date_format`.
    pub fn label(&self, date_format: &str) -> String {
        match self {
            DayBucket::Today => "Today".to_string(),
            DayBucket::Yesterday => "Yesterday".to_string(),
            DayBucket::Day(day) => day.format(date_format).to_string(),
            DayBucket::Undated => "Undated".to_string(),
        }
    }
}

impl fmt::Display for DayBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(datetime::ISO_DATE_FORMAT))
    }
}

/// Named group of records sharing a calendar day.
#[derive(Debug)]
pub struct Bucket<'a, T> {
    pub key: DayBucket,
    pub records: Vec<&'a T>,
}

impl<T> Bucket<'_, T> {
    pub fn label(&self) -> String {
        self.key.to_string()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Partition `records` into day buckets relative to `today`.
///
/// Buckets come most recent day first, with `Undated` last. Inside a bucket
/// records keep their input order. Empty buckets are never produced.
pub fn group_by_day<'a, T, F>(records: &'a [T], timestamp: F, today: NaiveDate) -> Vec<Bucket<'a, T>>
where
    F: Fn(&T) -> &str,
{
    let mut dated: BTreeMap<Reverse<NaiveDate>, Vec<&'a T>> = BTreeMap::new();
    let mut undated = Vec::new();

    for record in records {
        match datetime::local_day(timestamp(record)) {
            Some(day) => dated.entry(Reverse(day)).or_default().push(record),
            None => undated.push(record),
        }
    }

    let mut buckets: Vec<Bucket<'a, T>> = dated
        .into_iter()
        .map(|(Reverse(day), records)| Bucket {
            key: DayBucket::classify(Some(day), today),
            records,
        })
        .collect();

    if !undated.is_empty() {
        buckets.push(Bucket {
            key: DayBucket::Undated,
            records: undated,
        });
    }

    buckets
}

/// [`group_by_day`] against the current local day.
pub fn group_by_day_now<'a, T, F>(records: &'a [T], timestamp: F) -> Vec<Bucket<'a, T>>
where
    F: Fn(&T) -> &str,
{
    group_by_day(records, timestamp, datetime::today())
}
