//! Ordering rules for list screens.
//!
//! Every sort here is stable: records that compare equal keep their relative
//! input order in both directions. Descending order reverses the comparator,
//! never the vector, so ties are not flipped.

use chrono::{DateTime, Local};
use std::cmp::Ordering;

use crate::entities::{CampaignLead, Note};
use crate::utils::datetime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Stable sort by a numeric field in the given direction.
///
/// NaN values compare greater than every number (`f64::total_cmp`).
pub fn sort_by_number<T, F>(records: &mut [T], direction: SortDirection, key: F)
where
    F: Fn(&T) -> f64,
{
    records.sort_by(|a, b| direction.apply(key(a).total_cmp(&key(b))));
}

/// Stable sort by a timestamp string in the given direction.
///
/// Timestamps are read in local time; records whose timestamp does not parse
/// go last regardless of direction.
pub fn sort_by_timestamp<T, F>(records: &mut [T], direction: SortDirection, timestamp: F)
where
    F: Fn(&T) -> &str,
{
    records.sort_by_cached_key(|record| SortKey(datetime::parse_timestamp(timestamp(record)), direction));
}

/// Campaign screen: ascending/descending budget toggle.
pub fn sort_campaign_leads(leads: &mut [CampaignLead], direction: SortDirection) {
    sort_by_number(leads, direction, |lead| lead.budget);
}

/// Notes screen: pinned first, then newest first, then title A-Z.
pub fn compare_notes(a: &Note, b: &Note) -> Ordering {
    b.pinned
        .cmp(&a.pinned)
        .then_with(|| {
            compare_optional_times(
                datetime::parse_timestamp(&a.created_at),
                datetime::parse_timestamp(&b.created_at),
                SortDirection::Descending,
            )
        })
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
}

pub fn sort_notes(notes: &mut [Note]) {
    notes.sort_by(compare_notes);
}

fn compare_optional_times(
    a: Option<DateTime<Local>>,
    b: Option<DateTime<Local>>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(PartialEq, Eq)]
struct SortKey(Option<DateTime<Local>>, SortDirection);

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_optional_times(self.0, other.0, self.1)
    }
}

/// A list together with the user's current sort toggle.
///
/// The source order is never modified; `records()` derives the ordered view on
/// demand, and clearing the sort gives the original sequence back.
pub struct SortedView<T> {
    records: Vec<T>,
    direction: Option<SortDirection>,
    compare: fn(&T, &T) -> Ordering,
}

impl<T> SortedView<T> {
    /// `compare` defines the ascending order.
    pub fn new(records: Vec<T>, compare: fn(&T, &T) -> Ordering) -> Self {
        Self {
            records,
            direction: None,
            compare,
        }
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Option<SortDirection>) {
        self.direction = direction;
    }

    /// Unsorted -> ascending, then flip between ascending and descending.
    pub fn toggle(&mut self) -> SortDirection {
        let next = self.direction.map_or(SortDirection::Ascending, SortDirection::toggle);
        self.direction = Some(next);
        next
    }

    pub fn clear(&mut self) {
        self.direction = None;
    }

    /// Records in display order
    pub fn records(&self) -> Vec<&T> {
        let mut view: Vec<&T> = self.records.iter().collect();
        if let Some(direction) = self.direction {
            let compare = self.compare;
            view.sort_by(|a, b| direction.apply(compare(a, b)));
        }
        view
    }

    /// Records in source order
    pub fn source(&self) -> &[T] {
        &self.records
    }

    pub fn into_inner(self) -> Vec<T> {
        self.records
    }
}
