//! Free-text search and tab predicates.

use crate::entities::{HasStatus, Record};

/// Does `record` match the search `query`?
///
/// Case-folded substring match against the record's searchable fields. A
/// blank query matches everything; any other query is matched as typed,
/// surrounding spaces included.
pub fn matches_query<T: Record + ?Sized>(record: &T, query: &str) -> bool {
    query.trim().is_empty() || contains_folded(record, &query.to_lowercase())
}

/// Records whose searchable fields contain `query`, in input order.
pub fn filter_records<'a, T: Record>(records: &'a [T], query: &str) -> Vec<&'a T> {
    if query.trim().is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| contains_folded(*record, &needle))
        .collect()
}

fn contains_folded<T: Record + ?Sized>(record: &T, needle: &str) -> bool {
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Records accepted by an arbitrary predicate, in input order.
pub fn filter_by<'a, T, P>(records: &'a [T], predicate: P) -> Vec<&'a T>
where
    P: Fn(&T) -> bool,
{
    records.iter().filter(|record| predicate(record)).collect()
}

/// Predicate for a status tab; `None` is the "All" tab.
pub fn has_status<T: HasStatus>(status: Option<T::Status>) -> impl Fn(&T) -> bool {
    move |record: &T| status.map_or(true, |wanted| record.status() == wanted)
}
