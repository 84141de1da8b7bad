//! Derived list views: search filtering, ordering and day grouping.
//!
//! Screens keep their records in a repository and ask this module for the
//! view to render. Nothing here mutates the source records.

pub mod filter;
pub mod group;
pub mod sort;

pub use filter::{filter_by, filter_records, has_status, matches_query};
pub use group::{group_by_day, Bucket, DayBucket};
pub use sort::{sort_campaign_leads, sort_notes, SortDirection, SortedView};
