//! Dashboard figures derived from record lists.

use crate::entities::{HasStatus, Lead};
use crate::status::{LeadStatus, StatusMachine};

/// `part` as a percentage of `whole`, rounded to one decimal place.
///
/// An empty whole gives 0 rather than NaN.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let raw = part as f64 * 100.0 / whole as f64;
    (raw * 10.0).round() / 10.0
}

/// Share of leads that reached `Converted`.
pub fn conversion_rate(leads: &[Lead]) -> f64 {
    let converted = leads
        .iter()
        .filter(|lead| lead.status == LeadStatus::Converted)
        .count();
    percentage(converted, leads.len())
}

/// One row of a status breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusCount<S> {
    pub status: S,
    pub count: usize,
    pub percent: f64,
}

/// Count records per status, listing every status in declaration order
/// (zero counts included).
pub fn status_breakdown<T: HasStatus>(records: &[T]) -> Vec<StatusCount<T::Status>> {
    T::Status::all()
        .iter()
        .map(|&status| {
            let count = records.iter().filter(|record| record.status() == status).count();
            StatusCount {
                status,
                count,
                percent: percentage(count, records.len()),
            }
        })
        .collect()
}

/// Progress towards a numeric target (e.g. monthly closed deal value), capped at 100.
pub fn target_progress(achieved: f64, target: f64) -> f64 {
    if target <= 0.0 || !achieved.is_finite() {
        return 0.0;
    }
    let raw = (achieved / target * 100.0).clamp(0.0, 100.0);
    (raw * 10.0).round() / 10.0
}
