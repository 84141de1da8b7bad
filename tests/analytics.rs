use realty_crm::analytics::{conversion_rate, percentage, status_breakdown, target_progress};
use realty_crm::entities::{Lead, PropertyListing};
use realty_crm::status::{LeadStatus, PropertyStatus};

#[test]
fn test_percentage() {
    assert_eq!(percentage(1, 3), 33.3);
    assert_eq!(percentage(2, 3), 66.7);
    assert_eq!(percentage(5, 5), 100.0);
    assert_eq!(percentage(0, 0), 0.0);
}

#[test]
fn test_conversion_rate() {
    let mut leads = vec![
        Lead::new("1", "A", ""),
        Lead::new("2", "B", ""),
        Lead::new("3", "C", ""),
        Lead::new("4", "D", ""),
    ];
    assert_eq!(conversion_rate(&leads), 0.0);
    leads[2].status = LeadStatus::Converted;
    assert_eq!(conversion_rate(&leads), 25.0);
    assert_eq!(conversion_rate(&[]), 0.0);
}

#[test]
fn test_status_breakdown_lists_every_status() {
    let mut listings = vec![
        PropertyListing::new("1", "A"),
        PropertyListing::new("2", "B"),
        PropertyListing::new("3", "C"),
        PropertyListing::new("4", "D"),
    ];
    listings[0].status = PropertyStatus::Published;
    listings[1].status = PropertyStatus::Published;
    listings[2].status = PropertyStatus::Published;

    let breakdown = status_breakdown(&listings);
    let rows: Vec<(PropertyStatus, usize, f64)> =
        breakdown.iter().map(|row| (row.status, row.count, row.percent)).collect();
    assert_eq!(
        rows,
        vec![
            (PropertyStatus::Pending, 1, 25.0),
            (PropertyStatus::Published, 3, 75.0),
            (PropertyStatus::Rejected, 0, 0.0),
        ]
    );
}

#[test]
fn test_target_progress_is_capped() {
    assert_eq!(target_progress(50.0, 200.0), 25.0);
    assert_eq!(target_progress(300.0, 200.0), 100.0);
    assert_eq!(target_progress(10.0, 0.0), 0.0);
}
