use realty_crm::entities::{Deal, DealPatch, NewDeal, RecordId};
use realty_crm::repositories::{DealStore, RepositoryError};
use realty_crm::status::DealStage;

fn new_deal(title: &str) -> NewDeal {
    NewDeal {
        title: title.to_string(),
        client_name: "Anita Rao".to_string(),
        amount: 7_500_000.0,
        ..Default::default()
    }
}

#[test]
fn test_add_deal_assigns_unique_ids() {
    let mut store = DealStore::new();
    let first = store.add_deal(new_deal("Flat 4B")).unwrap().id.clone();
    let second = store.add_deal(new_deal("Flat 5C")).unwrap().id.clone();

    assert_ne!(first, second);
    assert_eq!(store.deals().len(), 2);
    assert_eq!(store.get(&first).unwrap().stage, DealStage::Negotiation);
}

#[test]
fn test_update_deal_applies_only_given_fields() {
    let mut store = DealStore::new();
    let id = store.add_deal(new_deal("Flat 4B")).unwrap().id.clone();

    let updated = store
        .update_deal(
            &id,
            DealPatch {
                amount: Some(7_200_000.0),
                stage: Some(DealStage::Agreement),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.title, "Flat 4B");
    assert_eq!(updated.client_name, "Anita Rao");
    assert_eq!(updated.amount, 7_200_000.0);
    assert_eq!(updated.stage, DealStage::Agreement);
}

#[test]
fn test_invalid_stage_change_rejects_whole_patch() {
    let mut store = DealStore::new();
    let id = store.add_deal(new_deal("Flat 4B")).unwrap().id.clone();

    let err = store
        .update_deal(
            &id,
            DealPatch {
                title: Some("Renamed".to_string()),
                stage: Some(DealStage::Closed),
                ..Default::default()
            },
        )
        .unwrap_err();

    assert!(matches!(err, RepositoryError::Transition(_)));
    let deal = store.get(&id).unwrap();
    assert_eq!(deal.title, "Flat 4B");
    assert_eq!(deal.stage, DealStage::Negotiation);
}

#[test]
fn test_selection_follows_deletes() {
    let mut store = DealStore::new();
    let id = store.add_deal(new_deal("Flat 4B")).unwrap().id.clone();
    let other = store.add_deal(new_deal("Villa 2")).unwrap().id.clone();

    store.set_selected_deal(Some(id.clone())).unwrap();
    assert_eq!(store.selected_deal().unwrap().title, "Flat 4B");

    store.delete_deal(&other).unwrap();
    assert!(store.selected_deal().is_some());

    store.delete_deal(&id).unwrap();
    assert!(store.selected_deal().is_none());
    assert!(store.deals().is_empty());
}

#[test]
fn test_selecting_unknown_deal_fails() {
    let mut store = DealStore::with_deals(vec![Deal {
        id: RecordId::Number(1),
        title: "Shop".to_string(),
        client_name: String::new(),
        property: None,
        amount: 0.0,
        stage: DealStage::Negotiation,
        closing_date: None,
    }]);

    assert_eq!(
        store.set_selected_deal(Some(RecordId::Number(2))),
        Err(RepositoryError::NotFound(RecordId::Number(2)))
    );
    assert!(store.set_selected_deal(None).is_ok());
    assert!(store.delete_deal(&RecordId::Number(2)).is_err());
}
