use realty_crm::backend::normalize::{extract_list, normalize_users, normalize_users_body};
use realty_crm::entities::{RecordId, PLACEHOLDER};
use realty_crm::status::UserStatus;
use serde_json::json;

#[test]
fn test_bare_array() {
    let users = normalize_users(&json!([
        {"id": 1, "fullName": "Asha", "email": "asha@example.com", "status": "Active"},
        {"id": "2", "fullName": "Ben"}
    ]));

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, RecordId::Number(1));
    assert_eq!(users[0].status, UserStatus::Active);
    assert_eq!(users[1].id, RecordId::Text("2".to_string()));
    assert_eq!(users[1].status, UserStatus::Pending);
}

#[test]
fn test_wrapped_lists() {
    for key in ["data", "users", "results"] {
        let payload = json!({ key: [{"id": 7, "name": "Kiran"}], "count": 1 });
        let users = normalize_users(&payload);
        assert_eq!(users.len(), 1, "wrapper key {}", key);
        assert_eq!(users[0].full_name, "Kiran");
    }
}

#[test]
fn test_missing_fields_get_placeholders() {
    let users = normalize_users(&json!([{"id": 3}]));
    let user = &users[0];
    assert_eq!(user.full_name, PLACEHOLDER);
    assert_eq!(user.email, PLACEHOLDER);
    assert_eq!(user.phone, PLACEHOLDER);
    assert_eq!(user.role, PLACEHOLDER);
    assert_eq!(user.joined_on, None);
}

#[test]
fn test_name_fallback_chain() {
    let users = normalize_users(&json!([
        {"id": 1, "full_name": "Snake Case"},
        {"id": 2, "username": "handle", "phone_number": 9876543210_i64, "user_type": "Telecaller"}
    ]));
    assert_eq!(users[0].full_name, "Snake Case");
    assert_eq!(users[1].full_name, "handle");
    assert_eq!(users[1].phone, "9876543210");
    assert_eq!(users[1].role, "Telecaller");
}

#[test]
fn test_malformed_payloads_become_empty() {
    assert!(normalize_users(&json!({"detail": "ok"})).is_empty());
    assert!(normalize_users(&json!("nope")).is_empty());
    assert!(normalize_users(&json!(null)).is_empty());
    assert!(normalize_users_body("<html>502 Bad Gateway</html>").is_empty());
    assert!(extract_list(&json!({"data": {"users": []}})).is_none());
}

#[test]
fn test_entries_without_id_are_skipped() {
    let users = normalize_users(&json!([
        {"fullName": "No id"},
        "not an object",
        {"id": 5, "fullName": "Kept", "status": "archived"}
    ]));
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].full_name, "Kept");
    assert_eq!(users[0].status, UserStatus::Pending);
}
