//! Defensive decoding of user-list payloads.
//!
//! The user endpoint has answered with a bare array as well as with the list
//! wrapped under `data`, `users` or `results`. Individual users are just as
//! loose about field names. Everything is mapped into [`AdminUser`] here, once,
//! with placeholders for whatever is missing.

use serde_json::{Map, Value};

use crate::entities::{placeholder, AdminUser, RecordId};
use crate::status::{StatusMachine, UserStatus};

/// Keys that may wrap the user array
const LIST_KEYS: [&str; 3] = ["data", "users", "results"];

const NAME_KEYS: [&str; 4] = ["fullName", "full_name", "name", "username"];
const EMAIL_KEYS: [&str; 1] = ["email"];
const PHONE_KEYS: [&str; 3] = ["phone", "phone_number", "mobile"];
const ROLE_KEYS: [&str; 2] = ["role", "user_type"];
const JOINED_KEYS: [&str; 3] = ["joinedOn", "date_joined", "created_at"];

/// Locate the user array inside a payload.
pub fn extract_list(payload: &Value) -> Option<&Vec<Value>> {
    match payload {
        Value::Array(items) => Some(items),
        Value::Object(map) => LIST_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array)),
        _ => None,
    }
}

/// Decode every user in `payload`.
///
/// Unrecognised payload shapes produce an empty list. Entries without a
/// usable id are skipped.
pub fn normalize_users(payload: &Value) -> Vec<AdminUser> {
    let Some(items) = extract_list(payload) else {
        log::warn!("Unexpected user list payload shape, falling back to empty list");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let user = item.as_object().and_then(user_from_object);
            if user.is_none() {
                log::warn!("Skipping malformed user entry: {}", item);
            }
            user
        })
        .collect()
}

/// Decode a raw response body; invalid JSON is treated like an empty list.
pub fn normalize_users_body(body: &str) -> Vec<AdminUser> {
    match serde_json::from_str::<Value>(body) {
        Ok(payload) => normalize_users(&payload),
        Err(e) => {
            log::warn!("User list response is not valid JSON: {}", e);
            Vec::new()
        }
    }
}

fn user_from_object(map: &Map<String, Value>) -> Option<AdminUser> {
    let id = record_id(map.get("id").or_else(|| map.get("user_id"))?)?;

    let status = match text(map, &["status"]) {
        Some(raw) => UserStatus::parse_label(&raw).unwrap_or_else(|e| {
            log::warn!("User {}: {}, using '{}'", id, e, UserStatus::default());
            UserStatus::default()
        }),
        None => UserStatus::default(),
    };

    Some(AdminUser {
        full_name: text(map, &NAME_KEYS).unwrap_or_else(placeholder),
        email: text(map, &EMAIL_KEYS).unwrap_or_else(placeholder),
        phone: text(map, &PHONE_KEYS).unwrap_or_else(placeholder),
        role: text(map, &ROLE_KEYS).unwrap_or_else(placeholder),
        status,
        joined_on: text(map, &JOINED_KEYS),
        id,
    })
}

fn record_id(value: &Value) -> Option<RecordId> {
    match value {
        Value::Number(n) => n.as_i64().map(RecordId::Number),
        Value::String(s) if !s.trim().is_empty() => Some(RecordId::Text(s.trim().to_string())),
        _ => None,
    }
}

/// First non-blank value under any of `keys`. Numbers are stringified.
fn text(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match map.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
