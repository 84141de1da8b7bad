use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use realty_crm::backend::{BackendError, UserDirectory, UserUpdate};
use realty_crm::entities::{AdminUser, RecordId};
use realty_crm::services::UserManagement;
use realty_crm::status::{self, UserStatus};
use realty_crm::CrmError;

#[derive(Default)]
struct MockDirectory {
    users: Mutex<Vec<AdminUser>>,
    fail_with: Mutex<Option<BackendError>>,
    gate: Option<Arc<Notify>>,
    list_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    last_update: Mutex<Option<UserUpdate>>,
    sent_statuses: Mutex<Vec<UserStatus>>,
}

impl MockDirectory {
    fn with_users(users: Vec<AdminUser>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Default::default()
        }
    }

    fn fail(&self, err: BackendError) {
        *self.fail_with.lock().unwrap() = Some(err);
    }

    fn check(&self) -> Result<(), BackendError> {
        match self.fail_with.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserDirectory for MockDirectory {
    async fn list_users(&self) -> Result<Vec<AdminUser>, BackendError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.check()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update_user(&self, _id: &RecordId, update: &UserUpdate) -> Result<(), BackendError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.check()?;
        if let Some(status) = update.status {
            self.sent_statuses.lock().unwrap().push(status);
        }
        *self.last_update.lock().unwrap() = Some(update.clone());
        Ok(())
    }

    async fn delete_user(&self, _id: &RecordId) -> Result<(), BackendError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check()
    }
}

fn seed() -> Vec<AdminUser> {
    let mut asha = AdminUser::new("1", "Asha Verma");
    asha.status = UserStatus::Active;
    let ben = AdminUser::new("2", "Ben");
    let mut carl = AdminUser::new("3", "Carl");
    carl.status = UserStatus::NotVerified;
    vec![asha, ben, carl]
}

async fn loaded(directory: Arc<MockDirectory>) -> UserManagement {
    let service = UserManagement::new(directory);
    service.refresh().await.unwrap();
    service
}

#[tokio::test]
async fn test_refresh_and_search() {
    let directory = Arc::new(MockDirectory::with_users(vec![
        AdminUser::new("1", "A"),
        AdminUser::new("2", "B"),
    ]));
    let service = loaded(directory).await;

    assert_eq!(service.users().await.len(), 2);
    let found = service.search("a").await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, RecordId::from("1"));
    assert_eq!(service.search("").await.len(), 2);
}

#[tokio::test]
async fn test_failed_refresh_empties_list() {
    let directory = Arc::new(MockDirectory::with_users(seed()));
    let service = loaded(directory.clone()).await;
    assert_eq!(service.users().await.len(), 3);

    directory.fail(BackendError::Network("connection refused".to_string()));
    let err = service.refresh().await.unwrap_err();

    assert!(matches!(err, CrmError::Backend { .. }));
    let alert = err.alert();
    assert_eq!(alert.title, "Error");
    assert_eq!(alert.message, "Failed to load users. Please try again.");
    assert!(service.users().await.is_empty());
    assert!(!service.is_busy().await);
}

#[tokio::test]
async fn test_change_status_sends_update_and_mirrors_locally() {
    let directory = Arc::new(MockDirectory::with_users(seed()));
    let service = loaded(directory.clone()).await;
    let id = RecordId::from("1");

    let user = service.change_status(&id, UserStatus::Deactivated).await.unwrap();
    assert_eq!(user.status, UserStatus::Deactivated);
    assert_eq!(service.get(&id).await.unwrap().status, UserStatus::Deactivated);
    assert_eq!(
        directory.last_update.lock().unwrap().clone(),
        Some(UserUpdate::status(UserStatus::Deactivated))
    );
}

#[tokio::test]
async fn test_invalid_status_change_never_reaches_backend() {
    let directory = Arc::new(MockDirectory::with_users(seed()));
    let service = loaded(directory.clone()).await;
    let id = RecordId::from("2");

    let err = service.change_status(&id, UserStatus::Deactivated).await.unwrap_err();
    assert!(matches!(err, CrmError::Transition(_)));
    assert_eq!(directory.update_calls.load(Ordering::SeqCst), 0);
    assert_eq!(service.get(&id).await.unwrap().status, UserStatus::Pending);
}

#[tokio::test]
async fn test_failed_update_keeps_list_unchanged() {
    let directory = Arc::new(MockDirectory::with_users(seed()));
    let service = loaded(directory.clone()).await;
    directory.fail(BackendError::Auth("token expired".to_string()));

    let id = RecordId::from("3");
    let err = service.change_status(&id, UserStatus::Active).await.unwrap_err();
    assert_eq!(err.alert().message, "Failed to update user. Please try again.");
    assert_eq!(service.get(&id).await.unwrap().status, UserStatus::NotVerified);
    assert_eq!(service.users().await.len(), 3);
}

#[tokio::test]
async fn test_update_validation() {
    let directory = Arc::new(MockDirectory::with_users(seed()));
    let service = loaded(directory.clone()).await;
    let id = RecordId::from("1");

    let err = service.update(&id, UserUpdate::default()).await.unwrap_err();
    assert_eq!(err.alert().title, "Missing Info");

    let blank_name = UserUpdate {
        full_name: Some("  ".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        service.update(&id, blank_name).await,
        Err(CrmError::Validation { .. })
    ));
    assert_eq!(directory.update_calls.load(Ordering::SeqCst), 0);

    let rename = UserUpdate {
        full_name: Some("Asha V.".to_string()),
        ..Default::default()
    };
    let user = service.update(&id, rename).await.unwrap();
    assert_eq!(user.full_name, "Asha V.");
    assert_eq!(user.status, UserStatus::Active);
}

#[tokio::test]
async fn test_delete_user() {
    let directory = Arc::new(MockDirectory::with_users(seed()));
    let service = loaded(directory.clone()).await;

    let removed = service.delete(&RecordId::from("2")).await.unwrap();
    assert_eq!(removed.full_name, "Ben");
    assert_eq!(service.users().await.len(), 2);

    let missing = service.delete(&RecordId::from("2")).await.unwrap_err();
    assert!(matches!(missing, CrmError::Repository(_)));
    assert_eq!(directory.delete_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failed_delete_keeps_user() {
    let directory = Arc::new(MockDirectory::with_users(seed()));
    let service = loaded(directory.clone()).await;
    directory.fail(BackendError::NotFound("HTTP 404".to_string()));

    assert!(service.delete(&RecordId::from("2")).await.is_err());
    assert_eq!(service.users().await.len(), 3);
}

#[tokio::test]
async fn test_second_request_while_in_flight_is_rejected() {
    let gate = Arc::new(Notify::new());
    let directory = Arc::new(MockDirectory {
        users: Mutex::new(seed()),
        gate: Some(gate.clone()),
        ..Default::default()
    });
    let service = UserManagement::new(directory.clone());

    let background = service.clone();
    let pending = tokio::spawn(async move { background.refresh().await });

    while !service.is_busy().await {
        tokio::task::yield_now().await;
    }

    let err = service.refresh().await.unwrap_err();
    assert_eq!(err, CrmError::RequestInFlight);
    assert_eq!(err.alert().title, "Please Wait");
    assert_eq!(directory.list_calls.load(Ordering::SeqCst), 1);

    gate.notify_one();
    assert_eq!(pending.await.unwrap().unwrap(), 3);
    assert!(!service.is_busy().await);
}

#[tokio::test]
async fn test_update_with_forbidden_status_is_rejected() {
    let directory = Arc::new(MockDirectory::with_users(seed()));
    let service = loaded(directory.clone()).await;
    let id = RecordId::from("1");

    let update = UserUpdate {
        full_name: Some("Asha V.".to_string()),
        status: Some(UserStatus::Pending),
        ..Default::default()
    };
    let err = service.update(&id, update).await.unwrap_err();

    assert!(matches!(err, CrmError::Transition(_)));
    assert_eq!(directory.update_calls.load(Ordering::SeqCst), 0);
    let user = service.get(&id).await.unwrap();
    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.full_name, "Asha Verma");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_status_changes_follow_the_table() {
    for _ in 0..200 {
        let directory = Arc::new(MockDirectory::with_users(seed()));
        let service = loaded(directory.clone()).await;
        let id = RecordId::from("2");

        let first = {
            let service = service.clone();
            let id = id.clone();
            tokio::spawn(async move { service.change_status(&id, UserStatus::Active).await })
        };
        let second = {
            let service = service.clone();
            let id = id.clone();
            tokio::spawn(async move { service.change_status(&id, UserStatus::NotVerified).await })
        };
        let outcomes = [first.await.unwrap(), second.await.unwrap()];

        // Every status the backend received must be reachable from the last one.
        let sent = directory.sent_statuses.lock().unwrap().clone();
        let mut current = UserStatus::Pending;
        for target in &sent {
            current = status::transition(current, *target)
                .unwrap_or_else(|e| panic!("backend received {:?}: {}", sent, e));
        }

        assert_eq!(sent.len(), outcomes.iter().filter(|outcome| outcome.is_ok()).count());
        assert_eq!(service.get(&id).await.unwrap().status, current);
        assert!(!service.is_busy().await);
    }
}
