//! Integration tests for the registration form running inside a Store
//!
//! These tests walk the screen through the same sequences a user would.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use chrono::NaiveDate;
use composable_register_runtime::{Store, StoreError};
use composable_register_testing::{FixedClock, test_clock};
use register::{
    Birthdate, EntryAction, FieldError, FormPhase, FormatKind, ListKind, RegisterAction,
    RegisterEnvironment, RegisterError, RegisterReducer, RegisterState,
};
use std::sync::Arc;

type RegisterStore = Store<RegisterState, RegisterAction, RegisterEnvironment, RegisterReducer>;

fn new_store() -> RegisterStore {
    let env = RegisterEnvironment::new(Arc::new(test_clock()));
    Store::new(RegisterState::new(), RegisterReducer::new(), env)
}

async fn fill_valid_form(store: &RegisterStore) {
    let actions = [
        RegisterAction::NameChanged("Charlotte".to_string()),
        RegisterAction::WebsiteChanged("https://example.com".to_string()),
        RegisterAction::BirthdateChanged("Jan 05 1990".parse().unwrap()),
        RegisterAction::Email(EntryAction::ValueChanged {
            index: 0,
            value: "c@example.com".to_string(),
        }),
        RegisterAction::Phone(EntryAction::ValueChanged {
            index: 0,
            value: "12345678901".to_string(),
        }),
    ];
    for action in actions {
        store.send(action).await.unwrap();
    }
}

#[tokio::test]
async fn test_all_empty_submit_flags_everything() {
    let store = new_store();

    store.send(RegisterAction::SubmitClicked).await.unwrap();

    let state = store.snapshot().await;
    assert_eq!(state.name_error, Some(FieldError::Empty));
    assert_eq!(state.website_error, Some(FieldError::Empty));
    assert_eq!(state.birthday_error, Some(FieldError::Empty));
    assert_eq!(state.emails.get(0).unwrap().error, Some(FieldError::Empty));
    assert_eq!(state.phones.get(0).unwrap().error, Some(FieldError::Empty));
    assert!(!state.submit_succeeded);
    assert_eq!(state.phase(), FormPhase::Validated);
}

#[tokio::test]
async fn test_valid_form_submits_and_acknowledges() {
    let store = new_store();
    fill_valid_form(&store).await;

    store.send(RegisterAction::SubmitClicked).await.unwrap();
    let state = store.snapshot().await;
    assert_eq!(state.error_count(), 0);
    assert!(state.submit_succeeded);
    assert_eq!(state.success_notice(), Some(register::SUCCESS_MESSAGE));

    store.send(RegisterAction::AcknowledgeSuccess).await.unwrap();
    let state = store.snapshot().await;
    assert_eq!(state.phase(), FormPhase::Editing);
    assert_eq!(state.name, "Charlotte");
    assert_eq!(state.birthday_display(), "Jan 05 1990");
}

#[tokio::test]
async fn test_name_rules_through_submit() {
    let store = new_store();
    fill_valid_form(&store).await;

    let cases = [
        ("", Some(FieldError::Empty)),
        ("Al", Some(FieldError::TooShort)),
        ("Alice", None),
    ];
    for (name, expected) in cases {
        store
            .send(RegisterAction::NameChanged(name.to_string()))
            .await
            .unwrap();
        store.send(RegisterAction::SubmitClicked).await.unwrap();
        assert_eq!(store.state(|s| s.name_error).await, expected, "name {name:?}");
    }
}

#[tokio::test]
async fn test_email_format_rules_through_submit() {
    let store = new_store();
    fill_valid_form(&store).await;

    store
        .send(RegisterAction::Email(EntryAction::ValueChanged {
            index: 0,
            value: "not-an-email".to_string(),
        }))
        .await
        .unwrap();
    store.send(RegisterAction::SubmitClicked).await.unwrap();
    assert_eq!(
        store.state(|s| s.emails.get(0).unwrap().error).await,
        Some(FieldError::InvalidFormat(FormatKind::Email))
    );

    store
        .send(RegisterAction::Email(EntryAction::ValueChanged {
            index: 0,
            value: "a@b.com".to_string(),
        }))
        .await
        .unwrap();
    store.send(RegisterAction::SubmitClicked).await.unwrap();
    assert_eq!(store.state(|s| s.emails.get(0).unwrap().error).await, None);
}

#[tokio::test]
async fn test_deleting_the_non_primary_shifts_index() {
    let store = new_store();

    // Two phones, primary moved to the second row
    store.send(RegisterAction::Phone(EntryAction::Add)).await.unwrap();
    store
        .send(RegisterAction::Phone(EntryAction::ValueChanged {
            index: 1,
            value: "+1 (555) 123-4567".to_string(),
        }))
        .await
        .unwrap();
    store
        .send(RegisterAction::Phone(EntryAction::PrimaryChanged {
            index: 1,
            is_primary: true,
        }))
        .await
        .unwrap();
    assert!(store.state(|s| s.phones.can_delete(0)).await);

    store
        .send(RegisterAction::Phone(EntryAction::Delete { index: 0 }))
        .await
        .unwrap();

    let phones = store.state(|s| s.phones.clone()).await;
    assert_eq!(phones.len(), 1);
    let remaining = phones.get(0).unwrap();
    assert_eq!(remaining.value, "+1 (555) 123-4567");
    assert!(remaining.is_primary);
}

#[tokio::test]
async fn test_stale_index_is_rejected_and_state_kept() {
    let store = new_store();
    fill_valid_form(&store).await;
    let before = store.snapshot().await;

    let result = store
        .send(RegisterAction::Email(EntryAction::Delete { index: 2 }))
        .await;
    assert_eq!(
        result,
        Err(StoreError::Rejected(RegisterError::IndexOutOfRange {
            list: ListKind::Email,
            index: 2,
            len: 1,
        }))
    );

    let error = store
        .send(RegisterAction::Email(EntryAction::Delete { index: 0 }))
        .await
        .unwrap_err();
    assert_eq!(
        error.reducer_error(),
        &RegisterError::LastEntry {
            list: ListKind::Email
        }
    );

    assert_eq!(store.snapshot().await, before);
}

#[tokio::test]
async fn test_minimum_age_moves_with_the_clock() {
    let birthday = Birthdate::from_ymd(2000, 5, 20).unwrap();
    let state = RegisterState {
        birthday: Some(birthday),
        ..RegisterState::new()
    };

    let at = |year| {
        let clock = FixedClock::on_date(NaiveDate::from_ymd_opt(year, 3, 1).unwrap());
        Store::new(
            state.clone(),
            RegisterReducer::new(),
            RegisterEnvironment::new(Arc::new(clock)),
        )
    };

    let store = at(2015);
    store.send(RegisterAction::SubmitClicked).await.unwrap();
    assert_eq!(
        store.state(|s| s.birthday_error).await,
        Some(FieldError::BelowMinimumAge)
    );

    let store = at(2016);
    store.send(RegisterAction::SubmitClicked).await.unwrap();
    assert_eq!(store.state(|s| s.birthday_error).await, None);
}

#[tokio::test]
async fn test_renderer_observes_snapshots() {
    let store = new_store();
    let mut snapshots = store.subscribe();

    store
        .send(RegisterAction::NameChanged("Charlotte".to_string()))
        .await
        .unwrap();

    snapshots.changed().await.unwrap();
    assert_eq!(snapshots.borrow_and_update().name, "Charlotte");
}
