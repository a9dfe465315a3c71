//! Registration review service tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use mockall::Sequence;
use uuid::Uuid;

use client::registrations::{RegistrationAdmin, RegistrationsApi, StatusUpdate};
use common::{AppError, AppResult};
use domain::{Registration, RegistrationStatus};

mock! {
    Api {}

    #[async_trait]
    impl RegistrationsApi for Api {
        async fn list(&self) -> AppResult<Vec<Registration>>;
        async fn get(&self, id: Uuid) -> AppResult<Registration>;
        async fn put_status(&self, id: Uuid, update: &StatusUpdate) -> AppResult<()>;
    }
}

fn registration(id: Uuid, status: RegistrationStatus) -> Registration {
    Registration {
        id,
        user_id: Uuid::new_v4(),
        plan_id: Uuid::new_v4(),
        school_id: Uuid::new_v4(),
        status,
        registration_date: "2024-01-01T08:30:00".to_string(),
        start_date: None,
        end_date: None,
    }
}

#[tokio::test]
async fn successful_transition_returns_the_server_copy() {
    let id = Uuid::new_v4();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut seq = Sequence::new();

    let mut api = MockApi::new();
    api.expect_get()
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |id| Ok(registration(id, RegistrationStatus::Pending)));
    api.expect_put_status()
        .withf(move |put_id, update| {
            *put_id == id
                && update.status == RegistrationStatus::Active
                && update.start_date == Some(start)
                && update.end_date.is_none()
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    api.expect_get()
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |id| {
            let mut updated = registration(id, RegistrationStatus::Active);
            updated.start_date = Some(start);
            Ok(updated)
        });

    let admin = RegistrationAdmin::new(Arc::new(api));
    let updated = admin
        .set_status(id, RegistrationStatus::Active, Some(start), None)
        .await
        .unwrap();

    // The returned record is the re-fetched server copy, not the payload.
    assert_eq!(updated.status, RegistrationStatus::Active);
    assert_eq!(updated.start_date, Some(start));
}

#[tokio::test]
async fn rejected_transition_does_not_touch_the_record() {
    let id = Uuid::new_v4();

    let mut api = MockApi::new();
    api.expect_get()
        .returning(move |id| Ok(registration(id, RegistrationStatus::Pending)));
    api.expect_put_status()
        .times(1)
        .returning(|_, _| Err(AppError::Forbidden));

    let admin = RegistrationAdmin::new(Arc::new(api));
    let result = admin
        .set_status(id, RegistrationStatus::Active, None, None)
        .await;
    assert!(matches!(result, Err(AppError::Forbidden)));

    // The previously fetched status is still what the API reports.
    let current = admin.get(id).await.unwrap();
    assert_eq!(current.status, RegistrationStatus::Pending);
}

#[tokio::test]
async fn override_transition_is_still_applied() {
    let id = Uuid::new_v4();
    let mut seq = Sequence::new();

    let mut api = MockApi::new();
    api.expect_get()
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |id| Ok(registration(id, RegistrationStatus::Cancelled)));
    api.expect_put_status()
        .withf(|_, update| update.status == RegistrationStatus::Pending)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    api.expect_get()
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |id| Ok(registration(id, RegistrationStatus::Pending)));

    let admin = RegistrationAdmin::new(Arc::new(api));
    let updated = admin
        .set_status(id, RegistrationStatus::Pending, None, None)
        .await
        .unwrap();
    assert_eq!(updated.status, RegistrationStatus::Pending);
}
