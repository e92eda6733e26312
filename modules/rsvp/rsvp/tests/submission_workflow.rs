#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Submission workflow against a real (in-memory) store.

mod support;

use std::sync::Arc;

use futures::future::join_all;
use rsvp::RsvpModule;
use rsvp::domain::error::DomainError;
use rsvp::domain::name::normalize_name;
use rsvp_sdk::{NewRsvp, SubmissionOutcome};
use time::{Duration, OffsetDateTime};

use support::{inmem_db, seed_rsvp, test_config};

#[tokio::test]
async fn accepted_submission_is_stored_collapsed_and_normalized() {
    let module = RsvpModule::new(inmem_db().await, &test_config());
    let service = module.service();

    let rsvp = service
        .submit(NewRsvp::new("  Dara   Rubilar  ", true))
        .await
        .unwrap();
    assert_eq!(rsvp.display_name, "Dara Rubilar");
    assert_eq!(rsvp.normalized_name, "dara rubilar");
    assert_eq!(rsvp.id.get_version_num(), 7);

    let all = service.list_all().await.unwrap();
    assert_eq!(all, vec![rsvp]);
}

#[tokio::test]
async fn same_name_in_other_case_is_duplicate_and_not_stored() {
    let module = RsvpModule::new(inmem_db().await, &test_config());
    let service = module.service();

    service
        .submit(NewRsvp::new("  Dara   Rubilar  ", true))
        .await
        .unwrap();
    let err = service
        .submit(NewRsvp::new("dara rubilar", false))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::DuplicateName { .. }));
    assert_eq!(service.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn rejected_names_never_reach_the_store() {
    let module = RsvpModule::new(inmem_db().await, &test_config());
    let client = module.client();

    let cases = [
        ("", SubmissionOutcome::EmptyName),
        ("    ", SubmissionOutcome::EmptyName),
        ("Dara Rubilar 3", SubmissionOutcome::InvalidFormat),
        ("Dara #Rubilar", SubmissionOutcome::InvalidFormat),
        ("Dara", SubmissionOutcome::InvalidFormat),
        ("   Dara   ", SubmissionOutcome::InvalidFormat),
    ];

    for (raw, expected) in cases {
        let result = client.submit(NewRsvp::new(raw, true)).await;
        assert_eq!(SubmissionOutcome::from(&result), expected, "{raw:?}");
    }

    assert!(client.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_store_lists_nothing_and_counts_zero() {
    let module = RsvpModule::new(inmem_db().await, &test_config());
    let stats = module.service().stats().await.unwrap();

    assert!(stats.rsvps.is_empty());
    assert_eq!(stats.total, 0);
    assert_eq!(stats.attending, 0);
    assert_eq!(stats.not_attending, 0);
}

#[tokio::test]
async fn list_is_newest_first_and_counts_add_up() {
    let db = inmem_db().await;
    let base = OffsetDateTime::now_utc();
    let oldest = seed_rsvp(&db, "Ana Li", true, base - Duration::minutes(10)).await;
    let middle = seed_rsvp(&db, "Bo Chen", false, base - Duration::minutes(5)).await;
    let newest = seed_rsvp(&db, "Cy Diaz", true, base).await;

    let module = RsvpModule::new(db, &test_config());
    let stats = module.service().stats().await.unwrap();

    let ids: Vec<_> = stats.rsvps.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.attending, 2);
    assert_eq!(stats.not_attending, 1);
    assert_eq!(stats.attending + stats.not_attending, stats.total);
}

#[tokio::test]
async fn unique_index_rejects_direct_duplicate_insert() {
    let db = inmem_db().await;
    let now = OffsetDateTime::now_utc();
    seed_rsvp(&db, "Dara Rubilar", true, now).await;

    let repo = rsvp::infra::storage::SeaOrmRsvpRepository::new(db);
    let result = rsvp::domain::repo::RsvpRepository::insert(
        &repo,
        rsvp::domain::repo::NewRecord {
            display_name: "DARA RUBILAR".to_owned(),
            normalized_name: normalize_name("DARA RUBILAR"),
            attending: false,
        },
    )
    .await;

    assert!(matches!(
        result,
        Err(rsvp::domain::repo::StoreError::Duplicate)
    ));
}

#[tokio::test]
async fn concurrent_submissions_of_one_name_store_exactly_one() {
    let module = RsvpModule::new(inmem_db().await, &test_config());
    let service = module.service();

    let spellings = [
        "Dara Rubilar",
        "dara rubilar",
        "DARA   RUBILAR",
        " Dara Rubilar ",
        "dArA rUbIlAr",
        "Dara\tRubilar",
        "dara  rubilar",
        "DARA RUBILAR",
    ];

    let results = join_all(spellings.iter().map(|name| {
        let service = Arc::clone(&service);
        let name = (*name).to_owned();
        tokio::spawn(async move { service.submit(NewRsvp::new(name, true)).await })
    }))
    .await;

    let mut accepted = 0;
    for res in results {
        match res.unwrap() {
            Ok(_) => accepted += 1,
            Err(DomainError::DuplicateName { normalized_name }) => {
                assert_eq!(normalized_name, "dara rubilar");
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(accepted, 1);
    assert_eq!(service.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unicode_forms_of_one_name_are_one_guest() {
    let module = RsvpModule::new(inmem_db().await, &test_config());
    let service = module.service();

    let first = service
        .submit(NewRsvp::new("Jos\u{e9} N\u{fa}\u{f1}ez", true))
        .await
        .unwrap();
    let err = service
        .submit(NewRsvp::new("jose\u{301} nu\u{301}n\u{303}ez", true))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::DuplicateName { .. }));
    assert_eq!(service.list_all().await.unwrap(), vec![first]);
}

#[tokio::test]
async fn init_rejects_name_limit_wider_than_columns() {
    let cfg = rsvp::RsvpConfig {
        max_name_length: 300,
        ..test_config()
    };

    assert!(RsvpModule::init(inmem_db().await, &cfg).await.is_err());
    assert!(RsvpModule::init(inmem_db().await, &test_config()).await.is_ok());
}
