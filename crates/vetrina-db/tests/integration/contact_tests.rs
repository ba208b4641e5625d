use vetrina_core::models::NewContactSubmission;
use vetrina_db::ContactRepository;

use crate::common::setup_test_db;

#[tokio::test]
async fn insert_stamps_created_at() {
    let (pool, _dir) = setup_test_db().await;
    let repo = ContactRepository::new(pool);

    let submission = NewContactSubmission::new(
        Some("A".to_string()),
        Some("a@x.com".to_string()),
        Some("hi".to_string()),
    )
    .unwrap();
    let record = repo.insert(&submission).await.unwrap();

    assert_eq!(record.name, "A");
    assert_eq!(record.email, "a@x.com");
    assert_eq!(record.message, "hi");
    assert!(record.created_at <= chrono::Utc::now());

    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, record.id);
    assert_eq!(listed[0].created_at, record.created_at);
}

#[tokio::test]
async fn delete_unknown_id_is_a_miss() {
    let (pool, _dir) = setup_test_db().await;
    let repo = ContactRepository::new(pool);

    assert!(!repo.delete(9999).await.unwrap());
}
