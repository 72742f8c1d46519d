#![cfg(feature = "memory")]

use fishshop_repo::memory::InMemoryStore;
use fishshop_types::domain::feedback::NewFeedback;
use fishshop_types::domain::order::{NewOrder, OrderPatch, OrderStatus};
use fishshop_types::ports::record_store::RecordStore;

fn rohu_order() -> NewOrder {
    NewOrder::new(
        "Test".into(),
        "0123".into(),
        "Rohu".into(),
        2.0,
        180.0,
        None,
    )
    .unwrap()
}

#[tokio::test]
async fn memory_store_order_crud_flow() {
    let store = InMemoryStore::new();

    let created = store.create_order(rohu_order()).await.unwrap();
    assert_eq!(created.total_price, 360.0);

    let fetched = store.get_order(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let updated = store
        .update_order(
            &created.id,
            OrderPatch {
                price_per_kg: Some(250.0),
                status: Some(OrderStatus::Confirmed),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.total_price, 500.0);
    assert_eq!(updated.status, OrderStatus::Confirmed);
    assert_eq!(updated.customer_name, "Test");
    assert_eq!(updated.order_date, created.order_date);

    assert!(store.delete_order(&created.id).await.unwrap());
    assert!(store.get_order(&created.id).await.unwrap().is_none());
    assert!(store.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn memory_store_lists_are_snapshots() {
    let store = InMemoryStore::new();
    store.create_order(rohu_order()).await.unwrap();

    let mut snapshot = store.list_orders().await.unwrap();
    snapshot[0].customer_name = "Mutated".into();
    snapshot.clear();

    let again = store.list_orders().await.unwrap();
    assert_eq!(again.len(), 1);
    assert_eq!(again[0].customer_name, "Test");
}

#[tokio::test]
async fn memory_store_keeps_insertion_order() {
    let store = InMemoryStore::new();
    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        let fb = NewFeedback::new(name.into(), None, 4, "fresh".into()).unwrap();
        ids.push(store.create_feedback(fb).await.unwrap().id);
    }
    let listed: Vec<String> = store
        .list_feedback()
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.id)
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn memory_store_handles_missing_rows() {
    let store = InMemoryStore::new();
    let missing = uuid::Uuid::new_v4().to_string();

    assert!(store.get_order(&missing).await.unwrap().is_none());
    assert!(store
        .update_order(&missing, OrderPatch::default())
        .await
        .unwrap()
        .is_none());

    store.create_order(rohu_order()).await.unwrap();
    assert!(!store.delete_order(&missing).await.unwrap());
    assert_eq!(store.list_orders().await.unwrap().len(), 1);
    assert!(!store.delete_feedback(&missing).await.unwrap());
    assert!(!store.delete_barcode(&missing).await.unwrap());
}

#[tokio::test]
async fn seeded_store_scans_sample_barcodes() {
    let store = InMemoryStore::seeded();
    assert_eq!(store.list_barcodes().await.unwrap().len(), 3);

    let katla = store
        .get_barcode_by_value("KATLA-001")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(katla.fish_type, "Katla");
    assert_eq!(katla.price_per_kg, 200.0);
    assert_eq!(store.get_barcode(&katla.id).await.unwrap(), Some(katla));

    assert!(store
        .get_barcode_by_value("NOPE-001")
        .await
        .unwrap()
        .is_none());
}
