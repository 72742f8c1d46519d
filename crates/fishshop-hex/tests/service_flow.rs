use fishshop_hex::application::ShopServices;
use fishshop_repo::file::JsonFileStore;
use fishshop_repo::memory::InMemoryStore;
use fishshop_types::domain::order::{OrderPatch, OrderStatus};

// End-to-end service flow against the in-memory adapter.
#[tokio::test]
async fn order_lifecycle_flow() {
    let svc = ShopServices::new(InMemoryStore::new());

    let order = svc
        .orders
        .create_order(
            "Eve".into(),
            "555".into(),
            "Hilsa".into(),
            1.5,
            450.0,
            Some("HILSA-001".into()),
        )
        .await
        .unwrap();
    assert_eq!(order.total_price, 675.0);

    let list = svc.orders.list_orders().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, order.id);

    let updated = svc
        .orders
        .update_order(
            &order.id,
            OrderPatch {
                status: Some(OrderStatus::Confirmed),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Confirmed);
    assert_eq!(updated.total_price, 675.0);

    svc.orders.delete_order(&order.id).await.unwrap();
    let after_delete = svc.orders.list_orders().await.unwrap();
    assert!(after_delete.is_empty());
}

// The same flow against the file adapter, then reopened from disk.
#[tokio::test]
async fn file_backed_services_persist() {
    let dir = tempfile::tempdir().unwrap();
    let svc = ShopServices::new(JsonFileStore::open(dir.path()).await.unwrap());

    let order = svc
        .orders
        .create_order("Eve".into(), "555".into(), "Rohu".into(), 2.0, 180.0, None)
        .await
        .unwrap();
    svc.feedback
        .create_feedback("Eve".into(), None, 4, "fresh".into())
        .await
        .unwrap();
    let generated = svc
        .barcodes
        .generate("Katla".into(), 200.0, Some("carp".into()))
        .await
        .unwrap();
    drop(svc);

    let svc = ShopServices::new(JsonFileStore::open(dir.path()).await.unwrap());
    assert_eq!(svc.orders.get_order(&order.id).await.unwrap(), order);
    assert_eq!(svc.feedback.list_feedback().await.unwrap().len(), 1);
    let scanned = svc
        .barcodes
        .scan(&generated.barcode.barcode_value)
        .await
        .unwrap();
    assert_eq!(scanned.description.as_deref(), Some("carp"));
    assert_eq!(svc.barcodes.list_barcodes().await.unwrap().len(), 4);
}
