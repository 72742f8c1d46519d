use fishshop_repo::{build_repo, Repo};
use fishshop_types::ports::record_store::RecordStore;

#[tokio::test]
async fn builds_file_repo_from_data_dir() {
    // Use a temp data dir for isolation.
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("shop-data");

    let repo: Repo = build_repo(data_dir.to_str()).await.expect("build repo");
    assert_eq!(repo.backend(), "file");
    // basic sanity: no orders yet, sample barcodes seeded
    assert!(repo.list_orders().await.expect("list").is_empty());
    assert_eq!(repo.list_barcodes().await.expect("list").len(), 3);
    assert!(data_dir.join("orders.json").exists());
    assert!(data_dir.join("barcodes.json").exists());
}

#[tokio::test]
async fn builds_memory_repo_without_data_dir() {
    let repo: Repo = build_repo(None).await.expect("build repo");
    assert_eq!(repo.backend(), "memory");
    let rohu = repo.get_barcode_by_value("ROHU-001").await.unwrap();
    assert!(rohu.is_some());
}
