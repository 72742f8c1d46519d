use fishshop_client::{
    CreateFeedbackRequest, CreateOrderRequest, GenerateQrRequest, ShopClient, UpdateOrderRequest,
};
use fishshop_hex::application::ShopServices;
use fishshop_hex::inbound::http::{HttpServer, HttpServerConfig};
use fishshop_repo::build_repo;
use fishshop_types::domain::order::OrderStatus;

fn find_free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

// Typed client against a live server backed by a temp data directory.
#[tokio::test]
async fn client_drives_every_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let port = find_free_port();
    let repo = build_repo(dir.path().to_str()).await.unwrap();
    let server = HttpServer::new(
        ShopServices::new(repo),
        HttpServerConfig {
            port: port.to_string(),
        },
    )
    .await
    .unwrap();
    let handle = tokio::spawn(async move {
        server.run().await.expect("server run");
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let client = ShopClient::new(&format!("http://127.0.0.1:{port}/api/")).unwrap();

    let order = client
        .create_order(&CreateOrderRequest {
            customer_name: "A".into(),
            customer_phone: "123".into(),
            fish_type: "Rohu".into(),
            quantity: 2.0,
            price_per_kg: 180.0,
            barcode: None,
        })
        .await
        .unwrap();
    assert_eq!(order.total_price, 360.0);

    let updated = client
        .update_order(
            &order.id,
            &UpdateOrderRequest {
                quantity: Some(4.0),
                status: Some(OrderStatus::Delivered),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.total_price, 720.0);
    assert_eq!(client.get_order(&order.id).await.unwrap(), updated);
    assert_eq!(client.list_orders().await.unwrap().len(), 1);

    let fb = client
        .submit_feedback(&CreateFeedbackRequest {
            customer_name: "A".into(),
            customer_email: None,
            rating: 4,
            comment: "ok".into(),
        })
        .await
        .unwrap();
    assert_eq!(client.list_feedback().await.unwrap(), vec![fb.clone()]);
    client.delete_feedback(&fb.id).await.unwrap();
    assert!(client.list_feedback().await.unwrap().is_empty());

    let qr = client
        .generate_qrcode(&GenerateQrRequest {
            fish_type: "Katla".into(),
            price_per_kg: 200.0,
            description: Some("carp".into()),
        })
        .await
        .unwrap();
    assert!(qr.barcode_value.starts_with("Katla-"));
    let scanned = client.scan(&qr.barcode_value).await.unwrap().unwrap();
    assert_eq!(scanned.id, qr.barcode_id);
    assert!(client.scan("missing").await.unwrap().is_none());
    assert_eq!(client.list_barcodes().await.unwrap().len(), 4);

    client.delete_order(&order.id).await.unwrap();
    client.delete_order(&order.id).await.unwrap();
    assert!(client.get_order(&order.id).await.is_err());

    handle.abort();

    let on_disk = std::fs::read_to_string(dir.path().join("barcodes.json")).unwrap();
    assert!(on_disk.contains(&qr.barcode_value));
}
