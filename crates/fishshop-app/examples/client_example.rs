///  To run :
///  cargo r --example client_example
use fishshop_client::{CreateOrderRequest, GenerateQrRequest, ShopClient, UpdateOrderRequest};
use fishshop_hex::application::ShopServices;
use fishshop_hex::inbound::http::{HttpServer, HttpServerConfig};
use fishshop_repo::build_repo;
use fishshop_types::domain::order::OrderStatus;
use tempfile::tempdir;

fn find_free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Start server on ephemeral port with a throwaway data directory.
    let port = find_free_port();
    let addr = format!("http://127.0.0.1:{port}/api/");

    let tmp = tempdir()?;
    let data_dir = tmp.path().join("data");

    let repo = build_repo(data_dir.to_str()).await?;
    let server = HttpServer::new(
        ShopServices::new(repo),
        HttpServerConfig {
            port: port.to_string(),
        },
    )
    .await?;

    let handle = tokio::spawn(async move {
        server.run().await.expect("server run");
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let client = ShopClient::new(&addr)?;
    let created = client
        .create_order(&CreateOrderRequest {
            customer_name: "Example".into(),
            customer_phone: "0300-1234567".into(),
            fish_type: "Rohu".into(),
            quantity: 2.0,
            price_per_kg: 180.0,
            barcode: Some("ROHU-001".into()),
        })
        .await?;
    println!("Created order id={} total={}", created.id, created.total_price);
    assert_eq!(created.status, OrderStatus::Pending);

    let updated = client
        .update_order(
            &created.id,
            &UpdateOrderRequest {
                price_per_kg: Some(250.0),
                status: Some(OrderStatus::Confirmed),
                ..Default::default()
            },
        )
        .await?;
    println!(
        "Updated status={:?} total={} for id {}",
        updated.status, updated.total_price, updated.id
    );

    let qr = client
        .generate_qrcode(&GenerateQrRequest {
            fish_type: "Katla".into(),
            price_per_kg: 200.0,
            description: Some("Large freshwater carp".into()),
        })
        .await?;
    println!(
        "Generated {} ({} bytes of image data)",
        qr.barcode_value,
        qr.qr_code_image.len()
    );

    match client.scan(&qr.barcode_value).await? {
        Some(b) => println!("Scanned {} at {}/kg", b.fish_type, b.price_per_kg),
        None => println!("Scan missed {}", qr.barcode_value),
    }

    client.delete_order(&created.id).await?;
    println!("Deleted order; files kept in {}", data_dir.display());

    handle.abort();
    Ok(())
}
