use std::net::SocketAddr;

use devkit::viewer::{serve, HelpInfo, NO_DOC_PLACEHOLDER};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

async fn get(addr: SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        path
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8_lossy(&response).into_owned()
}

fn sample() -> HelpInfo {
    let mut help = HelpInfo::new();
    help.insert("append", "builtin method", Some("Add an item to the end."));
    help.insert("clear", "builtin method", None);
    help
}

#[tokio::test]
async fn serves_index_and_detail_pages() {
    let handle = serve(SocketAddr::from(([127, 0, 0, 1], 0)), sample())
        .await
        .unwrap();
    let addr = handle.local_addr();

    let index = get(addr, "/").await;
    assert!(index.starts_with("HTTP/1.1 200"), "index: {index}");
    assert!(index.contains("/help/append"));
    assert!(index.contains("/help/clear"));

    let detail = get(addr, "/help/append").await;
    assert!(detail.starts_with("HTTP/1.1 200"));
    assert!(detail.contains("builtin method"));
    assert!(detail.contains("Add an item to the end."));

    let placeholder = get(addr, "/help/clear").await;
    assert!(placeholder.contains(NO_DOC_PLACEHOLDER));

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn unknown_attribute_is_not_found() {
    let handle = serve(SocketAddr::from(([127, 0, 0, 1], 0)), sample())
        .await
        .unwrap();
    let addr = handle.local_addr();

    let missing = get(addr, "/help/nope").await;
    assert!(missing.starts_with("HTTP/1.1 404"), "missing: {missing}");
    assert!(missing.contains("Help not found"));

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn shutdown_stops_the_listener() {
    let handle = serve(SocketAddr::from(([127, 0, 0, 1], 0)), sample())
        .await
        .unwrap();
    let addr = handle.local_addr();

    // Reachable while running.
    let index = get(addr, "/").await;
    assert!(index.starts_with("HTTP/1.1 200"));

    handle.shutdown().await.unwrap();

    assert!(TcpStream::connect(addr).await.is_err());
}
