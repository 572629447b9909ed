//! Shared utilities for integration testing.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use subnet_resolver::config::ServiceConfig;
use subnet_resolver::lifecycle::Shutdown;
use subnet_resolver::HttpServer;

/// Spawn the service on an ephemeral port.
///
/// Returns the bound address and the shutdown handle that stops the server.
pub async fn start_service(config: ServiceConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// A client that never routes through a local proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
