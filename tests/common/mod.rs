//! Shared utilities for end-to-end tests.

use std::net::SocketAddr;

use report_api::{ReportServer, ServerConfig, Shutdown};
use tokio::net::TcpListener;

/// Start a server instance on an ephemeral port.
///
/// Returns the bound address and the shutdown handle for stopping it.
pub async fn start_server(config: ServerConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = ReportServer::new(&config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
