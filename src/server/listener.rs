use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// Binds the listening socket with address reuse and the configured backlog.
pub async fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = tokio::net::lookup_host(&cfg.listen_addr)
        .await
        .with_context(|| format!("Failed to resolve {}", cfg.listen_addr))?
        .next()
        .with_context(|| format!("No address for {}", cfg.listen_addr))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("Failed to bind {}", addr))?;

    Ok(socket.listen(cfg.backlog)?)
}

/// Accepts forever, one detached task per connection. Accept errors are
/// logged and do not stop the loop.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    info!("Listening on {}", listener.local_addr()?);

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let index_file = cfg.index_file.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, index_file);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg).await?;
    serve(listener, cfg).await
}
