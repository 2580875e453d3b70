use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// Pause after a failed accept before trying again.
pub const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

pub async fn run(cfg: Config) -> anyhow::Result<()> {
    let addr = cfg.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Server listening on port {}", cfg.port);

    serve(listener, Arc::new(cfg)).await
}

/// Accepts connections forever, one task each.
///
/// Accept errors are logged and the loop carries on. With `max_connections`
/// set, tasks wait for a permit before reading, so accepting never blocks.
pub async fn serve(listener: TcpListener, cfg: Arc<Config>) -> anyhow::Result<()> {
    let limiter = cfg
        .max_connections
        .map(|n| Arc::new(Semaphore::new(n.get())));

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Error accepting client connection: {}", e);
                // EMFILE and friends persist; don't spin on them.
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        info!("Client connected: {}", peer.ip());

        let cfg = Arc::clone(&cfg);
        let limiter = limiter.clone();
        tokio::spawn(async move {
            let _permit = match limiter {
                Some(sem) => match sem.acquire_owned().await {
                    Ok(permit) => Some(permit),
                    Err(_) => return,
                },
                None => None,
            };

            let mut conn = Connection::new(socket, cfg);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}
