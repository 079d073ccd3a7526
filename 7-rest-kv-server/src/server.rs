use std::{future::Future, net::SocketAddr};

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::app::build_app;
use crate::store::KvStore;

/// An HTTP front end bound to a socket and backed by one [`KvStore`].
pub struct Server {
    listener: TcpListener,
    store: KvStore,
}

impl Server {
    pub fn new(listener: TcpListener, store: KvStore) -> Self {
        Self { listener, store }
    }

    /// Binds `addr` and starts from an empty store.
    pub async fn bind(addr: SocketAddr) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        Ok(Self::new(listener, KvStore::new()))
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn store(&self) -> &KvStore {
        &self.store
    }

    /// Serves requests until `shutdown` resolves, then lets in-flight
    /// requests finish.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Server { listener, store } = self;
        let app = build_app(store);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .context("http server failed")?;

        info!("server stopped");
        Ok(())
    }

    pub async fn run_until_ctrl_c(self) -> Result<()> {
        self.run_until(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!(error = ?err, "failed to install ctrl-c handler");
            }
        })
        .await
    }
}
