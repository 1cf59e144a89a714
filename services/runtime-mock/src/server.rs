//! Lifecycle of the mock runtime endpoint.
//!
//! [`MockRuntimeServer`] owns its listener from `bind` until `serve`
//! returns. Tests bind port 0 and drive it through a [`ServerHandle`].

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

use crate::error::ServerError;
use crate::router::build_router;

pub struct MockRuntimeServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    router: Router,
}

impl MockRuntimeServer {
    /// Bind the listener. Fails with [`ServerError::Bind`] when the address is
    /// taken or not permitted.
    pub async fn bind(addr: SocketAddr) -> Result<Self, ServerError> {
        let bind_err = |source| ServerError::Bind { addr, source };
        let listener = TcpListener::bind(addr).await.map_err(bind_err)?;
        let local_addr = listener.local_addr().map_err(bind_err)?;
        Ok(Self {
            listener,
            local_addr,
            router: build_router(),
        })
    }

    /// Address actually bound, with the kernel-assigned port when 0 was requested.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept connections until `shutdown` resolves, then let in-flight
    /// requests finish.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(
            addr = %self.local_addr,
            "mock runtime api server listening on port {}",
            self.local_addr.port()
        );
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServerError::Serve)
    }

    /// Serve on a background task. Dropping the returned handle also stops
    /// the server.
    pub fn spawn(self) -> ServerHandle {
        let local_addr = self.local_addr;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(self.serve(async move {
            let _ = shutdown_rx.await;
        }));
        ServerHandle {
            local_addr,
            shutdown_tx,
            task,
        }
    }
}

pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<Result<(), ServerError>>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting, wait for in-flight requests and release the port.
    pub async fn shutdown(self) -> Result<(), ServerError> {
        let _ = self.shutdown_tx.send(());
        self.task.await?
    }
}
