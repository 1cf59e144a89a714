use std::net::SocketAddr;

/// Failures of the server lifecycle. Request handling itself has none.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error")]
    Serve(#[source] std::io::Error),
    #[error("server task panicked or was cancelled")]
    Join(#[from] tokio::task::JoinError),
}
