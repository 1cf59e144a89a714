use std::net::{Ipv4Addr, SocketAddr};

/// Port the mock always listens on.
pub const DEFAULT_PORT: u16 = 3000;

/// Mock runtime configuration. The port is fixed; nothing is read from the
/// environment.
#[derive(Debug, Clone)]
pub struct RuntimeMockConfig {
    /// TCP port to listen on (always 3000 for the binary).
    pub port: u16,
}

impl Default for RuntimeMockConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl RuntimeMockConfig {
    /// Listen on every interface, like the real runtime endpoint inside a sandbox.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
