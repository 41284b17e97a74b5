use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;
use tracing::info;

pub const DEFAULT_PORT: u16 = 3000;

/// Binds the backend to a port and serves [`crate::app`] on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendServer {
    host: IpAddr,
    port: u16,
}

impl BackendServer {
    pub fn new(port: u16) -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port,
        }
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Bind the listening socket without serving yet.
    ///
    /// A port that is already taken surfaces here as an `io::Error`; nothing
    /// retries it.
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind(self.addr()).await
    }

    pub async fn start(&self) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        info!(listen_addr = %listener.local_addr()?, "backend server running");
        crate::run(listener).await
    }
}

impl Default for BackendServer {
    fn default() -> Self {
        Self::new(DEFAULT_PORT)
    }
}
