//! Server startup errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to read leptos configuration: {0}")]
    Configuration(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server terminated: {0}")]
    Serve(#[from] std::io::Error),
}
