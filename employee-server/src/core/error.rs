use thiserror::Error;

/// Errors that stop the server from binding or serving
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Result type for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
