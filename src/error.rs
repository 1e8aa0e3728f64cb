//! Startup and serve errors for the storefront binary.

/// Anything that stops the server from starting or keeps it from serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held an unusable value.
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// Leptos site options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listen address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    /// The accept loop stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
