//! imgmark — interactive watermarking and image-edit sessions in the
//! terminal.

pub mod flow;
pub mod prompt;

/// Initialize tracing for the binary.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
