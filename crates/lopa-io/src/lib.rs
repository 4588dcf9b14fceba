pub mod cli;
pub mod reader;
pub mod report;

pub use cli::JumpArgs;
pub use reader::{parse_graph, read_graph, ReadError};
pub use report::render;

/// Diagnostics go through tracing to stderr; stdout carries only the
/// result lines. Filter defaults to `warn`, override with `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with_writer(std::io::stderr)
        .init();
}
