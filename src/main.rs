//! Showcase CLI entry point

fn main() {
    // Structured logging goes to stderr so stdout carries only the demo output
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    showcase::cli::run();
}
