//! Binary entrypoint for the Jury API server.
use jury_api::run;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Default listen address can be overridden with JURY_ADDR
    let addr = std::env::var("JURY_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string());
    run(&addr).await;
}
