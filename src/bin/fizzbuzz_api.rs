//! FizzBuzz API Server
//!
//! Usage:
//!   cargo run --bin fizzbuzz_api
//!
//! Environment:
//!   PORT / FIZZBUZZ_PORT - Server port (default: 8080)
//!   FIZZBUZZ_HOST        - Server host (default: 0.0.0.0)

use fizzbuzz_api::utils::constants::{APP_NAME, APP_VERSION};
use fizzbuzz_api::{create_router, ServerConfig};
use tokio::net::TcpListener;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    let config = ServerConfig::from_env();
    let addr = config.socket_addr()?;

    let app = create_router();

    info!("🚀 {} v{} starting on http://{}", APP_NAME, APP_VERSION, addr);
    info!("Endpoints:");
    info!("  GET /api/{{number}}            - Fizz, Buzz, FizzBuzz or the number");
    info!("  GET /api/fizz/{{number}}       - Divisible by 3");
    info!("  GET /api/buzz/{{number}}       - Divisible by 5");
    info!("  GET /api/fizzbuzz/{{number}}   - Divisible by 3 and 5");
    info!("  GET /                        - Landing page");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("🛑 Server closed");

    Ok(())
}
