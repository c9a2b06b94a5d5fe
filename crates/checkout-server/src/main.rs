//! plan-checkout HTTP Server
//!
//! Axum-based server that ships the WASM pricing page and relays checkout
//! requests to Stripe's hosted Checkout.

mod config;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checkout_core::{SessionProvider, StripeClient};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Initialize payments
    let sessions: Option<Arc<dyn SessionProvider>> = config
        .stripe_secret_key
        .as_deref()
        .map(|key| Arc::new(StripeClient::new(key)) as Arc<dyn SessionProvider>);

    if sessions.is_some() {
        tracing::info!("✓ Stripe configured");
        for (tier, price) in &config.price_overrides {
            tracing::info!("  {} billed as {}", tier, price);
        }
    } else {
        tracing::warn!("⚠ Stripe not configured - checkout disabled");
        tracing::warn!("  Set STRIPE_SECRET_KEY in .env");
    }

    if !config.static_dir.is_dir() {
        tracing::warn!(
            static_dir = %config.static_dir.display(),
            "Frontend bundle not found - build checkout-web first"
        );
    }

    let state = AppState::new(sessions, config.price_overrides.clone());
    let app = routes::router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 plan-checkout running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health        - Health check");
    tracing::info!("  GET  /api/tiers     - Pricing tiers");
    tracing::info!("  POST /api/checkout  - Create hosted checkout session");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
