//! Axum-based JSON API for the college helpdesk. Config-driven via CoreConfig.

mod handlers;

use axum::http::Method;
use axum::{
    routing::{get, post},
    Router,
};
use helpdesk_core::{CoreConfig, DatasetStore, Helpdesk};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pre-flight check: config parses, dataset loads, port is free.
fn run_verify() -> Result<(), String> {
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;

    print!("Checking dataset {}... ", config.data_path);
    let store = DatasetStore::open_path(&config.data_path).map_err(|e| e.to_string())?;
    let data = store.dataset();
    println!(
        "OK ({} PYQ entries, {} departments)",
        data.dept_pyqs().len(),
        data.department_pages().len()
    );

    let addr = config.bind_addr();
    print!("Checking {}... ", addr);
    match std::net::TcpListener::bind(addr.as_str()) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => return Err(format!("{} BLOCKED: {}", addr, e)),
    }

    println!("\nAll checks passed.");
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[helpdesk-gateway] .env not loaded: {} (using system environment)", e);
    }

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match CoreConfig::load() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("[helpdesk-gateway] config error: {}", e);
            std::process::exit(1);
        }
    };

    let store = Arc::new(DatasetStore::load_or_empty(&config.data_path));
    let helpdesk = Helpdesk::new(store);
    let addr = config.bind_addr();
    let app = build_app(AppState { config, helpdesk });

    let listener = match tokio::net::TcpListener::bind(addr.as_str()).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("helpdesk-gateway listening on {}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", e);
    }
}

fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::catalog::root))
        .route("/pyqs", post(handlers::catalog::pyqs))
        .route("/timetables", post(handlers::catalog::timetables))
        .route("/faculty", get(handlers::catalog::faculty))
        .route("/holidays", get(handlers::catalog::holidays))
        .route("/api/v1/health", get(handlers::catalog::health))
        .route("/api/v1/chat", post(handlers::chat::chat))
        .with_state(state)
        .layer(cors)
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) helpdesk: Helpdesk,
}
