use axum::{
    routing::{delete, get, post, put},
    Router,
};
use clap::Parser;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use doar_api::config;
use doar_api::database::manager::DatabaseManager;
use doar_api::handlers::{donator, public, receiver};
use doar_api::middleware::auth_middleware;

#[derive(Parser, Debug)]
#[command(name = "doar-api")]
#[command(about = "Donation platform backend API")]
#[command(version)]
struct Args {
    #[arg(long, help = "Bind host, overrides config")]
    host: Option<String>,

    #[arg(long, help = "Bind port, overrides config")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doar_api=info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting doar-api in {:?} mode", config.environment);

    let app = app();

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);

    let bind_addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("doar-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn app() -> Router {
    let router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        // Protected surfaces
        .merge(donator_routes())
        .merge(receiver_routes())
        // The gate sees every request and exempts only the allow-list
        .layer(axum::middleware::from_fn(auth_middleware))
        .layer(TraceLayer::new_for_http());

    if config::config().server.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

fn public_routes() -> Router {
    Router::new()
        .route("/login", post(public::login))
        .route("/cadastrate", post(public::cadastrate))
}

fn donator_routes() -> Router {
    Router::new()
        .route("/donator/list_receivers/:sort", get(donator::list_receivers))
        .route("/donator/deactivate", post(donator::deactivate))
        .route(
            "/donator/favorite/:id",
            post(donator::favorite_cause).delete(donator::remove_favorite),
        )
        .route("/donator/favorites", get(donator::list_favorites))
        .route("/donator/add_donation", post(donator::add_donation))
        .route(
            "/donator/list_donations_made",
            get(donator::list_donations_made),
        )
        .route(
            "/donator/get_cause_products/:cause_id",
            get(donator::get_cause_products),
        )
}

fn receiver_routes() -> Router {
    Router::new()
        .route("/receiver/deactivate", post(receiver::deactivate))
        .route(
            "/receiver/list_donations_received",
            get(receiver::list_donations_received),
        )
        .route("/receiver/add_pix_key", post(receiver::add_pix_key))
        .route("/receiver/delete_pix_key", delete(receiver::delete_pix_key))
        .route("/receiver/add_product", post(receiver::add_product))
        .route("/receiver/update_product", put(receiver::update_product))
        .route(
            "/receiver/delete_product/:id",
            delete(receiver::delete_product),
        )
        .route("/receiver/get_products", get(receiver::get_products))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "message": "Welcome to the doar-api",
        "version": version,
        "endpoints": {
            "home": "/ (public)",
            "auth": "/login, /cadastrate (public)",
            "donator": "/donator/* (protected, donor role)",
            "receiver": "/receiver/* (protected, receiver role)",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
