mod error;
mod solve;

use axum::http::Method;
use axum::routing::post;
use axum::{Router, serve};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use crate::solve::post_solve_handler;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/solve", post(post_solve_handler))
        .layer(ServiceBuilder::new().layer(cors_layer));

    let addr =
        std::env::var("CARAVAN_API_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_owned());

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("listening on {addr}");

    serve(listener, app).await?;

    Ok(())
}
