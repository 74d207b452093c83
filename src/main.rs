use anyhow::Context;
use axum::http::Method;
use product_api::config::AppConfig;
use product_api::observability::{init_tracing, HealthStatus};
use product_api::routes::create_router;
use product_api::state::AppState;
use product_api::store::InMemoryDocumentStore;
use product_api::types::Product;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        product_api::handlers::get_products,
        product_api::handlers::create_product,
        product_api::handlers::get_product,
        product_api::handlers::update_product,
        product_api::handlers::delete_product,
        product_api::observability::health_handler
    ),
    components(schemas(Product, HealthStatus)),
    tags(
        (name = "Product", description = "Product CRUD endpoints"),
        (name = "Health", description = "Service health")
    ),
    info(
        title = "Product API",
        description = "CRUD API for products backed by a document store",
        version = "1.0.0"
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;

    let store = Arc::new(InMemoryDocumentStore::new());
    let state = AppState::new(store, config.collection.clone());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);
    info!("Product collection: {}", config.collection);
    info!("Swagger UI: http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
