//! Employee directory REST server.
//!
//! Configuration comes from environment variables (a `.env` file is
//! honored):
//!
//! - `PORT` - listen port (default 3000)
//! - `DATABASE_URL` - Postgres connection string; only used when built with
//!   the `database` feature, otherwise the in-memory store runs
//! - `SEED_DATA_PATH` - employee seed JSON for the in-memory store; a
//!   bundled seed is used when absent
//!
//! ```bash
//! # In-memory store with bundled seed data
//! cargo run --bin directory_server
//!
//! # Postgres-backed
//! DATABASE_URL=postgresql://localhost:5432/employees \
//!     cargo run --bin directory_server --features database
//! ```

use std::sync::Arc;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use employee_directory::api::{create_employee_router, AppState};
use employee_directory::seed;
use employee_directory::service::EmployeeService;
use employee_directory::store::{EmployeeStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let store = build_store().await?;
    let service = Arc::new(EmployeeService::new(store));
    let app_state = AppState { service };

    // Build our application with routes and middleware
    let app = create_employee_router(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
    );

    // Determine port
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting employee directory on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(feature = "database")]
async fn build_store() -> Result<Arc<dyn EmployeeStore>, Box<dyn std::error::Error>> {
    use employee_directory::store::PgEmployeeStore;

    if let Ok(database_url) = std::env::var("DATABASE_URL") {
        info!("Connecting to database");
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(10)
            .connect(&database_url)
            .await?;
        let store = PgEmployeeStore::new(pool);
        store.run_migrations().await?;
        return Ok(Arc::new(store));
    }
    build_memory_store().await
}

#[cfg(not(feature = "database"))]
async fn build_store() -> Result<Arc<dyn EmployeeStore>, Box<dyn std::error::Error>> {
    if std::env::var("DATABASE_URL").is_ok() {
        tracing::warn!(
            "DATABASE_URL is set but this build lacks the `database` feature; using the in-memory store"
        );
    }
    build_memory_store().await
}

async fn build_memory_store() -> Result<Arc<dyn EmployeeStore>, Box<dyn std::error::Error>> {
    let store = MemoryStore::new();
    let seed_path = std::env::var("SEED_DATA_PATH").ok();
    let seeded = seed::seed_memory_store(&store, seed_path.as_deref()).await?;
    info!("Seeded in-memory store with {} employees", seeded);
    Ok(Arc::new(store))
}
