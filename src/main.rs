use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use yoga::logging::init_tracing;
use yoga::metrics::{init_metrics, metrics_router};
use yoga::router::init_router;
use yoga::state::AppState;
use yoga_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
use yoga_db::{PgStore, init_db_pool, run_migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let db_config =
        DatabaseConfig::from_env().ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let pool = init_db_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let state = AppState::new(
        Arc::new(PgStore::new(pool)),
        JwtConfig::from_env(),
        CorsConfig::from_env(),
    );

    let mut app = init_router(state);
    if let Some(handle) = init_metrics()? {
        app = app.merge(metrics_router(handle));
    }

    let server = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(server.addr()).await?;
    info!(addr = %server.addr(), "Server listening");
    println!("🚀 Server running on http://{}", server.addr());
    println!("📚 Swagger UI available at http://{}/swagger-ui", server.addr());

    axum::serve(listener, app).await?;

    Ok(())
}
