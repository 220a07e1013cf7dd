use basket_dashboard::config::DashboardConfig;
use basket_dashboard::corpus::source::{ArticleSource, MongoArticleSource};
use basket_dashboard::dashboard::handlers::router;
use basket_dashboard::dashboard::session::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = DashboardConfig::from_env()?;
    let source: Arc<dyn ArticleSource> = Arc::new(MongoArticleSource::from_config(&config));
    tracing::info!("Article store: {}", source.describe());
    let app = router(AppState::new(source));

    tracing::info!("Dashboard listening on http://{}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
