use std::sync::Arc;

use anyhow::Context;

use orderflow_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    orderflow_observability::init();

    let config = AppConfig::from_env()?;
    let services = orderflow_api::app::services::build_services(&config)?;
    let app = orderflow_api::app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
