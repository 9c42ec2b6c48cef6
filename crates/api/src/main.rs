use anyhow::Context;

use prodapi_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    prodapi_observability::init(config.log_format);

    for var in ApiConfig::unset_vars(|key| std::env::var(key).ok()) {
        tracing::warn!("{var} not set; using default");
    }

    tracing::info!(
        openapi = %config.openapi_path.display(),
        "serving API docs at /api/docs"
    );

    let app = prodapi_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
