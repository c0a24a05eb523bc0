use anyhow::Context;

use gosvg_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("invalid configuration")?;
    gosvg_observability::init(config.log_format);

    let app = gosvg_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        credit_on_submit = config.credit_on_submit,
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
