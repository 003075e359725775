use dotenvy::dotenv;
use tracing::info;

use ecoai_api::infra::{
    app::create_app,
    config::AppConfig,
    error::InfraError,
    setup::{init_app_state, init_tracing},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(config.log_file.as_deref())?;

    let bind_addr = config.bind_addr;
    let app = create_app(init_app_state(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(InfraError::TcpBind)?;

    info!(
        "Backend listening at {}",
        &listener.local_addr().map_err(InfraError::TcpBind)?
    );

    axum::serve(listener, app)
        .await
        .map_err(InfraError::Server)?;

    Ok(())
}
