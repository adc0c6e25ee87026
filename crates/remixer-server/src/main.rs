use remixer_server::config::RemixerConfig;
use remixer_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = RemixerConfig::from_env()?;
    let info = config.info();
    tracing::info!(
        provider = %info.provider,
        model = %info.model,
        llm_key = %info.llm_key_hint,
        store_url = %info.store_url,
        store_key = %info.store_key_hint,
        table = %info.table,
        "configuration loaded"
    );

    let controller = config.build_panel()?;
    let app = remixer_server::router(AppState::new(controller));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
