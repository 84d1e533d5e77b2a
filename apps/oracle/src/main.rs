//! Process entrypoint: load environment, wire up the composition root,
//! bind the listener.

use astral_oracle::config::Config;
use astral_oracle::routes::build_router;
use astral_oracle::state::AppState;
use dotenvy::dotenv;
use tracing::info;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    astral_telemetry::init_tracing("astral_oracle");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_stack_size(4 * 1024 * 1024)
        .build()?;

    runtime.block_on(async {
        let config = Config::from_env()?;
        let port = config.port;
        let state = AppState::new(config);
        let router = build_router(state).into_make_service_with_connect_info::<std::net::SocketAddr>();

        let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
        info!(port, "astral-oracle listening");
        axum::serve(listener, router).await?;

        Ok::<(), anyhow::Error>(())
    })
}
