use leavedesk_backend::{app, config::Config, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn mask_secret(s: &str) -> String {
    if s.len() <= 4 {
        return "****".to_string();
    }
    let prefix = s.chars().take(4).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leavedesk_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        jwt_secret = %mask_secret(&config.jwt_secret),
        jwt_expiration_hours = config.jwt_expiration_hours,
        annual_leave_cap = config.annual_leave_cap,
        status_transitions = %config.status_transitions,
        "Loaded configuration from environment/.env"
    );

    let addr = config.bind_addr;
    let app = app(AppState::in_memory(config));

    tracing::warn!("Leave data is held in memory only and is lost on restart");
    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
