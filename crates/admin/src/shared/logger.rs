use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info,admin=debug";

/// Инициализация системы трассировки (tracing) для хоста админки.
///
/// Фильтр берётся из `RUST_LOG`, иначе `DEFAULT_FILTER`.
/// Повторный вызов возвращает ошибку, а не паникует.
pub fn initialize() -> anyhow::Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into());
    initialize_with_filter(&filter)
}

pub fn initialize_with_filter(filter: &str) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(filter)?)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Cannot initialize tracing: {}", e))?;

    tracing::info!("Admin tracing initialized with filter '{}'", filter);
    Ok(())
}
