pub mod config;
mod filters;
mod formatter;

pub use config::{LogFormat, LoggingConfig};
use lineal_error::{GenericError, LinealResult, ResultExt, StatusCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Инициализация глобального subscriber'а по конфигурации.
///
/// Повторный вызов возвращает ошибку `InvalidOperation`.
pub fn init_logging(config: &LoggingConfig) -> LinealResult<()> {
    config.validate().context("initializing logging")?;

    let env_filter = filters::build_filter_from_config(config);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(formatter::build_formatter_from_config(config))
        .try_init()
        .map_err(|e| {
            GenericError::new(
                StatusCode::InvalidOperation,
                format!("logging already initialized: {e}"),
            )
        })?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        format = ?config.format,
        "Logging system initialized"
    );

    Ok(())
}
