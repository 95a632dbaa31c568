use lineal_error::{ensure, LinealResult, StatusCode};
use serde::{Deserialize, Serialize};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Формат вывода событий.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Настройки логирования.
///
/// - `level`: базовый уровень (`trace`..`error`).
/// - `targets`: дополнительные директивы `EnvFilter`, например
///   `"lineal::collections=trace"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub ansi: bool,
    pub with_target: bool,
    pub with_line_numbers: bool,
    pub targets: Vec<String>,
}

impl LoggingConfig {
    /// Директива для `EnvFilter`: уровень, затем директивы по целям.
    pub fn build_filter_directive(&self) -> String {
        let mut parts = Vec::with_capacity(self.targets.len() + 1);
        parts.push(self.level.to_lowercase());
        parts.extend(
            self.targets
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        );
        parts.join(",")
    }

    pub fn validate(&self) -> LinealResult<()> {
        let level = self.level.to_lowercase();
        ensure!(
            LEVELS.contains(&level.as_str()),
            StatusCode::InvalidConfig,
            "unknown log level '{}'",
            self.level
        );
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            ansi: true,
            with_target: true,
            with_line_numbers: false,
            targets: Vec::new(),
        }
    }
}
