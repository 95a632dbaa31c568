use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use lineal_error::{ensure, GenericError, LinealResult, ResultExt, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{collections::StackMode, logging::LoggingConfig};

/// Ёмкость фиксированного стека по умолчанию.
pub const DEFAULT_STACK_CAPACITY: usize = 64;

/// Верхняя граница ёмкости фиксированного стека из конфигурации.
pub const MAX_STACK_CAPACITY: usize = 1 << 24;

/// Режим стека в конфигурации (`"fixed"` / `"dynamic"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackModeKind {
    Fixed,
    #[default]
    Dynamic,
}

/// Настройки стеков, создаваемых через [`Stack::from_settings`](crate::Stack::from_settings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackSettings {
    pub mode: StackModeKind,
    /// Учитывается только в режиме `fixed`.
    pub capacity: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub stack: StackSettings,
    pub logging: LoggingConfig,
}

impl StackSettings {
    pub fn mode(&self) -> StackMode {
        match self.mode {
            StackModeKind::Fixed => StackMode::Fixed {
                capacity: self.capacity,
            },
            StackModeKind::Dynamic => StackMode::Dynamic,
        }
    }
}

impl Default for StackSettings {
    fn default() -> Self {
        Self {
            mode: StackModeKind::Dynamic,
            capacity: DEFAULT_STACK_CAPACITY,
        }
    }
}

impl Settings {
    /// Значения по умолчанию + переменные окружения `LINEAL_*`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Значения по умолчанию, затем файл (если задан), затем переменные
    /// окружения с префиксом `LINEAL_` и `__` для вложенности, например
    /// `LINEAL_STACK__CAPACITY=128`.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("stack.mode", "dynamic")?
            .set_default("stack.capacity", DEFAULT_STACK_CAPACITY as i64)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let cfg = builder
            .add_source(
                Environment::with_prefix("LINEAL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        cfg.try_deserialize()
    }

    /// Загружает и проверяет настройки, сводя ошибки к `StackError`.
    pub fn load_validated(path: Option<&Path>) -> LinealResult<Self> {
        let settings = Self::load_from(path)
            .map_err(|e| GenericError::new(StatusCode::ConfigLoadFailed, e.to_string()))
            .with_context(|| match path {
                Some(path) => format!("loading settings from {}", path.display()),
                None => "loading settings".to_string(),
            })?;
        settings.validate().context("validating settings")?;
        Ok(settings)
    }

    pub fn validate(&self) -> LinealResult<()> {
        if self.stack.mode == StackModeKind::Fixed {
            ensure!(
                self.stack.capacity > 0,
                StatusCode::InvalidConfig,
                "fixed stack requires a positive capacity"
            );
            ensure!(
                self.stack.capacity <= MAX_STACK_CAPACITY,
                StatusCode::InvalidConfig,
                "fixed stack capacity {} exceeds {}",
                self.stack.capacity,
                MAX_STACK_CAPACITY
            );
        }
        self.logging.validate().context("logging")
    }
}
