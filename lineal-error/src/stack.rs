//! Ошибка с цепочкой контекстов.
//!
//! `StackError` оборачивает исходную ошибку (`CollectionError`,
//! `GenericError`, `ValidationError` из `lineal`) и накапливает описания
//! шагов, через которые она прошла: «загрузка настроек» → «проверка
//! логирования» → исходная причина. Код статуса всегда берётся у исходной
//! ошибки.

use std::{error::Error, fmt, panic::Location, sync::Arc};

use crate::{ErrorExt, LogLevel, StatusCode};

#[derive(Clone)]
pub struct StackError {
    source: Arc<dyn ErrorExt>,
    /// В порядке добавления: первым идёт ближайший к причине шаг.
    frames: Vec<ErrorContext>,
}

/// Один шаг цепочки: описание и место вызова `context`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    pub message: String,
    pub location: &'static Location<'static>,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl StackError {
    pub fn new<E: ErrorExt>(err: E) -> Self {
        Self {
            source: Arc::new(err),
            frames: Vec::new(),
        }
    }

    /// Добавляет шаг к цепочке, запоминая место вызова.
    #[track_caller]
    pub fn context(
        mut self,
        message: impl Into<String>,
    ) -> Self {
        self.frames.push(ErrorContext {
            message: message.into(),
            location: Location::caller(),
        });
        self
    }

    /// Код исходной ошибки; контексты его не меняют.
    pub fn status_code(&self) -> StatusCode {
        self.source.status_code()
    }

    pub fn contexts(&self) -> &[ErrorContext] {
        &self.frames
    }

    /// Исходная ошибка конкретного типа, если она такова.
    pub fn downcast_ref<T: ErrorExt>(&self) -> Option<&T> {
        self.source.as_any().downcast_ref::<T>()
    }

    pub fn log_level(&self) -> LogLevel {
        self.status_code().log_level()
    }

    pub fn is_critical(&self) -> bool {
        self.status_code().is_critical()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для StackError
////////////////////////////////////////////////////////////////////////////////

/// `внешний шаг: внутренний шаг: причина`. В альтернативной форме (`{:#}`)
/// каждый шаг выводится отдельной строкой с местом вызова.
impl fmt::Display for StackError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} [{}]", self.source, self.status_code())?;
            for frame in &self.frames {
                write!(
                    f,
                    "\n  while {} (at {}:{})",
                    frame.message,
                    frame.location.file(),
                    frame.location.line()
                )?;
            }
            return Ok(());
        }

        for frame in self.frames.iter().rev() {
            write!(f, "{}: ", frame.message)?;
        }
        write!(f, "{}", self.source)
    }
}

impl fmt::Debug for StackError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("StackError")
            .field("status_code", &self.status_code())
            .field("source", &self.source)
            .field("contexts", &self.frames)
            .finish()
    }
}

impl Error for StackError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl<E: ErrorExt> From<E> for StackError {
    fn from(err: E) -> Self {
        StackError::new(err)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
