use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки линейных коллекций (списков и стека).
///
/// Ни одна операция не «обрезает» индекс и не повторяется внутри: при ошибке
/// структура остаётся без изменений.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Индекс вне диапазона `[-len, len - 1]` или коллекция пуста.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: isize, len: usize },
    /// Push в заполненный стек фиксированной ёмкости.
    #[error("stack overflow: capacity {capacity} reached")]
    Overflow { capacity: usize },
    /// Pop из пустого стека.
    #[error("stack underflow: pop from an empty stack")]
    Underflow,
    /// Не удалось заранее выделить слоты фиксированного стека.
    #[error("cannot allocate {capacity} stack slots")]
    AllocationFailed { capacity: usize },
}

impl ErrorExt for CollectionError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::IndexOutOfBounds { .. } => StatusCode::IndexOutOfBounds,
            Self::Overflow { .. } | Self::AllocationFailed { .. } => StatusCode::CapacityExceeded,
            Self::Underflow => StatusCode::EmptyCollection,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
