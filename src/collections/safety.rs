use thiserror::Error;

/// Макрос для debug-time проверки инвариантов.
///
/// В release-сборках компилируется в no-op.
#[macro_export]
macro_rules! debug_assert_invariant {
    ($cond:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            if !$cond {
                panic!("Invariant violation: {}", format!($($arg)*));
            }
        }
    };
}

/// Макрос для валидации условий с возвратом ошибки.
#[macro_export]
macro_rules! validate {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Нарушение структурного инварианта списка.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Длина списка не соответствует реальному кол-ву узлов
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// Пустота головы и хвоста не согласована с длиной
    #[error("Head/tail mismatch: {message}")]
    BoundaryMismatch { message: String },
    /// Обнаружена циклическая ссылка
    #[error("Cyclic reference detected: {message}")]
    CyclicReference { message: String },
    /// Backward-ссылка указывает на неверный узел
    #[error("Invalid backward link: {message}")]
    InvalidBackwardLink { message: String },
}

impl lineal_error::ErrorExt for ValidationError {
    fn status_code(&self) -> lineal_error::StatusCode {
        lineal_error::StatusCode::InvariantViolation
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
