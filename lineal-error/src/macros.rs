/// Возвращает `Err(StackError)` из текущей функции.
///
/// - `bail!(err)`: готовая ошибка (`CollectionError`, `StackError`, ...);
/// - `bail!(code, "msg")` и `bail!(code, "fmt {}", arg)`: `GenericError`
///   с заданным кодом.
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::StackError::from($err))
    };
    ($code:expr, $msg:expr) => {
        return Err($crate::StackError::new(
            $crate::types::GenericError::new($code, $msg)
        ))
    };
    ($code:expr, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::StackError::new(
            $crate::types::GenericError::new($code, format!($fmt, $($arg)*))
        ))
    };
}

/// `bail!` с теми же аргументами, если условие ложно.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            $crate::bail!($err);
        }
    };
    ($cond:expr, $code:expr, $msg:expr) => {
        if !($cond) {
            $crate::bail!($code, $msg);
        }
    };
    ($cond:expr, $code:expr, $fmt:expr, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($code, $fmt, $($arg)*);
        }
    };
}

/// `.context(...)` для любого `Result`, чья ошибка сводится к
/// [`StackError`](crate::StackError).
///
/// ```ignore
/// use lineal_error::{LinealResult, ResultExt};
///
/// fn first(list: &lineal::IndexedList<u8>) -> LinealResult<u8> {
///     list.value_at(0).copied().context("reading list head")
/// }
/// ```
pub trait ResultExt<T> {
    fn context(
        self,
        message: impl Into<String>,
    ) -> Result<T, crate::StackError>;

    /// Сообщение строится только при ошибке.
    fn with_context<M: Into<String>>(
        self,
        message: impl FnOnce() -> M,
    ) -> Result<T, crate::StackError>;
}

impl<T, E: Into<crate::StackError>> ResultExt<T> for Result<T, E> {
    #[track_caller]
    fn context(
        self,
        message: impl Into<String>,
    ) -> Result<T, crate::StackError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err.into().context(message)),
        }
    }

    #[track_caller]
    fn with_context<M: Into<String>>(
        self,
        message: impl FnOnce() -> M,
    ) -> Result<T, crate::StackError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err.into().context(message())),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CollectionError, GenericError, LinealResult, StatusCode};

    fn pop_empty() -> Result<u8, CollectionError> {
        Err(CollectionError::Underflow)
    }

    #[test]
    fn test_bail_forwards_typed_error() {
        fn drain() -> LinealResult<()> {
            bail!(CollectionError::Underflow);
        }

        let err = drain().unwrap_err();
        assert_eq!(err.status_code(), StatusCode::EmptyCollection);
        assert_eq!(
            err.downcast_ref::<CollectionError>(),
            Some(&CollectionError::Underflow)
        );
    }

    #[test]
    fn test_ensure_builds_generic_error() {
        fn capacity(value: usize) -> LinealResult<usize> {
            ensure!(value > 0, StatusCode::InvalidConfig, "capacity must be positive");
            ensure!(value <= 8, StatusCode::InvalidConfig, "capacity {} above 8", value);
            Ok(value)
        }

        assert_eq!(capacity(4).ok(), Some(4));
        assert_eq!(
            capacity(0).unwrap_err().to_string(),
            "capacity must be positive"
        );

        let err = capacity(9).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::InvalidConfig);
        assert!(err.downcast_ref::<GenericError>().is_some());
        assert_eq!(err.to_string(), "capacity 9 above 8");
    }

    #[test]
    fn test_context_on_result() {
        let err = pop_empty().context("draining stack").unwrap_err();

        assert_eq!(err.contexts().len(), 1);
        assert_eq!(err.to_string(), "draining stack: stack underflow: pop from an empty stack");
        assert_eq!(err.status_code(), StatusCode::EmptyCollection);
    }

    #[test]
    fn test_with_context_not_called_on_ok() {
        let ok: Result<u8, CollectionError> = Ok(1);
        let value = ok
            .with_context(|| -> String { panic!("message built for Ok") })
            .unwrap();
        assert_eq!(value, 1);

        let err = pop_empty().with_context(|| format!("frame {}", 3)).unwrap_err();
        assert_eq!(err.contexts()[0].message, "frame 3");
    }

    #[test]
    fn test_context_chains_on_stack_error() {
        fn inner() -> LinealResult<u8> {
            pop_empty().context("inner")
        }

        let err = inner().context("outer").unwrap_err();
        assert_eq!(err.to_string(), "outer: inner: stack underflow: pop from an empty stack");
    }
}
