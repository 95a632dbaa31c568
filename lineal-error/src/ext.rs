use std::{any::Any, error::Error};

use crate::StatusCode;

/// Общий трейт ошибок `lineal` (object-safe).
///
/// Каждая ошибка сообщает свой [`StatusCode`] и позволяет
/// [`StackError`](crate::StackError) вернуть исходный тип через downcast.
pub trait ErrorExt: Error + Send + Sync + 'static {
    /// По умолчанию [`StatusCode::Internal`].
    fn status_code(&self) -> StatusCode {
        StatusCode::Internal
    }

    fn as_any(&self) -> &dyn Any;
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug)]
    struct Unclassified;

    impl fmt::Display for Unclassified {
        fn fmt(
            &self,
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            write!(f, "unclassified failure")
        }
    }

    impl Error for Unclassified {}

    impl ErrorExt for Unclassified {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_default_status_code_is_internal() {
        assert_eq!(Unclassified.status_code(), StatusCode::Internal);
        assert!(Unclassified.status_code().is_critical());
    }

    #[test]
    fn test_trait_object_downcast() {
        let boxed: Box<dyn ErrorExt> = Box::new(Unclassified);
        assert!(boxed.as_any().downcast_ref::<Unclassified>().is_some());
    }
}
