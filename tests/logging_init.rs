use lineal::{init_logging, LoggingConfig, StatusCode};

/// Отдельный бинарь: глобальный subscriber ставится один раз на процесс.
#[test]
fn test_init_logging_once() {
    let bad = LoggingConfig {
        level: "verbose".into(),
        ..LoggingConfig::default()
    };
    assert_eq!(
        init_logging(&bad).unwrap_err().status_code(),
        StatusCode::InvalidConfig
    );

    let config = LoggingConfig {
        ansi: false,
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_ok());

    let err = init_logging(&config).unwrap_err();
    assert_eq!(err.status_code(), StatusCode::InvalidOperation);
}
