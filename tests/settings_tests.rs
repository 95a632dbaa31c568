use std::{env, io::Write};

use lineal::{
    config::MAX_STACK_CAPACITY, LogFormat, Settings, Stack, StackMode, StackModeKind,
    StackSettings, StatusCode,
};
use serial_test::serial;
use tempfile::NamedTempFile;

const VARS: [&str; 4] = [
    "LINEAL_STACK__MODE",
    "LINEAL_STACK__CAPACITY",
    "LINEAL_LOGGING__LEVEL",
    "LINEAL_LOGGING__FORMAT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_load_defaults() {
    clear_env();

    let settings = Settings::load().unwrap();

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.stack.mode(), StackMode::Dynamic);
}

#[test]
#[serial]
fn test_env_overrides_defaults() {
    clear_env();
    env::set_var("LINEAL_STACK__MODE", "fixed");
    env::set_var("LINEAL_STACK__CAPACITY", "5");
    env::set_var("LINEAL_LOGGING__FORMAT", "json");

    let settings = Settings::load().unwrap();
    clear_env();

    assert_eq!(settings.stack.mode, StackModeKind::Fixed);
    assert_eq!(settings.stack.capacity, 5);
    assert_eq!(settings.logging.format, LogFormat::Json);

    let stack: Stack<i32> = Stack::from_settings(&settings.stack).unwrap();
    assert_eq!(stack.capacity(), Some(5));
}

#[test]
#[serial]
fn test_file_source_and_env_precedence() {
    clear_env();
    let file = toml_file(
        r#"
[stack]
mode = "fixed"
capacity = 12

[logging]
level = "debug"
format = "pretty"
targets = ["lineal::collections=trace"]
"#,
    );

    let settings = Settings::load_from(Some(file.path())).unwrap();
    assert_eq!(settings.stack.capacity, 12);
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.logging.format, LogFormat::Pretty);
    assert_eq!(
        settings.logging.build_filter_directive(),
        "debug,lineal::collections=trace"
    );

    env::set_var("LINEAL_STACK__CAPACITY", "32");
    let settings = Settings::load_from(Some(file.path())).unwrap();
    clear_env();

    assert_eq!(settings.stack.mode, StackModeKind::Fixed);
    assert_eq!(settings.stack.capacity, 32);
}

#[test]
#[serial]
fn test_missing_file_is_load_error() {
    clear_env();

    let err = Settings::load_validated(Some(std::path::Path::new(
        "/definitely/not/here/lineal.toml",
    )))
    .unwrap_err();

    assert_eq!(err.status_code(), StatusCode::ConfigLoadFailed);
    assert!(err
        .to_string()
        .starts_with("loading settings from /definitely/not/here/lineal.toml: "));
}

#[test]
#[serial]
fn test_validation_rejects_zero_fixed_capacity() {
    clear_env();
    env::set_var("LINEAL_STACK__MODE", "fixed");
    env::set_var("LINEAL_STACK__CAPACITY", "0");

    let result = Settings::load_validated(None);
    clear_env();

    assert_eq!(result.unwrap_err().status_code(), StatusCode::InvalidConfig);
}

#[test]
#[serial]
fn test_validation_rejects_unknown_log_level() {
    clear_env();
    env::set_var("LINEAL_LOGGING__LEVEL", "chatty");

    let result = Settings::load_validated(None);
    clear_env();

    assert_eq!(result.unwrap_err().status_code(), StatusCode::InvalidConfig);
}

#[test]
#[serial]
fn test_huge_fixed_capacity_is_rejected_not_allocated() {
    clear_env();
    env::set_var("LINEAL_STACK__MODE", "fixed");
    env::set_var("LINEAL_STACK__CAPACITY", usize::MAX.to_string());

    let result = Settings::load_validated(None);
    clear_env();

    let err = result.unwrap_err();
    assert!(
        matches!(
            err.status_code(),
            StatusCode::InvalidConfig | StatusCode::ConfigLoadFailed
        ),
        "got: {err}"
    );

    env::set_var("LINEAL_STACK__MODE", "fixed");
    env::set_var(
        "LINEAL_STACK__CAPACITY",
        (MAX_STACK_CAPACITY + 1).to_string(),
    );
    let result = Settings::load_validated(None);
    clear_env();

    let err = result.unwrap_err();
    assert_eq!(err.status_code(), StatusCode::InvalidConfig);
    assert!(err.to_string().starts_with("validating settings: "));
}

#[test]
fn test_stack_from_oversized_settings_is_an_error() {
    let settings = StackSettings {
        mode: StackModeKind::Fixed,
        capacity: usize::MAX,
    };

    let err: lineal::StackError = Stack::<u64>::from_settings(&settings).unwrap_err().into();
    assert_eq!(err.status_code(), StatusCode::CapacityExceeded);

    let settings = StackSettings {
        mode: StackModeKind::Fixed,
        capacity: MAX_STACK_CAPACITY,
    };
    let stack = Stack::<u8>::from_settings(&settings).unwrap();
    assert_eq!(stack.capacity(), Some(MAX_STACK_CAPACITY));
}
