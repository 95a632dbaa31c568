/// Linear containers: doubly linked list, singly linked list, stack.
pub mod collections;
/// Settings loading (defaults, optional file, `LINEAL_*` environment).
pub mod config;
/// Logging setup on top of `tracing-subscriber`.
pub mod logging;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Containers and the invariant checker error.
pub use collections::{ForwardList, IndexedList, Stack, StackMode, ValidationError};
/// Settings.
pub use config::{Settings, StackModeKind, StackSettings};
/// Error types shared with the `lineal-error` crate.
pub use lineal_error::{CollectionError, LinealResult, StackError, StatusCode};
/// Logging configuration and initialization.
pub use logging::{init_logging, LogFormat, LoggingConfig};
