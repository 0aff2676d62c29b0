/// Conditional logging module for development builds
///
/// The `log!` macro provides informational stderr logging that is compiled out
/// in production (release) builds by default.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```rust
/// use airway_graph::logging::log;
///
/// log!("Detected {} conflicts", 3);
/// ```
/// Conditionally log to stderr in development builds
///
/// In production release builds without the `console_logging` feature,
/// it compiles to nothing (zero overhead).
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            eprintln!($($arg),+);
        }
    };
}

pub use log;
