//! Convenience macros for structured logging

/// Log an error at `error` level and hand it back.
///
/// ```rust
/// use cronoszkevm_log::log_error;
///
/// let result: Result<(), String> = Err("boom".into());
/// let err = result.map_err(|e| log_error!(e, "startup failed"));
/// assert!(err.is_err());
/// ```
#[macro_export]
macro_rules! log_error {
    ($err:expr) => {{
        let e = $err;
        $crate::error!(error = %e);
        e
    }};
    ($err:expr, $($arg:tt)*) => {{
        let e = $err;
        $crate::error!(error = %e, $($arg)*);
        e
    }};
}
