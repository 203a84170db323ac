/// Logs an error and wraps it into an `AppError` variant with context
///
/// # Example
/// ```ignore
/// with_context!(client.get(url).send().await, NetworkError, "Failed to reach SWAPI")
/// ```
#[macro_export]
macro_rules! with_context {
    ($result:expr, $error_type:ident, $context:expr) => {
        $result.map_err(|e| {
            tracing::error!("{}: {}", $context, e);
            $crate::AppError::$error_type(format!("{}: {}", $context, e))
        })
    };
}
