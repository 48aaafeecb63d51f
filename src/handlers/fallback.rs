use crate::error::AppError;

/// Matched path, unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// No route for the path.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
