use axum::extract::FromRequest;
use common_errors::AppError;

/// `Json` whose rejections render as the API's error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct EventBody<T>(pub T);
