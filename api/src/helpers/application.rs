use crate::errors::*;
use actix_web::HttpResponse;

pub fn bad_request(message: &str) -> Result<HttpResponse, ApiError> {
    warn!("Bad request: {}", message);
    let error: ApiError = ApplicationError::bad_request(message).into();
    // Error required for triggering middleware rollback
    Ok(HttpResponse::from_error(error.into()))
}

pub fn unprocessable(message: &str) -> Result<HttpResponse, ApiError> {
    warn!("Unprocessable: {}", message);
    let error: ApiError = ApplicationError::unprocessable(message).into();
    // Error required for triggering middleware rollback
    Ok(HttpResponse::from_error(error.into()))
}

pub fn not_found() -> Result<HttpResponse, ApiError> {
    let error: ApiError = NotFoundError {}.into();
    // Error required for triggering middleware rollback
    Ok(HttpResponse::from_error(error.into()))
}

pub fn internal_server_error(message: &str) -> Result<HttpResponse, ApiError> {
    error!("Internal Server Error: {}", message);
    let error: ApiError = ApplicationError::new(message.to_string()).into();
    // Error required for triggering middleware rollback
    Ok(HttpResponse::from_error(error.into()))
}

pub fn no_content() -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::NoContent().finish())
}
