use crate::errors::*;
use actix_web::{http::StatusCode, HttpResponse};
use db::utils::errors::ErrorCode::ValidationError;
use db::utils::errors::*;
use diesel::result::Error as DieselError;
use r2d2;
use serde_json::Error as SerdeError;
use std::error::Error;
use std::fmt::Debug;
use std::string::ToString;
use uuid::parser::ParseError as UuidParseError;

pub trait ConvertToWebError: Debug + Error + ToString {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    fn to_response(&self) -> HttpResponse;
}

fn internal_error(message: &str) -> HttpResponse {
    status_code_and_message(StatusCode::INTERNAL_SERVER_ERROR, message)
}

fn not_found() -> HttpResponse {
    status_code_and_message(StatusCode::NOT_FOUND, "Not found")
}

fn status_code_and_message(code: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(code).json(json!({ "error": message.to_string() }))
}

impl ConvertToWebError for dyn Error {
    fn to_response(&self) -> HttpResponse {
        error!("General error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for DieselError {
    fn to_response(&self) -> HttpResponse {
        error!("Diesel error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for r2d2::Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::SERVICE_UNAVAILABLE
    }
    fn to_response(&self) -> HttpResponse {
        error!("R2D2 error: {}", self);
        status_code_and_message(StatusCode::SERVICE_UNAVAILABLE, "Connection error")
    }
}

impl ConvertToWebError for NotFoundError {
    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
    fn to_response(&self) -> HttpResponse {
        not_found()
    }
}

impl ConvertToWebError for UuidParseError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
    fn to_response(&self) -> HttpResponse {
        warn!("UUID parse error: {}", self);
        status_code_and_message(StatusCode::BAD_REQUEST, "Invalid input")
    }
}

impl ConvertToWebError for EnumParseError {
    fn to_response(&self) -> HttpResponse {
        error!("Enum parse error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for ApplicationError {
    fn status_code(&self) -> StatusCode {
        match self.error_type {
            ApplicationErrorType::BadRequest => StatusCode::BAD_REQUEST,
            ApplicationErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApplicationErrorType::ServerConfigError => StatusCode::INTERNAL_SERVER_ERROR,
            ApplicationErrorType::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
    fn to_response(&self) -> HttpResponse {
        warn!("Application error: {}", self);

        let message = match self.error_type {
            ApplicationErrorType::Internal | ApplicationErrorType::ServerConfigError => "Internal error",
            _ => &self.reason,
        };
        status_code_and_message(self.status_code(), message)
    }
}

impl ConvertToWebError for SerdeError {
    fn to_response(&self) -> HttpResponse {
        error!("Serde error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for chrono::ParseError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
    fn to_response(&self) -> HttpResponse {
        status_code_and_message(StatusCode::BAD_REQUEST, "Invalid input")
    }
}

impl ConvertToWebError for url::ParseError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
    fn to_response(&self) -> HttpResponse {
        status_code_and_message(StatusCode::BAD_REQUEST, "Invalid URL")
    }
}

impl ConvertToWebError for std::io::Error {
    fn to_response(&self) -> HttpResponse {
        error!("IO error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for DatabaseError {
    fn status_code(&self) -> StatusCode {
        match self.code {
            1000 | 1100 => StatusCode::BAD_REQUEST,
            2000 => StatusCode::NOT_FOUND,
            3400 => StatusCode::CONFLICT,
            // Transient store failure; the caller may retry
            4000 => StatusCode::SERVICE_UNAVAILABLE,
            7000 | 7200 => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn to_response(&self) -> HttpResponse {
        let message = match self.code {
            1000 => "Invalid input",
            1100 => "Missing input",
            2000 => "No results",
            3000 => "Query error",
            3100 => "Could not insert record",
            3200 => "Could not update record",
            3400 => self
                .cause
                .as_ref()
                .map(|s| s.as_str())
                .unwrap_or("Duplicate record exists"),
            4000 => "Connection error",
            7000 => self.cause.as_ref().map(|s| s.as_str()).unwrap_or("Unknown Cause"),
            7200 => match &self.error_code {
                ValidationError { errors } => {
                    return HttpResponse::UnprocessableEntity()
                        .json(json!({"error": "Validation error".to_string(), "fields": errors}))
                }
                _ => "Validation error",
            },
            5000 | 7300 => "Internal error",
            _ => "Unknown error",
        };
        status_code_and_message(self.status_code(), message)
    }
}
