use crate::errors::*;
use actix_web::http::StatusCode;
use actix_web::{error::ResponseError, HttpResponse};
use chrono;
use db::utils::errors::*;
use diesel::result::Error as DieselError;
use serde_json::Error as SerdeError;
use std::error::Error;
use std::fmt;
use url;
use uuid::parser::ParseError as UuidParseError;

#[derive(Debug)]
pub struct ApiError(Box<dyn ConvertToWebError + Send + Sync>);

macro_rules! error_conversion {
    ($e: ty) => {
        impl From<$e> for ApiError {
            fn from(e: $e) -> Self {
                ApiError(Box::new(e))
            }
        }
    };
}

error_conversion!(ApplicationError);
error_conversion!(DatabaseError);
error_conversion!(r2d2::Error);
error_conversion!(DieselError);
error_conversion!(EnumParseError);
error_conversion!(NotFoundError);
error_conversion!(SerdeError);
error_conversion!(UuidParseError);
error_conversion!(chrono::ParseError);
error_conversion!(std::io::Error);
error_conversion!(url::ParseError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&*self.0.to_string())
    }
}

impl Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.0.status_code()
    }
    fn error_response(&self) -> HttpResponse {
        self.0.to_response()
    }
}

impl ApiError {
    pub fn new(inner: Box<dyn ConvertToWebError + Send + Sync>) -> ApiError {
        ApiError(inner)
    }

    pub fn into_inner(&self) -> &dyn ConvertToWebError {
        self.0.as_ref()
    }
}
