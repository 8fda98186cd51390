pub mod database;

use actix_web::body::Body;
use actix_web::HttpResponse;
use std::str;

pub fn unwrap_body_to_string(response: &HttpResponse) -> Result<&str, &'static str> {
    match response.body().as_ref() {
        Some(Body::Bytes(binary)) => Ok(str::from_utf8(binary.as_ref()).unwrap()),
        _ => Err("Unexpected response body"),
    }
}
