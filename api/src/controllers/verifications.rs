use crate::database::Connection;
use crate::errors::*;
use crate::helpers::application;
use crate::utils::codes;
use actix_web::{HttpRequest, HttpResponse};
use chrono::prelude::*;
use db::prelude::*;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct VerificationResponse {
    pub validity: TicketValidity,
    pub ticket: VerifiableTicket,
}

/// The target of a scanned code. The ticket id is pulled from the raw query
/// string so that a mangled code reads as "invalid code" rather than
/// "ticket not found".
pub async fn show((connection, request): (Connection, HttpRequest)) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();

    let ticket_id = codes::ticket_id_from_query(request.query_string())?;

    let ticket = match VendorTicket::find_verifiable(ticket_id, connection).optional()? {
        Some(ticket) => ticket,
        None => return application::not_found(),
    };
    let validity = ticket.validity(Utc::now())?;

    Ok(HttpResponse::Ok().json(&VerificationResponse { validity, ticket }))
}
