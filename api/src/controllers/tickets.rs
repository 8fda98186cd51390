use crate::database::Connection;
use crate::errors::*;
use crate::helpers::application;
use crate::models::PathParameters;
use crate::server::AppState;
use crate::utils::codes;
use actix_web::web::{Data, Json, Path};
use actix_web::HttpResponse;
use chrono::prelude::*;
use db::prelude::*;

#[derive(Clone, Deserialize, Serialize)]
pub struct IssueTicketRequest {
    pub holder_name: String,
    pub booth_type: String,
    pub vendor_organization: Option<String>,
}

/// Issues a ticket for an accepted vendor application.
pub async fn create(
    (connection, parameters, issue_request): (Connection, Path<PathParameters>, Json<IssueTicketRequest>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let event = Event::find(parameters.id, connection)?;
    let issue_request = issue_request.into_inner();

    let ticket = VendorTicket::create(
        event.id,
        issue_request.holder_name,
        issue_request.booth_type,
        issue_request.vendor_organization,
    )
    .commit(connection)?;

    Ok(HttpResponse::Created().json(&ticket))
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct ShowTicketResponse {
    pub ticket: VerifiableTicket,
    pub validity: TicketValidity,
}

pub async fn show((connection, parameters): (Connection, Path<PathParameters>)) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let ticket = VendorTicket::find_verifiable(parameters.id, connection)?;
    let validity = ticket.validity(Utc::now())?;

    Ok(HttpResponse::Ok().json(&ShowTicketResponse { ticket, validity }))
}

pub async fn show_code(
    (connection, parameters, state): (Connection, Path<PathParameters>, Data<AppState>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    // No codes for ids that were never issued
    let ticket = VendorTicket::find(parameters.id, connection)?;

    let verification_url = codes::encode(ticket.id, &state.config.front_end_url)?;
    let pixel_size = state.config.code_pixel_size;
    let image_url = state
        .service_locator
        .create_code_renderer()?
        .image_url(&verification_url, pixel_size)?;

    Ok(HttpResponse::Ok().json(&codes::CodePayload {
        verification_url,
        image_url,
        pixel_size,
    }))
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInConfirmation {
    CheckedIn,
    AlreadyCheckedIn,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct CheckInResponse {
    pub status: CheckInConfirmation,
    pub checked_in_at: Option<NaiveDateTime>,
    pub ticket: VendorTicket,
}

/// Staff confirmation from the scan view. Scanning an already processed
/// ticket is informational, not an error; only an unknown id fails.
pub async fn check_in(
    (connection, parameters): (Connection, Path<PathParameters>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();

    match VendorTicket::check_in(parameters.id, connection)? {
        CheckInResults::CheckedIn(ticket) => Ok(HttpResponse::Ok().json(&CheckInResponse {
            status: CheckInConfirmation::CheckedIn,
            checked_in_at: ticket.checked_in_at,
            ticket,
        })),
        CheckInResults::AlreadyCheckedIn(ticket) => Ok(HttpResponse::Ok().json(&CheckInResponse {
            status: CheckInConfirmation::AlreadyCheckedIn,
            checked_in_at: ticket.checked_in_at,
            ticket,
        })),
        CheckInResults::TicketNotFound => application::not_found(),
    }
}
