use crate::database::Connection;
use crate::errors::*;
use crate::models::PathParameters;
use actix_web::web::{Json, Path};
use actix_web::HttpResponse;
use chrono::prelude::*;
use db::prelude::*;

pub async fn create((connection, new_event): (Connection, Json<NewEvent>)) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let event = new_event.into_inner().commit(connection)?;
    Ok(HttpResponse::Created().json(&event))
}

pub async fn show((connection, parameters): (Connection, Path<PathParameters>)) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let event = Event::find(parameters.id, connection)?;
    Ok(HttpResponse::Ok().json(&event))
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct GuestListTicket {
    pub ticket: VerifiableTicket,
    pub validity: TicketValidity,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct GuestListResponse {
    pub event: Event,
    pub tickets: Vec<GuestListTicket>,
    pub tickets_checked_in: u32,
    pub tickets_pending: u32,
}

/// Event day list view. Counts and per ticket display state are computed
/// from the store on every request; refreshing the list is the only way to
/// pick up other devices' check-ins.
pub async fn guest_list(
    (connection, parameters): (Connection, Path<PathParameters>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let event = Event::find(parameters.id, connection)?;
    let now = Utc::now();

    let mut tickets = Vec::new();
    let mut tickets_checked_in = 0;
    let mut tickets_pending = 0;
    for ticket in VendorTicket::find_for_event(event.id, connection)? {
        if ticket.status == CheckInStatus::CheckedIn {
            tickets_checked_in += 1;
        } else {
            tickets_pending += 1;
        }
        let validity = ticket.validity(now)?;
        tickets.push(GuestListTicket { ticket, validity });
    }

    Ok(HttpResponse::Ok().json(&GuestListResponse {
        event,
        tickets,
        tickets_checked_in,
        tickets_pending,
    }))
}
