use crate::support;
use crate::support::database::TestDatabase;
use actix_web::http::StatusCode;
use actix_web::web::{Json, Path};
use chrono::prelude::*;
use db::prelude::*;
use mela_api::controllers::events;
use mela_api::controllers::events::GuestListResponse;
use mela_api::models::PathParameters;
use serde_json;

#[actix_rt::test]
async fn create() {
    let database = TestDatabase::new();

    let json = Json(Event::create(
        "Diwali Mela".to_string(),
        Some("Community Grounds".to_string()),
        NaiveDate::from_ymd(2024, 11, 2),
        "America/Chicago".to_string(),
    ));

    let response = events::create((database.connection.clone().into(), json)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let event: Event = serde_json::from_str(body).unwrap();
    assert_eq!(event.name, "Diwali Mela".to_string());
    assert_eq!(event.event_date, NaiveDate::from_ymd(2024, 11, 2));
}

#[actix_rt::test]
async fn show() {
    let database = TestDatabase::new();
    let event = database.create_event().finish();

    let path = Path::from(PathParameters { id: event.id });
    let response = events::show((database.connection.clone().into(), path)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let found: Event = serde_json::from_str(body).unwrap();
    assert_eq!(found, event);
}

#[actix_rt::test]
async fn guest_list() {
    let database = TestDatabase::new();
    let event = database.create_event().on_today().finish();
    let pending_ticket = database.create_vendor_ticket().with_event(&event).finish();
    let checked_in_ticket = database
        .create_vendor_ticket()
        .with_event(&event)
        .checked_in()
        .finish();

    let path = Path::from(PathParameters { id: event.id });
    let response = events::guest_list((database.connection.clone().into(), path)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let guest_list: GuestListResponse = serde_json::from_str(body).unwrap();

    assert_eq!(guest_list.event.id, event.id);
    assert_eq!(guest_list.tickets.len(), 2);
    assert_eq!(guest_list.tickets_checked_in, 1);
    assert_eq!(guest_list.tickets_pending, 1);
    for entry in &guest_list.tickets {
        if entry.ticket.id == checked_in_ticket.id {
            assert_eq!(entry.validity, TicketValidity::AlreadyCheckedIn);
        } else {
            assert_eq!(entry.ticket.id, pending_ticket.id);
            assert_eq!(entry.validity, TicketValidity::Valid);
        }
    }
}
