use crate::support;
use crate::support::database::TestDatabase;
use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use actix_web::web::Path;
use chrono::prelude::*;
use chrono::Duration;
use db::prelude::*;
use mela_api::controllers::tickets;
use mela_api::controllers::verifications;
use mela_api::controllers::verifications::VerificationResponse;
use mela_api::models::PathParameters;
use serde_json;
use uuid::Uuid;

async fn verify(database: &TestDatabase, uri: &str) -> Result<VerificationResponse, StatusCode> {
    let request = TestRequest::with_uri(uri).to_http_request();
    match verifications::show((database.connection.clone().into(), request)).await {
        Ok(response) => {
            if response.status() != StatusCode::OK {
                return Err(response.status());
            }
            let body = support::unwrap_body_to_string(&response).unwrap();
            Ok(serde_json::from_str(body).unwrap())
        }
        Err(error) => Err(error.error_response().status()),
    }
}

#[actix_rt::test]
async fn show_valid_ticket() {
    let database = TestDatabase::new();
    let event = database.create_event().on_today().finish();
    let ticket = database.create_vendor_ticket().with_event(&event).finish();

    let verification = verify(&database, &format!("/verify?id={}", ticket.id)).await.unwrap();
    assert_eq!(verification.validity, TicketValidity::Valid);
    assert_eq!(verification.ticket.id, ticket.id);
    assert_eq!(verification.ticket.event_name, event.name);
}

#[actix_rt::test]
async fn show_not_yet_active_and_expired_tickets() {
    let database = TestDatabase::new();

    let upcoming = database
        .create_event()
        .with_event_date(Utc::today().naive_utc() + Duration::days(14))
        .finish();
    let ticket = database.create_vendor_ticket().with_event(&upcoming).finish();
    let verification = verify(&database, &format!("/verify?id={}", ticket.id)).await.unwrap();
    assert_eq!(verification.validity, TicketValidity::NotYetActive);

    let past = database
        .create_event()
        .with_event_date(Utc::today().naive_utc() - Duration::days(14))
        .finish();
    let ticket = database.create_vendor_ticket().with_event(&past).finish();
    let verification = verify(&database, &format!("/verify?id={}", ticket.id)).await.unwrap();
    assert_eq!(verification.validity, TicketValidity::Expired);
}

#[actix_rt::test]
async fn show_checked_in_ticket_is_terminal() {
    let database = TestDatabase::new();
    let event = database.create_event().on_today().finish();
    let ticket = database
        .create_vendor_ticket()
        .with_event(&event)
        .checked_in()
        .finish();

    let verification = verify(&database, &format!("/verify?id={}", ticket.id)).await.unwrap();
    assert_eq!(verification.validity, TicketValidity::AlreadyCheckedIn);
}

#[actix_rt::test]
async fn scan_confirm_rescan_flow() {
    let database = TestDatabase::new();
    let event = database.create_event().on_today().finish();
    let ticket = database.create_vendor_ticket().with_event(&event).finish();
    let uri = format!("/verify?id={}", ticket.id);

    // First scan offers the confirm action
    let verification = verify(&database, &uri).await.unwrap();
    assert_eq!(verification.validity, TicketValidity::Valid);

    // Staff confirms
    let path = Path::from(PathParameters { id: ticket.id });
    let response = tickets::check_in((database.connection.clone().into(), path))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Any later scan of the same code reports the processed state
    let verification = verify(&database, &uri).await.unwrap();
    assert_eq!(verification.validity, TicketValidity::AlreadyCheckedIn);
}

#[actix_rt::test]
async fn show_distinguishes_invalid_codes_from_missing_tickets() {
    let database = TestDatabase::new();

    // No id parameter at all: the code is unreadable
    assert_eq!(verify(&database, "/verify").await.err().unwrap(), StatusCode::BAD_REQUEST);
    // An id that is not a ticket id
    assert_eq!(
        verify(&database, "/verify?id=12345").await.err().unwrap(),
        StatusCode::BAD_REQUEST
    );
    // A well formed id that was never issued
    assert_eq!(
        verify(&database, &format!("/verify?id={}", Uuid::new_v4())).await.err().unwrap(),
        StatusCode::NOT_FOUND
    );
}
