use crate::support;
use crate::support::database::TestDatabase;
use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::web::{Data, Json, Path};
use db::prelude::*;
use mela_api::config::{Config, Environment};
use mela_api::controllers::tickets;
use mela_api::controllers::tickets::{CheckInConfirmation, CheckInResponse, IssueTicketRequest, ShowTicketResponse};
use mela_api::database::Database;
use mela_api::models::PathParameters;
use mela_api::server::AppState;
use mela_api::utils::codes;
use serde_json;
use uuid::Uuid;

fn test_state() -> Data<AppState> {
    let config = Config::new(Environment::Test);
    let database = Database::from_config(&config);
    Data::new(AppState::new(config, database))
}

#[actix_rt::test]
async fn create() {
    let database = TestDatabase::new();
    let event = database.create_event().finish();

    let json = Json(IssueTicketRequest {
        holder_name: "Asha Patel".to_string(),
        booth_type: "Food".to_string(),
        vendor_organization: Some("Asha's Kitchen".to_string()),
    });
    let path = Path::from(PathParameters { id: event.id });

    let response = tickets::create((database.connection.clone().into(), path, json))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let ticket: VendorTicket = serde_json::from_str(body).unwrap();
    assert_eq!(ticket.event_id, event.id);
    assert_eq!(ticket.holder_name, "Asha Patel".to_string());
    assert_eq!(ticket.status, CheckInStatus::Pending);
    assert!(ticket.checked_in_at.is_none());
}

#[actix_rt::test]
async fn create_fails_with_blank_holder_name() {
    let database = TestDatabase::new();
    let event = database.create_event().finish();

    let json = Json(IssueTicketRequest {
        holder_name: "".to_string(),
        booth_type: "Food".to_string(),
        vendor_organization: None,
    });
    let path = Path::from(PathParameters { id: event.id });

    let error = tickets::create((database.connection.clone().into(), path, json))
        .await
        .err()
        .unwrap();
    assert_eq!(error.error_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_rt::test]
async fn create_fails_for_missing_event() {
    let database = TestDatabase::new();

    let json = Json(IssueTicketRequest {
        holder_name: "Asha Patel".to_string(),
        booth_type: "Food".to_string(),
        vendor_organization: None,
    });
    let path = Path::from(PathParameters { id: Uuid::new_v4() });

    let error = tickets::create((database.connection.clone().into(), path, json))
        .await
        .err()
        .unwrap();
    assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn show() {
    let database = TestDatabase::new();
    let event = database.create_event().on_today().finish();
    let ticket = database.create_vendor_ticket().with_event(&event).finish();

    let path = Path::from(PathParameters { id: ticket.id });
    let response = tickets::show((database.connection.clone().into(), path)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let ticket_response: ShowTicketResponse = serde_json::from_str(body).unwrap();
    assert_eq!(ticket_response.ticket.id, ticket.id);
    assert_eq!(ticket_response.ticket.event_name, event.name);
    assert_eq!(ticket_response.validity, TicketValidity::Valid);
}

#[actix_rt::test]
async fn show_code() {
    let database = TestDatabase::new();
    let ticket = database.create_vendor_ticket().finish();
    let state = test_state();

    let path = Path::from(PathParameters { id: ticket.id });
    let response = tickets::show_code((database.connection.clone().into(), path, state.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let payload: codes::CodePayload = serde_json::from_str(body).unwrap();

    // The encoded URL resolves back to this exact ticket
    assert_eq!(codes::decode(&payload.verification_url).unwrap(), ticket.id);
    assert_eq!(payload.pixel_size, state.config.code_pixel_size);
    assert!(payload
        .image_url
        .contains(&format!("size={0}x{0}", state.config.code_pixel_size)));
}

#[actix_rt::test]
async fn show_code_fails_for_missing_ticket() {
    let database = TestDatabase::new();
    let state = test_state();

    let path = Path::from(PathParameters { id: Uuid::new_v4() });
    let error = tickets::show_code((database.connection.clone().into(), path, state))
        .await
        .err()
        .unwrap();
    assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn check_in() {
    let database = TestDatabase::new();
    let event = database.create_event().on_today().finish();
    let ticket = database.create_vendor_ticket().with_event(&event).finish();

    let path = Path::from(PathParameters { id: ticket.id });
    let response = tickets::check_in((database.connection.clone().into(), path))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let check_in_response: CheckInResponse = serde_json::from_str(body).unwrap();
    assert_eq!(check_in_response.status, CheckInConfirmation::CheckedIn);
    assert!(check_in_response.checked_in_at.is_some());

    // A repeated scan reports the same transition rather than a failure
    let path = Path::from(PathParameters { id: ticket.id });
    let response = tickets::check_in((database.connection.clone().into(), path))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let repeat_response: CheckInResponse = serde_json::from_str(body).unwrap();
    assert_eq!(repeat_response.status, CheckInConfirmation::AlreadyCheckedIn);
    assert_eq!(repeat_response.checked_in_at, check_in_response.checked_in_at);
}

#[actix_rt::test]
async fn check_in_missing_ticket() {
    let database = TestDatabase::new();

    let path = Path::from(PathParameters { id: Uuid::new_v4() });
    let response = tickets::check_in((database.connection.clone().into(), path))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
