use chrono::prelude::*;
use chrono_tz::Tz;
use mela_db::dev::TestProject;
use mela_db::models::*;
use mela_db::utils::errors::*;

#[test]
fn create() {
    let project = TestProject::new();
    let connection = project.get_connection();

    let event = Event::create(
        "Diwali Mela".to_string(),
        Some("Community Grounds".to_string()),
        NaiveDate::from_ymd(2024, 11, 2),
        "America/Chicago".to_string(),
    )
    .commit(connection)
    .unwrap();

    assert_eq!(event.name, "Diwali Mela".to_string());
    assert_eq!(event.venue, Some("Community Grounds".to_string()));
    assert_eq!(event.event_date, NaiveDate::from_ymd(2024, 11, 2));
    assert_eq!(event.timezone, "America/Chicago".to_string());

    let domain_events = DomainEvent::find(
        Tables::Events,
        Some(event.id),
        Some(DomainEventTypes::EventCreated),
        connection,
    )
    .unwrap();
    assert_eq!(1, domain_events.len());
}

#[test]
fn create_requires_name_and_valid_timezone() {
    let project = TestProject::new();
    let connection = project.get_connection();

    let result = Event::create(
        "".to_string(),
        None,
        NaiveDate::from_ymd(2024, 11, 2),
        "America/Chicago".to_string(),
    )
    .commit(connection);
    match result.unwrap_err().error_code {
        ErrorCode::ValidationError { errors } => assert!(errors.contains_key("name")),
        _ => panic!("Expected validation error"),
    }

    let result = Event::create(
        "Diwali Mela".to_string(),
        None,
        NaiveDate::from_ymd(2024, 11, 2),
        "Central".to_string(),
    )
    .commit(connection);
    match result.unwrap_err().error_code {
        ErrorCode::ValidationError { errors } => assert!(errors.contains_key("timezone")),
        _ => panic!("Expected validation error"),
    }
}

#[test]
fn find() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let event = project.create_event().finish();

    assert_eq!(event, Event::find(event.id, connection).unwrap());
}

#[test]
fn timezone() {
    let project = TestProject::new();
    let event = project.create_event().with_timezone("Asia/Kolkata").finish();
    assert_eq!(event.timezone().unwrap(), "Asia/Kolkata".parse::<Tz>().unwrap());
}
