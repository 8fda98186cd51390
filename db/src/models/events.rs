use chrono::prelude::*;
use chrono_tz::Tz;
use diesel;
use diesel::prelude::*;
use models::*;
use schema::events;
use utils::errors::*;
use uuid::Uuid;
use validator::Validate;
use validators;

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub venue: Option<String>,
    pub event_date: NaiveDate,
    pub timezone: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Deserialize, Insertable, Serialize, Validate)]
#[table_name = "events"]
pub struct NewEvent {
    #[validate(length(min = 1, message = "Event name cannot be blank"))]
    pub name: String,
    pub venue: Option<String>,
    pub event_date: NaiveDate,
    // The authoritative zone for deciding which calendar day "today" is on
    // event day, no matter where a staff device is scanning from.
    #[validate(custom = "validators::timezone_valid")]
    pub timezone: String,
}

impl NewEvent {
    pub fn commit(&self, conn: &PgConnection) -> Result<Event, DatabaseError> {
        self.validate()?;

        let event: Event = diesel::insert_into(events::table)
            .values(self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create new event")?;

        DomainEvent::create(
            DomainEventTypes::EventCreated,
            format!("Event {} created", event.name),
            Tables::Events,
            event.id,
            Some(json!({ "event_date": event.event_date, "timezone": event.timezone })),
        )
        .commit(conn)?;

        Ok(event)
    }
}

impl Event {
    pub fn create(name: String, venue: Option<String>, event_date: NaiveDate, timezone: String) -> NewEvent {
        NewEvent {
            name,
            venue,
            event_date,
            timezone,
        }
    }

    pub fn find(id: Uuid, conn: &PgConnection) -> Result<Event, DatabaseError> {
        events::table
            .find(id)
            .first(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading event")
    }

    pub fn timezone(&self) -> Result<Tz, DatabaseError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| DatabaseError::new(ErrorCode::ParseError, Some(e)))
    }
}
