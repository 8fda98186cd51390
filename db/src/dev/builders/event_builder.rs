use chrono::prelude::*;
use chrono::Duration;
use chrono_tz::Tz;
use diesel::PgConnection;
use models::*;
use rand::prelude::*;

pub struct EventBuilder<'a> {
    name: String,
    venue: Option<String>,
    event_date: NaiveDate,
    timezone: String,
    connection: &'a PgConnection,
}

impl<'a> EventBuilder<'a> {
    pub fn new(connection: &PgConnection) -> EventBuilder {
        let x: u16 = random();
        EventBuilder {
            name: format!("Event {}", x),
            venue: None,
            event_date: Utc::today().naive_utc() + Duration::days(30),
            timezone: "America/Chicago".to_string(),
            connection,
        }
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    pub fn with_venue(mut self, venue: &str) -> Self {
        self.venue = Some(venue.to_string());
        self
    }

    pub fn with_event_date(mut self, event_date: NaiveDate) -> Self {
        self.event_date = event_date;
        self
    }

    /// Dates the event "today" in its own timezone, so a freshly issued
    /// ticket evaluates as Valid.
    pub fn on_today(mut self) -> Self {
        let tz: Tz = self.timezone.parse().unwrap();
        self.event_date = Utc::now().with_timezone(&tz).date().naive_local();
        self
    }

    pub fn with_timezone(mut self, timezone: &str) -> Self {
        self.timezone = timezone.to_string();
        self
    }

    pub fn finish(&mut self) -> Event {
        Event::create(
            self.name.clone(),
            self.venue.clone(),
            self.event_date,
            self.timezone.clone(),
        )
        .commit(self.connection)
        .unwrap()
    }
}
