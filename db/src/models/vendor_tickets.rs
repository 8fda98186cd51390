use chrono::prelude::*;
use chrono_tz::Tz;
use diesel;
use diesel::expression::dsl;
use diesel::prelude::*;
use log::Level;
use models::*;
use schema::{events, vendor_tickets};
use utils::errors::*;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Debug, Identifiable, PartialEq, Deserialize, Serialize, Queryable)]
pub struct VendorTicket {
    pub id: Uuid,
    pub event_id: Uuid,
    pub holder_name: String,
    pub booth_type: String,
    pub vendor_organization: Option<String>,
    pub status: CheckInStatus,
    pub checked_in_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Insertable, Validate)]
#[table_name = "vendor_tickets"]
pub struct NewVendorTicket {
    pub event_id: Uuid,
    #[validate(length(min = 1, message = "Holder name cannot be blank"))]
    pub holder_name: String,
    pub booth_type: String,
    pub vendor_organization: Option<String>,
    pub status: CheckInStatus,
}

/// A ticket joined to the event it admits to, the shape the verification
/// surface reads.
#[derive(Clone, Debug, Deserialize, PartialEq, Queryable, Serialize)]
pub struct VerifiableTicket {
    pub id: Uuid,
    pub holder_name: String,
    pub booth_type: String,
    pub vendor_organization: Option<String>,
    pub status: CheckInStatus,
    pub checked_in_at: Option<NaiveDateTime>,
    pub issued_at: NaiveDateTime,
    pub event_id: Uuid,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub event_timezone: String,
}

#[derive(Debug, PartialEq)]
pub enum CheckInResults {
    CheckedIn(VendorTicket),
    AlreadyCheckedIn(VendorTicket),
    TicketNotFound,
}

impl NewVendorTicket {
    pub fn commit(&self, conn: &PgConnection) -> Result<VendorTicket, DatabaseError> {
        self.validate()?;

        // A single INSERT .. RETURNING; the ticket is either fully written
        // or not written at all.
        let ticket: VendorTicket = diesel::insert_into(vendor_tickets::table)
            .values(self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not issue vendor ticket")?;

        DomainEvent::create(
            DomainEventTypes::VendorTicketIssued,
            "Vendor ticket issued".to_string(),
            Tables::VendorTickets,
            ticket.id,
            Some(json!({
                "event_id": ticket.event_id,
                "holder_name": ticket.holder_name,
                "booth_type": ticket.booth_type
            })),
        )
        .commit(conn)?;

        Ok(ticket)
    }
}

impl VendorTicket {
    pub fn create(
        event_id: Uuid,
        holder_name: String,
        booth_type: String,
        vendor_organization: Option<String>,
    ) -> NewVendorTicket {
        NewVendorTicket {
            event_id,
            holder_name,
            booth_type,
            vendor_organization,
            status: CheckInStatus::Pending,
        }
    }

    pub fn find(id: Uuid, conn: &PgConnection) -> Result<VendorTicket, DatabaseError> {
        vendor_tickets::table
            .find(id)
            .first(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load vendor ticket")
    }

    pub fn find_verifiable(id: Uuid, conn: &PgConnection) -> Result<VerifiableTicket, DatabaseError> {
        vendor_tickets::table
            .inner_join(events::table.on(events::id.eq(vendor_tickets::event_id)))
            .filter(vendor_tickets::id.eq(id))
            .select(Self::verifiable_columns())
            .first(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load vendor ticket for verification")
    }

    pub fn find_for_event(event_id: Uuid, conn: &PgConnection) -> Result<Vec<VerifiableTicket>, DatabaseError> {
        vendor_tickets::table
            .inner_join(events::table.on(events::id.eq(vendor_tickets::event_id)))
            .filter(vendor_tickets::event_id.eq(event_id))
            .order_by(vendor_tickets::holder_name.asc())
            .select(Self::verifiable_columns())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load vendor tickets for event")
    }

    /// Marks the ticket as checked in, at most once.
    ///
    /// The transition is a single conditional UPDATE guarded on the status
    /// still being `Pending` at write time; of any number of concurrent
    /// callers exactly one receives the updated row. A caller whose update
    /// matched no row re-reads the ticket and reports the stored state,
    /// never its own earlier snapshot.
    pub fn check_in(ticket_id: Uuid, conn: &PgConnection) -> Result<CheckInResults, DatabaseError> {
        let checked_in: Option<VendorTicket> = diesel::update(
            vendor_tickets::table
                .filter(vendor_tickets::id.eq(ticket_id))
                .filter(vendor_tickets::status.eq(CheckInStatus::Pending)),
        )
        .set((
            vendor_tickets::status.eq(CheckInStatus::CheckedIn),
            vendor_tickets::checked_in_at.eq(dsl::now),
            vendor_tickets::updated_at.eq(dsl::now),
        ))
        .get_result(conn)
        .optional()
        .to_db_error(ErrorCode::UpdateError, "Could not check in vendor ticket")?;

        if let Some(ticket) = checked_in {
            DomainEvent::create(
                DomainEventTypes::VendorTicketCheckedIn,
                "Vendor ticket checked in".to_string(),
                Tables::VendorTickets,
                ticket.id,
                Some(json!({ "holder_name": ticket.holder_name, "checked_in_at": ticket.checked_in_at })),
            )
            .commit(conn)?;

            jlog!(Level::Info, "mela_db::vendor_tickets", "Vendor checked in", {
                "ticket_id": ticket.id.to_string(),
                "event_id": ticket.event_id.to_string()
            });

            return Ok(CheckInResults::CheckedIn(ticket));
        }

        match VendorTicket::find(ticket_id, conn).optional()? {
            Some(ticket) => Ok(CheckInResults::AlreadyCheckedIn(ticket)),
            None => Ok(CheckInResults::TicketNotFound),
        }
    }

    fn verifiable_columns() -> (
        vendor_tickets::id,
        vendor_tickets::holder_name,
        vendor_tickets::booth_type,
        vendor_tickets::vendor_organization,
        vendor_tickets::status,
        vendor_tickets::checked_in_at,
        vendor_tickets::created_at,
        vendor_tickets::event_id,
        events::name,
        events::event_date,
        events::timezone,
    ) {
        (
            vendor_tickets::id,
            vendor_tickets::holder_name,
            vendor_tickets::booth_type,
            vendor_tickets::vendor_organization,
            vendor_tickets::status,
            vendor_tickets::checked_in_at,
            vendor_tickets::created_at,
            vendor_tickets::event_id,
            events::name,
            events::event_date,
            events::timezone,
        )
    }
}

impl VerifiableTicket {
    pub fn timezone(&self) -> Result<Tz, DatabaseError> {
        self.event_timezone
            .parse::<Tz>()
            .map_err(|e| DatabaseError::new(ErrorCode::ParseError, Some(e)))
    }

    /// Display state, recomputed from stored fields and the clock on every
    /// read. "Today" is the calendar day in the event's own timezone and
    /// the comparison ignores time of day.
    pub fn validity(&self, now: DateTime<Utc>) -> Result<TicketValidity, DatabaseError> {
        if self.status == CheckInStatus::CheckedIn {
            return Ok(TicketValidity::AlreadyCheckedIn);
        }

        let today = now.with_timezone(&self.timezone()?).date().naive_local();
        if self.event_date < today {
            Ok(TicketValidity::Expired)
        } else if self.event_date > today {
            Ok(TicketValidity::NotYetActive)
        } else {
            Ok(TicketValidity::Valid)
        }
    }
}
