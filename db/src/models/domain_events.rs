use chrono::NaiveDateTime;
use diesel;
use diesel::prelude::*;
use log::Level;
use models::*;
use schema::domain_events;
use serde_json::Value;
use utils::errors::*;
use uuid::Uuid;

/// Append-only record of a lifecycle transition, written in the same
/// transaction as the transition itself.
#[derive(Clone, Debug, Identifiable, PartialEq, Deserialize, Serialize, Queryable)]
pub struct DomainEvent {
    pub id: Uuid,
    pub event_type: DomainEventTypes,
    pub display_text: String,
    pub main_table: Tables,
    pub main_id: Uuid,
    pub event_data: Option<Value>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Clone)]
#[table_name = "domain_events"]
pub struct NewDomainEvent {
    pub event_type: DomainEventTypes,
    pub display_text: String,
    pub main_table: Tables,
    pub main_id: Uuid,
    pub event_data: Option<Value>,
}

impl DomainEvent {
    pub fn create(
        event_type: DomainEventTypes,
        display_text: String,
        main_table: Tables,
        main_id: Uuid,
        event_data: Option<Value>,
    ) -> NewDomainEvent {
        NewDomainEvent {
            event_type,
            display_text,
            main_table,
            main_id,
            event_data,
        }
    }

    pub fn find(
        main_table: Tables,
        main_id: Option<Uuid>,
        event_type: Option<DomainEventTypes>,
        conn: &PgConnection,
    ) -> Result<Vec<DomainEvent>, DatabaseError> {
        let mut query = domain_events::table
            .filter(domain_events::main_table.eq(main_table))
            .into_boxed();

        if let Some(main_id) = main_id {
            query = query.filter(domain_events::main_id.eq(main_id));
        }
        if let Some(event_type) = event_type {
            query = query.filter(domain_events::event_type.eq(event_type));
        }

        query
            .order_by(domain_events::created_at)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load domain events")
    }
}

impl NewDomainEvent {
    pub fn commit(self, conn: &PgConnection) -> Result<DomainEvent, DatabaseError> {
        let result: DomainEvent = diesel::insert_into(domain_events::table)
            .values(&self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not insert domain event")?;

        jlog!(Level::Info, "mela_db::domain_events", &self.display_text, {
            "domain_event_id": result.id.to_string(),
            "event_type": result.event_type.to_string(),
            "main_table": result.main_table.to_string(),
            "main_id": result.main_id.to_string()
        });

        Ok(result)
    }
}
