use dev::builders::*;
use diesel::{Connection, PgConnection};
use dotenv::dotenv;
use std::env;

pub struct TestProject {
    pub connection: PgConnection,
}

#[allow(dead_code)]
impl TestProject {
    pub fn new() -> Self {
        let connection = TestProject::establish_connection();
        connection
            .begin_test_transaction()
            .expect("Could not start testing transaction");
        TestProject { connection }
    }

    /// For tests that need several live connections, e.g. racing check-ins.
    /// Callers clean up their own rows.
    pub fn new_without_rollback() -> Self {
        TestProject {
            connection: TestProject::establish_connection(),
        }
    }

    fn establish_connection() -> PgConnection {
        dotenv().ok();
        let conn_str = env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be defined.");
        PgConnection::establish(&conn_str).expect("Could not get access to test database")
    }

    pub fn get_connection(&self) -> &PgConnection {
        &self.connection
    }

    pub fn create_event(&self) -> EventBuilder {
        EventBuilder::new(&self.connection)
    }

    pub fn create_vendor_ticket(&self) -> VendorTicketBuilder {
        VendorTicketBuilder::new(&self.connection)
    }
}
