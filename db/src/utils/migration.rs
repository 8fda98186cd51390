use diesel::PgConnection;
use diesel_migrations::{self, RunMigrationsError};

pub fn has_pending_migrations(conn: &PgConnection) -> Result<bool, RunMigrationsError> {
    diesel_migrations::any_pending_migrations(conn)
}

pub fn run_pending_migrations(conn: &PgConnection) -> Result<(), RunMigrationsError> {
    diesel_migrations::run_pending_migrations(conn)
}
