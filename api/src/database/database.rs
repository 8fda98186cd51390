use crate::config::Config;
use crate::database::{Connection, ConnectionType};
use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;

type R2D2Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct Database {
    pub pg_connection_pool: R2D2Pool,
}

impl Database {
    pub fn from_config(config: &Config) -> Database {
        Database {
            pg_connection_pool: create_connection_pool(config, config.database_url.clone()),
        }
    }

    pub fn get_connection(&self) -> Result<Connection, ::r2d2::Error> {
        let conn = self.pg_connection_pool.get()?;
        Ok(ConnectionType::R2D2(conn).into())
    }
}

fn create_connection_pool(config: &Config, database_url: String) -> R2D2Pool {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    r2d2::Pool::builder()
        .max_size(config.database_pool_size)
        .build(manager)
        .expect("Failed to create database connection pool")
}
