pub use self::api_logger::ApiLogger;
pub use self::database_transaction::DatabaseTransaction;

mod api_logger;
mod database_transaction;
