#[macro_use]
extern crate diesel;
extern crate backtrace;
extern crate diesel_migrations;
extern crate chrono;
extern crate chrono_tz;
extern crate dotenv;
#[macro_use]
extern crate log;
#[macro_use]
extern crate logging;
extern crate rand;
extern crate uuid;
#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate serde_json;
#[macro_use]
extern crate validator_derive;
extern crate validator;

pub mod dev;
pub mod models;
pub mod schema;
pub mod utils;
pub mod validators;

pub mod prelude {
    pub use models::*;
    pub use utils::errors::*;
}
