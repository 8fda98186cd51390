#![deny(unreachable_patterns)]
#![deny(unknown_lints)]
// Unused results is more often than not an error
#![deny(unused_must_use)]
extern crate actix_web;
extern crate db;
extern crate diesel;
extern crate dotenv;
#[macro_use]
extern crate log;
#[macro_use]
extern crate logging;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;
extern crate chrono;
extern crate serde;
extern crate url;
extern crate uuid;

pub mod config;
pub mod controllers;
pub mod database;
pub mod errors;
pub mod helpers;
pub mod middleware;
pub mod models;
mod routing;
pub mod server;
pub mod utils;
