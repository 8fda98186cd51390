pub mod events;
pub mod status;
pub mod tickets;
pub mod verifications;
