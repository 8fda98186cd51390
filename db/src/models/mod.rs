pub use self::domain_events::*;
pub use self::enums::*;
pub use self::events::*;
pub use self::vendor_tickets::*;

mod domain_events;
pub mod enums;
mod events;
mod vendor_tickets;
