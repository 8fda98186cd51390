pub use self::service_locator::*;

pub mod code_renderer;
pub mod codes;
mod service_locator;
