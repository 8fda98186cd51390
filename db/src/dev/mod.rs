pub mod builders;
mod project;

pub use self::builders::*;
pub use self::project::TestProject;
