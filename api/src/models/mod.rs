pub use self::path_parameters::*;

mod path_parameters;
