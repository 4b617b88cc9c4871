pub mod runners;

pub use self::runners::*;
