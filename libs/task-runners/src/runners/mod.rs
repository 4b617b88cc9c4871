pub mod catalog_runner;
pub mod category_runner;
pub mod faq_runner;

pub use self::catalog_runner::*;
pub use self::category_runner::*;
pub use self::faq_runner::*;
