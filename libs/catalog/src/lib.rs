pub mod faq;
pub mod recipes;
pub mod search;
pub mod state;

pub use self::faq::*;
pub use self::recipes::*;
pub use self::search::*;
pub use self::state::*;
