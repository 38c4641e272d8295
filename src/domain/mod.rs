mod collection;
pub mod models;

pub use collection::MatchLog;
pub use models::*;
