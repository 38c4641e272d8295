mod snapshot;

pub use snapshot::{SeasonSnapshot, load_snapshot};
