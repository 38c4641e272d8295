pub mod summary;

pub use summary::SeasonSummaryService;
