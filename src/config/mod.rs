pub mod settings;

pub use settings::{AppConfig, CalendarSettings, ClassifierSettings};
