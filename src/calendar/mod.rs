mod weeks;

pub use weeks::{WEEK_START, Week, WeekCalendar, week_start};
