pub mod colors;
pub mod date;
pub mod days;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use days::{DayCodeTable, weekday_indices};
pub use time::{TimeRange, parse_time_of_day, parse_time_range};
