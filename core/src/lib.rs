pub mod error;
pub mod extra;
pub mod model;
pub mod row;
pub mod week;

pub use error::{Result, WeekError};
pub use extra::populate_extra_data;
pub use model::day::{Day, MetricKind, DAYS, DOUBLE_DAYS, SQUARE_DAYS};
pub use model::record::{DayRecord, Metric, WeekData};
pub use row::{parse_day_range, parse_row, Row, DESCRIPTION_COLUMN};
pub use week::{parse_week, parse_week_from_reader};
