pub mod day;
pub mod record;
