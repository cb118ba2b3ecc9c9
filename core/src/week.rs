use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};

use crate::error::Result;
use crate::model::day::DAYS;
use crate::model::record::{DayRecord, WeekData};
use crate::row::{parse_row, Row};

/// Read a week CSV file and return the records of the last data row, in day order.
pub fn parse_week<P: AsRef<Path>>(path: P) -> Result<Vec<DayRecord>> {
    let path = path.as_ref();
    debug!("Opening {}", path.display());
    let file = File::open(path)?;
    parse_week_from_reader(BufReader::new(file))
}

/// Same as [`parse_week`] over any CSV source. The first line is the header.
///
/// Every data row replaces the week seen so far; only the final row decides
/// which days are reported. Days that row does not cover are left out.
pub fn parse_week_from_reader<R: Read>(reader: R) -> Result<Vec<DayRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut week_data = WeekData::new();
    let mut rows = 0usize;
    for result in reader.records() {
        let record = result?;
        week_data = parse_row(&Row::from_record(&headers, &record))?;
        rows += 1;
        debug!("Row {}: {} day(s)", rows, week_data.len());
    }

    let week: Vec<DayRecord> = DAYS
        .iter()
        .filter_map(|day| week_data.remove(day))
        .collect();
    info!("Parsed {} row(s), {} day(s) in final week", rows, week.len());
    Ok(week)
}
