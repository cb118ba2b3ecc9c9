use csv::StringRecord;
use log::debug;

use crate::error::{Result, WeekError};
use crate::extra::populate_extra_data;
use crate::model::day::{Day, DAYS};
use crate::model::record::{DayRecord, WeekData};

pub const DESCRIPTION_COLUMN: &str = "description";

/// One CSV data row as `(column, raw cell)` pairs in file order.
///
/// The column is `None` for cells beyond the end of the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(Option<String>, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair a data record with the header. Cells missing from a short record
    /// are left out rather than filled in.
    pub fn from_record(headers: &StringRecord, record: &StringRecord) -> Self {
        let cells = record
            .iter()
            .enumerate()
            .map(|(i, value)| (headers.get(i).map(str::to_string), value.to_string()))
            .collect();
        Self { cells }
    }

    pub fn push(&mut self, column: Option<&str>, value: &str) {
        self.cells.push((column.map(str::to_string), value.to_string()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, &str)> {
        self.cells.iter().map(|(c, v)| (c.as_deref(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Row {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.push(Some(column), value);
        }
        row
    }
}

/// Parse one row into per-day records with their derived fields filled in.
pub fn parse_row(row: &Row) -> Result<WeekData> {
    let (mut week_data, description) = collect_days(row)?;
    populate_extra_data(&mut week_data, description);
    Ok(week_data)
}

/// First pass over a row: day values only, plus the row's description.
/// Columns are applied in order, so a later column covering the same day wins.
fn collect_days(row: &Row) -> Result<(WeekData, Option<&str>)> {
    let mut week_data = WeekData::new();
    let mut description = None;

    for (column, value) in row.iter() {
        let Some(column) = column else {
            debug!("Skipping cell without a header: {:?}", value);
            continue;
        };

        if column == DESCRIPTION_COLUMN {
            description = Some(value);
        } else if let Some(day) = Day::from_name(column) {
            let parsed = parse_value(column, value)?;
            week_data.insert(day, DayRecord::new(day, parsed));
        } else if let Some(days) = parse_day_range(column) {
            let parsed = parse_value(column, value)?;
            for &day in days {
                week_data.insert(day, DayRecord::new(day, parsed));
            }
        } else {
            debug!("Ignoring column '{}'", column);
        }
    }

    Ok((week_data, description))
}

/// Expand a `start-end` column into the days it covers, inclusive.
///
/// Returns `None` when the column has no hyphen, when either side is not a
/// day name, or when `start` comes after `end`.
pub fn parse_day_range(column: &str) -> Option<&'static [Day]> {
    let (start, end) = column.split_once('-')?;
    let (start, end) = (Day::from_name(start)?, Day::from_name(end)?);
    if start > end {
        debug!("Reversed day range '{}'", column);
        return None;
    }
    Some(&DAYS[start.ordinal()..=end.ordinal()])
}

fn parse_value(column: &str, literal: &str) -> Result<i64> {
    literal
        .trim()
        .parse::<i64>()
        .map_err(|source| WeekError::MalformedValue {
            column: column.to_string(),
            literal: literal.to_string(),
            source,
        })
}
