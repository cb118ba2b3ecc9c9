use crate::model::day::MetricKind;
use crate::model::record::{Metric, WeekData};

/// Attach the derived metric and the row description to every collected day.
///
/// Square days get `value²`, double days get `value * 2`; the description
/// becomes `"<description> <metric>"`. A row without a description column
/// gets the bare metric (`"25"`), not a placeholder word such as `"None 25"`.
pub fn populate_extra_data(week_data: &mut WeekData, description: Option<&str>) {
    for record in week_data.values_mut() {
        let value = i128::from(record.value);
        let metric = match record.day.metric() {
            MetricKind::Square => Metric::Square(value * value),
            MetricKind::Double => Metric::Double(value * 2),
        };
        let extra = metric.value();
        record.description = Some(match description {
            Some(description) => format!("{} {}", description, extra),
            None => extra.to_string(),
        });
        record.metric = Some(metric);
    }
}
