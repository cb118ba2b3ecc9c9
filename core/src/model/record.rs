use serde::Serialize;
use std::collections::BTreeMap;

use super::day::Day;

/// Derived field attached to a day once its row has been fully read.
/// Held as `i128` so squaring any `i64` value cannot overflow.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Square(i128),
    Double(i128),
}

impl Metric {
    pub fn value(self) -> i128 {
        match self {
            Metric::Square(v) | Metric::Double(v) => v,
        }
    }
}

/// One day's entry in a week. `description` and `metric` stay `None` until
/// the derivation step has run over the row.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub day: Day,
    pub value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub metric: Option<Metric>,
}

impl DayRecord {
    pub fn new(day: Day, value: i64) -> Self {
        Self {
            day,
            value,
            description: None,
            metric: None,
        }
    }

    pub fn square(&self) -> Option<i128> {
        match self.metric {
            Some(Metric::Square(v)) => Some(v),
            _ => None,
        }
    }

    pub fn double(&self) -> Option<i128> {
        match self.metric {
            Some(Metric::Double(v)) => Some(v),
            _ => None,
        }
    }
}

/// Per-row mapping of day to record. Keys iterate in day order.
pub type WeekData = BTreeMap<Day, DayRecord>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_square_day() {
        let record = DayRecord {
            day: Day::Tue,
            value: 5,
            description: Some("first_desc 25".to_string()),
            metric: Some(Metric::Square(25)),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({"day": "tue", "value": 5, "description": "first_desc 25", "square": 25})
        );
    }

    #[test]
    fn test_serialize_double_day() {
        let record = DayRecord {
            day: Day::Fri,
            value: 3,
            description: Some("d 6".to_string()),
            metric: Some(Metric::Double(6)),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["double"], json!(6));
        assert!(value.get("square").is_none());
    }

    #[test]
    fn test_serialize_raw_record_omits_derived_fields() {
        let value = serde_json::to_value(DayRecord::new(Day::Mon, 3)).unwrap();
        assert_eq!(value, json!({"day": "mon", "value": 3}));
    }

    #[test]
    fn test_metric_accessors() {
        let mut record = DayRecord::new(Day::Thu, 4);
        assert_eq!(record.double(), None);
        record.metric = Some(Metric::Double(8));
        assert_eq!(record.double(), Some(8));
        assert_eq!(record.square(), None);
        assert_eq!(record.metric.map(Metric::value), Some(8));
    }
}
