use serde::{Deserialize, Serialize};
use std::fmt;

/// A working day of the schedule week, ordered `mon < tue < wed < thu < fri`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

/// Ordinal -> day lookup. `DAYS[day.ordinal()] == day`.
pub const DAYS: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

pub const SQUARE_DAYS: [Day; 3] = [Day::Mon, Day::Tue, Day::Wed];
pub const DOUBLE_DAYS: [Day; 2] = [Day::Thu, Day::Fri];

/// Which derived metric a day carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Square,
    Double,
}

impl Day {
    /// Name -> day lookup, exact lowercase match only.
    pub fn from_name(name: &str) -> Option<Day> {
        match name {
            "mon" => Some(Day::Mon),
            "tue" => Some(Day::Tue),
            "wed" => Some(Day::Wed),
            "thu" => Some(Day::Thu),
            "fri" => Some(Day::Fri),
            _ => None,
        }
    }

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Mon => "mon",
            Day::Tue => "tue",
            Day::Wed => "wed",
            Day::Thu => "thu",
            Day::Fri => "fri",
        }
    }

    pub fn metric(self) -> MetricKind {
        match self {
            Day::Mon | Day::Tue | Day::Wed => MetricKind::Square,
            Day::Thu | Day::Fri => MetricKind::Double,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_tables_agree() {
        for (i, day) in DAYS.iter().enumerate() {
            assert_eq!(day.ordinal(), i);
            assert_eq!(DAYS[day.ordinal()], *day);
            assert_eq!(Day::from_name(day.name()), Some(*day));
        }
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(Day::from_name("Mon"), None);
        assert_eq!(Day::from_name("monday"), None);
        assert_eq!(Day::from_name(""), None);
        assert_eq!(Day::from_name("sat"), None);
    }

    #[test]
    fn test_metric_classes_partition_days() {
        for day in DAYS {
            let square = SQUARE_DAYS.contains(&day);
            let double = DOUBLE_DAYS.contains(&day);
            assert!(square ^ double, "{day} must be in exactly one class");
            let expected = if square { MetricKind::Square } else { MetricKind::Double };
            assert_eq!(day.metric(), expected);
        }
    }

    #[test]
    fn test_days_are_ordered() {
        assert!(Day::Mon < Day::Tue);
        assert!(Day::Thu < Day::Fri);
        let mut shuffled = vec![Day::Fri, Day::Mon, Day::Wed];
        shuffled.sort();
        assert_eq!(shuffled, vec![Day::Mon, Day::Wed, Day::Fri]);
    }
}
