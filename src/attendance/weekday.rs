use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::error::AttendanceError;

/// Number of entries in every per-day table.
pub const DAYS_PER_WEEK: usize = 7;

/// Day of the week, Monday first.
///
/// The discriminants are stable (0 = Monday .. 6 = Sunday) and double as the
/// index into per-day tables such as `ParticipantRecord::day_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Parse a full day name, ignoring ASCII case.
    ///
    /// Only the seven full names are accepted ("mon", "weds" and friends are
    /// rejected).
    pub fn parse(token: &str) -> Result<Self, AttendanceError> {
        Weekday::ALL
            .iter()
            .copied()
            .find(|day| token.eq_ignore_ascii_case(day.name()))
            .ok_or_else(|| AttendanceError::InvalidWeekdayToken(token.to_string()))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase full name, as accepted by `parse`.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl FromStr for Weekday {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::parse(s)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// Config files get the same case-insensitive matching as input records.
impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Weekday::parse(&token).map_err(de::Error::custom)
    }
}
