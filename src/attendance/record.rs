use serde::Serialize;

use super::weekday::{Weekday, DAYS_PER_WEEK};

/// Points a single bonus rule contributed during the last compute pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusContribution {
    /// Name of the rule, e.g. `wednesday` or `weekend`.
    pub rule: String,
    pub points: i64,
}

/// Accumulated attendance for one participant.
///
/// `id`, `name`, `day_count` and `base_points` are maintained as records
/// arrive. Everything below `base_points` is derived and only valid right
/// after `AttendanceBook::compute`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantRecord {
    pub id: usize,
    pub name: String,
    pub day_count: [u32; DAYS_PER_WEEK],
    pub base_points: i64,

    pub wed_count: u32,
    pub weekend_count: u32,
    pub bonus_points: i64,
    pub bonuses: Vec<BonusContribution>,
    pub total_points: i64,
    pub grade: String,
    pub elimination_candidate: bool,
}

impl ParticipantRecord {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            day_count: [0; DAYS_PER_WEEK],
            base_points: 0,
            wed_count: 0,
            weekend_count: 0,
            bonus_points: 0,
            bonuses: Vec::new(),
            total_points: 0,
            grade: String::new(),
            elimination_candidate: false,
        }
    }

    pub fn count(&self, day: Weekday) -> u32 {
        self.day_count[day.index()]
    }

    /// Combined count over several days (duplicates counted once).
    pub fn count_on(&self, days: &[Weekday]) -> u32 {
        Weekday::ALL
            .iter()
            .filter(|day| days.contains(day))
            .map(|day| self.count(*day))
            .sum()
    }

    /// Total number of recorded attendances.
    pub fn attendances(&self) -> u32 {
        self.day_count.iter().sum()
    }
}
