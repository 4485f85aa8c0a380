use super::record::ParticipantRecord;
use super::weekday::Weekday;

pub const DEFAULT_ELIMINATION_GRADE: &str = "NORMAL";

/// Days a participant must never have attended to be eliminated by default.
pub const DEFAULT_ABSENT_DAYS: [Weekday; 3] =
    [Weekday::Wednesday, Weekday::Saturday, Weekday::Sunday];

/// Flags participants as removal candidates.
///
/// Called after scoring and grading; implementations read the derived fields
/// and must not recompute them.
pub trait EliminationRule {
    fn is_eliminated(&self, record: &ParticipantRecord) -> bool;
}

/// Eliminates participants holding `grade` who never attended any of
/// `absent_days`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsenceElimination {
    grade: String,
    absent_days: Vec<Weekday>,
}

impl AbsenceElimination {
    pub fn new(grade: impl Into<String>, absent_days: Vec<Weekday>) -> Self {
        Self {
            grade: grade.into(),
            absent_days,
        }
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn absent_days(&self) -> &[Weekday] {
        &self.absent_days
    }
}

impl Default for AbsenceElimination {
    fn default() -> Self {
        Self::new(DEFAULT_ELIMINATION_GRADE, DEFAULT_ABSENT_DAYS.to_vec())
    }
}

impl EliminationRule for AbsenceElimination {
    fn is_eliminated(&self, record: &ParticipantRecord) -> bool {
        record.grade == self.grade && self.absent_days.iter().all(|day| record.count(*day) == 0)
    }
}

/// Nobody is ever a removal candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeverEliminate;

impl EliminationRule for NeverEliminate {
    fn is_eliminated(&self, _record: &ParticipantRecord) -> bool {
        false
    }
}

impl<T: EliminationRule + ?Sized> EliminationRule for &T {
    fn is_eliminated(&self, record: &ParticipantRecord) -> bool {
        (**self).is_eliminated(record)
    }
}

impl<T: EliminationRule + ?Sized> EliminationRule for Box<T> {
    fn is_eliminated(&self, record: &ParticipantRecord) -> bool {
        (**self).is_eliminated(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graded_record(grade: &str, counts: &[(Weekday, u32)]) -> ParticipantRecord {
        let mut record = ParticipantRecord::new(1, "sample");
        record.grade = grade.to_string();
        for (day, count) in counts {
            record.day_count[day.index()] = *count;
        }
        record
    }

    #[test]
    fn test_normal_without_key_days_is_eliminated() {
        let rule = AbsenceElimination::default();
        let record = graded_record("NORMAL", &[(Weekday::Monday, 3), (Weekday::Friday, 1)]);
        assert!(rule.is_eliminated(&record));
    }

    #[test]
    fn test_any_key_day_keeps_participant() {
        let rule = AbsenceElimination::default();
        for day in DEFAULT_ABSENT_DAYS {
            let record = graded_record("NORMAL", &[(Weekday::Monday, 3), (day, 1)]);
            assert!(!rule.is_eliminated(&record), "{day} should keep the participant");
        }
    }

    #[test]
    fn test_other_grades_are_kept() {
        let rule = AbsenceElimination::default();
        for grade in ["GOLD", "SILVER", "UNDEFINED", ""] {
            let record = graded_record(grade, &[(Weekday::Monday, 40)]);
            assert!(!rule.is_eliminated(&record));
        }
    }

    #[test]
    fn test_custom_grade_and_days() {
        let rule = AbsenceElimination::new("BRONZE", vec![Weekday::Monday]);
        assert!(rule.is_eliminated(&graded_record("BRONZE", &[(Weekday::Tuesday, 1)])));
        assert!(!rule.is_eliminated(&graded_record("BRONZE", &[(Weekday::Monday, 1)])));
        assert!(!rule.is_eliminated(&graded_record("NORMAL", &[(Weekday::Tuesday, 1)])));
    }

    #[test]
    fn test_never_eliminate() {
        let record = graded_record("NORMAL", &[]);
        assert!(!NeverEliminate.is_eliminated(&record));
    }
}
