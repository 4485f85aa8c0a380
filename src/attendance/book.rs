use std::collections::HashMap;

use super::elimination::{AbsenceElimination, EliminationRule};
use super::error::AttendanceError;
use super::factory::PolicyBundle;
use super::grading::{GradePolicy, ThresholdGrading};
use super::record::ParticipantRecord;
use super::scoring::{sum_contributions, CompositeScoring, ScoringPolicy};
use super::weekday::Weekday;

/// Book where dynamically chosen policies are owned as trait objects.
pub type DynAttendanceBook =
    AttendanceBook<Box<dyn ScoringPolicy>, Box<dyn GradePolicy>, Box<dyn EliminationRule>>;

/// Accumulates attendance per participant and applies the policies.
///
/// Participants are kept in first-seen order and get sequential ids starting
/// at 1. The policies may be owned values, boxes or plain references, so a
/// caller can swap any of them without touching code that drives the book.
pub struct AttendanceBook<
    S = CompositeScoring,
    G = ThresholdGrading,
    E = AbsenceElimination,
> {
    scoring: S,
    grading: G,
    elimination: E,
    records: Vec<ParticipantRecord>,
    index_by_name: HashMap<String, usize>,
    computed: bool,
}

impl AttendanceBook {
    /// Book with the standard scoring table, grade bands and elimination rule.
    pub fn new() -> Self {
        Self::with_policies(
            CompositeScoring::default(),
            ThresholdGrading::default(),
            AbsenceElimination::default(),
        )
    }
}

impl Default for AttendanceBook {
    fn default() -> Self {
        Self::new()
    }
}

impl DynAttendanceBook {
    pub fn from_bundle(bundle: PolicyBundle) -> Self {
        Self::with_policies(bundle.scoring, bundle.grading, bundle.elimination)
    }
}

impl<S, G, E> AttendanceBook<S, G, E>
where
    S: ScoringPolicy,
    G: GradePolicy,
    E: EliminationRule,
{
    pub fn with_policies(scoring: S, grading: G, elimination: E) -> Self {
        Self {
            scoring,
            grading,
            elimination,
            records: Vec::new(),
            index_by_name: HashMap::new(),
            computed: false,
        }
    }

    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    pub fn grading(&self) -> &G {
        &self.grading
    }

    pub fn elimination(&self) -> &E {
        &self.elimination
    }

    /// Index of `name` in `records`, registering it first if unseen.
    ///
    /// Only this function and `clear` touch `records` and `index_by_name`
    /// together, which keeps the two in step.
    fn ensure_participant(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index_by_name.get(name) {
            return idx;
        }

        let idx = self.records.len();
        self.records.push(ParticipantRecord::new(idx + 1, name));
        self.index_by_name.insert(name.to_string(), idx);
        idx
    }

    /// Record one attendance of `name` on `day`.
    pub fn add_record(&mut self, name: &str, day: Weekday) {
        let base = self.scoring.base_point(day);
        let idx = self.ensure_participant(name);
        let record = &mut self.records[idx];
        record.day_count[day.index()] += 1;
        record.base_points = record.base_points.saturating_add(base);
        self.computed = false;
    }

    /// Parse `day_token` and record the attendance.
    ///
    /// An unknown weekday leaves the book untouched; the caller decides
    /// whether to skip the line or stop.
    pub fn add_record_line(&mut self, name_token: &str, day_token: &str) -> Result<(), AttendanceError> {
        let day = Weekday::parse(day_token)?;
        self.add_record(name_token, day);
        Ok(())
    }

    /// Recompute derived fields for every participant, in first-seen order.
    pub fn compute(&mut self) {
        for record in &mut self.records {
            record.wed_count = record.count(Weekday::Wednesday);
            record.weekend_count = record.count(Weekday::Saturday) + record.count(Weekday::Sunday);
            record.bonuses = self.scoring.bonus_breakdown(record);
            record.bonus_points = if record.bonuses.is_empty() {
                self.scoring.bonus_points(record)
            } else {
                sum_contributions(&record.bonuses)
            };
            record.total_points = record.base_points.saturating_add(record.bonus_points);
            record.grade = self.grading.decide(record.total_points);
            record.elimination_candidate = self.elimination.is_eliminated(record);
        }
        self.computed = true;
    }

    /// All participants in first-seen order.
    ///
    /// Derived fields are stale unless `is_computed` is true.
    pub fn records(&self) -> &[ParticipantRecord] {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&ParticipantRecord> {
        self.index_by_name.get(name).map(|&idx| &self.records[idx])
    }

    pub fn eliminated(&self) -> impl Iterator<Item = &ParticipantRecord> {
        self.records.iter().filter(|r| r.elimination_candidate)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True between a `compute` and the next mutation.
    pub fn is_computed(&self) -> bool {
        self.computed
    }

    /// Forget every participant. The next new name gets id 1 again.
    pub fn clear(&mut self) {
        self.records.clear();
        self.index_by_name.clear();
        self.computed = false;
    }
}
