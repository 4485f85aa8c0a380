use super::record::{BonusContribution, ParticipantRecord};
use super::weekday::{Weekday, DAYS_PER_WEEK};

/// Default base points, Monday first.
pub const DEFAULT_BASE_POINTS: [i64; DAYS_PER_WEEK] = [1, 1, 3, 1, 1, 2, 2];
pub const DEFAULT_BONUS_THRESHOLD: u32 = 10;
pub const DEFAULT_BONUS_POINTS: i64 = 10;

/// Decides how many points an attendance is worth.
///
/// `base_point` is applied per attendance as records arrive; the bonus is
/// applied once per participant during the compute pass.
pub trait ScoringPolicy {
    fn base_point(&self, day: Weekday) -> i64;

    fn bonus_points(&self, record: &ParticipantRecord) -> i64 {
        sum_contributions(&self.bonus_breakdown(record))
    }

    /// Per-rule view of `bonus_points`. Policies without named rules may leave
    /// this empty. When it is not empty, its sum is the participant's bonus
    /// and `bonus_points` is not consulted.
    fn bonus_breakdown(&self, _record: &ParticipantRecord) -> Vec<BonusContribution> {
        Vec::new()
    }
}

/// Saturating sum of a bonus breakdown.
pub fn sum_contributions(contributions: &[BonusContribution]) -> i64 {
    contributions
        .iter()
        .fold(0i64, |total, c| total.saturating_add(c.points))
}

/// One independent bonus contribution.
///
/// Rules never see each other's output; the composite policy sums them.
pub trait BonusRule {
    fn name(&self) -> &str;
    fn contribution(&self, record: &ParticipantRecord) -> i64;
}

/// Fixed bonus once the combined count of `days` reaches `threshold`.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCountBonus {
    name: String,
    days: Vec<Weekday>,
    threshold: u32,
    points: i64,
}

impl DayCountBonus {
    pub fn new(name: impl Into<String>, days: Vec<Weekday>, threshold: u32, points: i64) -> Self {
        Self {
            name: name.into(),
            days,
            threshold,
            points,
        }
    }

    /// Wednesday >= 10 -> +10
    pub fn wednesday() -> Self {
        Self::new(
            "wednesday",
            vec![Weekday::Wednesday],
            DEFAULT_BONUS_THRESHOLD,
            DEFAULT_BONUS_POINTS,
        )
    }

    /// Saturday + Sunday >= 10 -> +10
    pub fn weekend() -> Self {
        Self::new(
            "weekend",
            vec![Weekday::Saturday, Weekday::Sunday],
            DEFAULT_BONUS_THRESHOLD,
            DEFAULT_BONUS_POINTS,
        )
    }

    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn points(&self) -> i64 {
        self.points
    }
}

impl BonusRule for DayCountBonus {
    fn name(&self) -> &str {
        &self.name
    }

    fn contribution(&self, record: &ParticipantRecord) -> i64 {
        if record.count_on(&self.days) >= self.threshold {
            self.points
        } else {
            0
        }
    }
}

/// Per-day base point table plus an ordered set of additive bonus rules.
pub struct CompositeScoring {
    base: [i64; DAYS_PER_WEEK],
    rules: Vec<Box<dyn BonusRule>>,
}

impl CompositeScoring {
    pub fn new(base: [i64; DAYS_PER_WEEK]) -> Self {
        Self {
            base,
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: impl BonusRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn push_rule(&mut self, rule: Box<dyn BonusRule>) {
        self.rules.push(rule);
    }

    pub fn base_table(&self) -> &[i64; DAYS_PER_WEEK] {
        &self.base
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}

impl Default for CompositeScoring {
    fn default() -> Self {
        CompositeScoring::new(DEFAULT_BASE_POINTS)
            .with_rule(DayCountBonus::wednesday())
            .with_rule(DayCountBonus::weekend())
    }
}

impl ScoringPolicy for CompositeScoring {
    fn base_point(&self, day: Weekday) -> i64 {
        self.base[day.index()]
    }

    fn bonus_breakdown(&self, record: &ParticipantRecord) -> Vec<BonusContribution> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let points = rule.contribution(record);
                (points != 0).then(|| BonusContribution {
                    rule: rule.name().to_string(),
                    points,
                })
            })
            .collect()
    }
}

/// Every day worth the same, no bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatScoring {
    pub points_per_day: i64,
}

impl Default for FlatScoring {
    fn default() -> Self {
        Self { points_per_day: 1 }
    }
}

impl ScoringPolicy for FlatScoring {
    fn base_point(&self, _day: Weekday) -> i64 {
        self.points_per_day
    }

    fn bonus_points(&self, _record: &ParticipantRecord) -> i64 {
        0
    }
}

impl<T: ScoringPolicy + ?Sized> ScoringPolicy for &T {
    fn base_point(&self, day: Weekday) -> i64 {
        (**self).base_point(day)
    }

    fn bonus_points(&self, record: &ParticipantRecord) -> i64 {
        (**self).bonus_points(record)
    }

    fn bonus_breakdown(&self, record: &ParticipantRecord) -> Vec<BonusContribution> {
        (**self).bonus_breakdown(record)
    }
}

impl<T: ScoringPolicy + ?Sized> ScoringPolicy for Box<T> {
    fn base_point(&self, day: Weekday) -> i64 {
        (**self).base_point(day)
    }

    fn bonus_points(&self, record: &ParticipantRecord) -> i64 {
        (**self).bonus_points(record)
    }

    fn bonus_breakdown(&self, record: &ParticipantRecord) -> Vec<BonusContribution> {
        (**self).bonus_breakdown(record)
    }
}
