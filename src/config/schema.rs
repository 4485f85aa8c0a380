use serde::{Deserialize, Serialize};

use crate::attendance::elimination::{DEFAULT_ABSENT_DAYS, DEFAULT_ELIMINATION_GRADE};
use crate::attendance::scoring::{
    DEFAULT_BASE_POINTS, DEFAULT_BONUS_POINTS, DEFAULT_BONUS_THRESHOLD,
};
use crate::attendance::{
    default_bands, AbsenceElimination, CompositeScoring, DayCountBonus, GradeBand,
    PolicyBundle, PolicyFactory, ThresholdGrading, Weekday, DAYS_PER_WEEK,
};

/// Policy configuration.
///
/// Every section is optional; a missing section means "use the built-in
/// policy for this concern".
///
/// Example YAML:
/// ```yaml
/// scoring:
///   base_points: { wednesday: 3, saturday: 2, sunday: 2 }
///   bonuses:
///     - { name: wednesday, days: [wednesday], threshold: 10, points: 10 }
/// grading:
///   bands:
///     - { grade: GOLD, min_score: 50 }
///     - { grade: NORMAL, min_score: 0 }
/// elimination:
///   grade: NORMAL
///   absent_days: [wednesday, saturday, sunday]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    #[serde(default)]
    pub grading: Option<GradingConfig>,

    #[serde(default)]
    pub elimination: Option<EliminationConfig>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            scoring: Some(ScoringConfig::default()),
            grading: Some(GradingConfig::default()),
            elimination: Some(EliminationConfig::default()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Points per attendance, by day. Missing days keep their default.
    #[serde(default)]
    pub base_points: Option<BasePointsConfig>,

    /// Bonus rules, summed independently. `None` keeps the standard
    /// wednesday/weekend rules; an empty list disables bonuses.
    #[serde(default)]
    pub bonuses: Option<Vec<BonusConfig>>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_points: Some(BasePointsConfig::default()),
            bonuses: Some(vec![
                BonusConfig {
                    name: "wednesday".to_string(),
                    days: vec![Weekday::Wednesday],
                    threshold: DEFAULT_BONUS_THRESHOLD,
                    points: DEFAULT_BONUS_POINTS,
                },
                BonusConfig {
                    name: "weekend".to_string(),
                    days: vec![Weekday::Saturday, Weekday::Sunday],
                    threshold: DEFAULT_BONUS_THRESHOLD,
                    points: DEFAULT_BONUS_POINTS,
                },
            ]),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BasePointsConfig {
    #[serde(default)]
    pub monday: Option<i64>,
    #[serde(default)]
    pub tuesday: Option<i64>,
    #[serde(default)]
    pub wednesday: Option<i64>,
    #[serde(default)]
    pub thursday: Option<i64>,
    #[serde(default)]
    pub friday: Option<i64>,
    #[serde(default)]
    pub saturday: Option<i64>,
    #[serde(default)]
    pub sunday: Option<i64>,
}

impl Default for BasePointsConfig {
    fn default() -> Self {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] =
            DEFAULT_BASE_POINTS.map(Some);
        Self {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
        }
    }
}

impl BasePointsConfig {
    pub fn get(&self, day: Weekday) -> Option<i64> {
        match day {
            Weekday::Monday => self.monday,
            Weekday::Tuesday => self.tuesday,
            Weekday::Wednesday => self.wednesday,
            Weekday::Thursday => self.thursday,
            Weekday::Friday => self.friday,
            Weekday::Saturday => self.saturday,
            Weekday::Sunday => self.sunday,
        }
    }

    /// Full table, Monday first, with defaults for missing days.
    pub fn table(&self) -> [i64; DAYS_PER_WEEK] {
        Weekday::ALL.map(|day| self.get(day).unwrap_or(DEFAULT_BASE_POINTS[day.index()]))
    }
}

/// Fixed bonus once the combined count of `days` reaches `threshold`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BonusConfig {
    pub name: String,
    pub days: Vec<Weekday>,
    pub threshold: u32,
    pub points: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GradingConfig {
    /// Evaluated top to bottom, first band whose `min_score` is met wins.
    pub bands: Vec<GradeBand>,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            bands: default_bands(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EliminationConfig {
    /// Grade a participant must hold to be a removal candidate
    #[serde(default)]
    pub grade: Option<String>,

    /// Days the participant must never have attended
    #[serde(default)]
    pub absent_days: Option<Vec<Weekday>>,
}

impl Default for EliminationConfig {
    fn default() -> Self {
        Self {
            grade: Some(DEFAULT_ELIMINATION_GRADE.to_string()),
            absent_days: Some(DEFAULT_ABSENT_DAYS.to_vec()),
        }
    }
}

impl PolicyConfig {
    /// Same policies, with every omitted section or field spelled out.
    pub fn effective(&self) -> PolicyConfig {
        let scoring = self.scoring.clone().unwrap_or_default();
        let base = scoring.base_points.clone().unwrap_or_default().table();
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] = base.map(Some);

        let elimination = self.elimination.clone().unwrap_or_default();
        let elimination_defaults = EliminationConfig::default();

        PolicyConfig {
            scoring: Some(ScoringConfig {
                base_points: Some(BasePointsConfig {
                    monday,
                    tuesday,
                    wednesday,
                    thursday,
                    friday,
                    saturday,
                    sunday,
                }),
                bonuses: Some(
                    scoring
                        .bonuses
                        .unwrap_or_else(|| ScoringConfig::default().bonuses.unwrap_or_default()),
                ),
            }),
            grading: Some(self.grading.clone().unwrap_or_default()),
            elimination: Some(EliminationConfig {
                grade: elimination.grade.or(elimination_defaults.grade),
                absent_days: elimination.absent_days.or(elimination_defaults.absent_days),
            }),
        }
    }

    pub fn scoring_policy(&self) -> CompositeScoring {
        let Some(scoring) = &self.scoring else {
            return CompositeScoring::default();
        };

        let table = scoring
            .base_points
            .as_ref()
            .map(BasePointsConfig::table)
            .unwrap_or(DEFAULT_BASE_POINTS);

        match &scoring.bonuses {
            None => CompositeScoring::new(table)
                .with_rule(DayCountBonus::wednesday())
                .with_rule(DayCountBonus::weekend()),
            Some(bonuses) => bonuses.iter().fold(CompositeScoring::new(table), |policy, bonus| {
                policy.with_rule(DayCountBonus::new(
                    bonus.name.clone(),
                    bonus.days.clone(),
                    bonus.threshold,
                    bonus.points,
                ))
            }),
        }
    }

    pub fn grade_policy(&self) -> ThresholdGrading {
        match &self.grading {
            Some(grading) => ThresholdGrading::new(grading.bands.clone()),
            None => ThresholdGrading::default(),
        }
    }

    pub fn elimination_rule(&self) -> AbsenceElimination {
        let defaults = AbsenceElimination::default();
        match &self.elimination {
            Some(elimination) => AbsenceElimination::new(
                elimination
                    .grade
                    .clone()
                    .unwrap_or_else(|| defaults.grade().to_string()),
                elimination
                    .absent_days
                    .clone()
                    .unwrap_or_else(|| defaults.absent_days().to_vec()),
            ),
            None => defaults,
        }
    }
}

/// A loaded config builds its policies on demand.
impl PolicyFactory for PolicyConfig {
    fn create(&self) -> PolicyBundle {
        PolicyBundle {
            scoring: Box::new(self.scoring_policy()),
            grading: Box::new(self.grade_policy()),
            elimination: Box::new(self.elimination_rule()),
        }
    }
}
