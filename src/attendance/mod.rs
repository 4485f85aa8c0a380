//! Policy-driven attendance aggregation.
//!
//! Records go into an [`AttendanceBook`], which keeps per-participant day
//! counts and base points in first-seen order. [`AttendanceBook::compute`]
//! then applies a [`ScoringPolicy`], a [`GradePolicy`] and an
//! [`EliminationRule`] to fill in the derived fields. Nothing here does I/O.

pub mod book;
pub mod elimination;
pub mod error;
pub mod factory;
pub mod grading;
pub mod record;
pub mod scoring;
pub mod weekday;

pub use book::{AttendanceBook, DynAttendanceBook};
pub use elimination::{AbsenceElimination, EliminationRule, NeverEliminate};
pub use error::AttendanceError;
pub use factory::{DefaultPolicyFactory, PolicyBundle, PolicyFactory};
pub use grading::{default_bands, GradeBand, GradePolicy, ThresholdGrading, UNDEFINED_GRADE};
pub use record::{BonusContribution, ParticipantRecord};
pub use scoring::{
    sum_contributions, BonusRule, CompositeScoring, DayCountBonus, FlatScoring, ScoringPolicy,
};
pub use weekday::{Weekday, DAYS_PER_WEEK};
