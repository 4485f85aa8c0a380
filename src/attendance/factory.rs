use super::elimination::{AbsenceElimination, EliminationRule};
use super::grading::{GradePolicy, ThresholdGrading};
use super::scoring::{CompositeScoring, ScoringPolicy};

/// One scoring policy, one grade policy and one elimination rule, each owned
/// independently.
pub struct PolicyBundle {
    pub scoring: Box<dyn ScoringPolicy>,
    pub grading: Box<dyn GradePolicy>,
    pub elimination: Box<dyn EliminationRule>,
}

pub trait PolicyFactory {
    fn create(&self) -> PolicyBundle;
}

/// Builds the standard policies.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicyFactory;

impl PolicyFactory for DefaultPolicyFactory {
    fn create(&self) -> PolicyBundle {
        PolicyBundle {
            scoring: Box::new(CompositeScoring::default()),
            grading: Box::new(ThresholdGrading::default()),
            elimination: Box::new(AbsenceElimination::default()),
        }
    }
}
