use serde::{Deserialize, Serialize};

/// Label returned when no band accepts a score.
pub const UNDEFINED_GRADE: &str = "UNDEFINED";

/// A grade label and the minimum total it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradeBand {
    pub grade: String,
    pub min_score: i64,
}

impl GradeBand {
    pub fn new(grade: impl Into<String>, min_score: i64) -> Self {
        Self {
            grade: grade.into(),
            min_score,
        }
    }
}

/// GOLD >= 50, SILVER >= 30, NORMAL >= 0
pub fn default_bands() -> Vec<GradeBand> {
    vec![
        GradeBand::new("GOLD", 50),
        GradeBand::new("SILVER", 30),
        GradeBand::new("NORMAL", 0),
    ]
}

pub trait GradePolicy {
    fn decide(&self, total_points: i64) -> String;
}

/// Ordered threshold bands, first match wins.
///
/// Bands are scanned in the order given. Keeping them sorted by descending
/// `min_score` is up to whoever builds the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdGrading {
    bands: Vec<GradeBand>,
}

impl ThresholdGrading {
    pub fn new(bands: Vec<GradeBand>) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &[GradeBand] {
        &self.bands
    }
}

impl Default for ThresholdGrading {
    fn default() -> Self {
        Self::new(default_bands())
    }
}

impl GradePolicy for ThresholdGrading {
    fn decide(&self, total_points: i64) -> String {
        self.bands
            .iter()
            .find(|band| total_points >= band.min_score)
            .map(|band| band.grade.clone())
            .unwrap_or_else(|| UNDEFINED_GRADE.to_string())
    }
}

impl<T: GradePolicy + ?Sized> GradePolicy for &T {
    fn decide(&self, total_points: i64) -> String {
        (**self).decide(total_points)
    }
}

impl<T: GradePolicy + ?Sized> GradePolicy for Box<T> {
    fn decide(&self, total_points: i64) -> String {
        (**self).decide(total_points)
    }
}
