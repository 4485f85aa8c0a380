use std::collections::HashSet;

use super::schema::PolicyConfig;

/// Largest magnitude accepted for any configured point value.
pub const MAX_POINTS: i64 = 1_000_000;

/// Validate policy configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &PolicyConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref scoring) = config.scoring {
        if let Some(ref base) = scoring.base_points {
            for day in crate::attendance::Weekday::ALL {
                if let Some(points) = base.get(day) {
                    if points < 0 {
                        errors.push(format!(
                            "scoring.base_points.{}: must be non-negative (got {})",
                            day, points
                        ));
                    } else if points > MAX_POINTS {
                        errors.push(format!(
                            "scoring.base_points.{}: must be at most {} (got {})",
                            day, MAX_POINTS, points
                        ));
                    }
                }
            }
        }

        if let Some(ref bonuses) = scoring.bonuses {
            let mut seen = HashSet::new();
            for (i, bonus) in bonuses.iter().enumerate() {
                if bonus.name.trim().is_empty() {
                    errors.push(format!("scoring.bonuses[{}].name: must not be empty", i));
                } else if !seen.insert(bonus.name.as_str()) {
                    errors.push(format!(
                        "scoring.bonuses[{}].name: duplicate rule '{}'",
                        i, bonus.name
                    ));
                }
                if bonus.days.is_empty() {
                    errors.push(format!("scoring.bonuses[{}].days: must list at least one day", i));
                }
                if bonus.threshold == 0 {
                    errors.push(format!("scoring.bonuses[{}].threshold: must be at least 1", i));
                }
                if !(-MAX_POINTS..=MAX_POINTS).contains(&bonus.points) {
                    errors.push(format!(
                        "scoring.bonuses[{}].points: must be between -{} and {} (got {})",
                        i, MAX_POINTS, MAX_POINTS, bonus.points
                    ));
                }
            }
        }
    }

    let grading = config.grade_policy();
    let bands = grading.bands();
    if let Some(ref grading_config) = config.grading {
        let mut seen = HashSet::new();
        for (i, band) in grading_config.bands.iter().enumerate() {
            if band.grade.trim().is_empty() {
                errors.push(format!("grading.bands[{}].grade: must not be empty", i));
            } else if !seen.insert(band.grade.as_str()) {
                errors.push(format!(
                    "grading.bands[{}].grade: duplicate grade '{}'",
                    i, band.grade
                ));
            }
        }
        for (i, pair) in grading_config.bands.windows(2).enumerate() {
            if pair[1].min_score >= pair[0].min_score {
                errors.push(format!(
                    "grading.bands[{}].min_score: must be below the previous band ({} >= {})",
                    i + 1,
                    pair[1].min_score,
                    pair[0].min_score
                ));
            }
        }
    }

    if let Some(ref elimination) = config.elimination {
        if let Some(ref grade) = elimination.grade {
            if grade.trim().is_empty() {
                errors.push("elimination.grade: must not be empty".to_string());
            } else if !bands.is_empty() && !bands.iter().any(|b| &b.grade == grade) {
                errors.push(format!(
                    "elimination.grade: '{}' does not match any grading band",
                    grade
                ));
            }
        }
        if let Some(ref days) = elimination.absent_days {
            if days.is_empty() {
                errors.push("elimination.absent_days: must list at least one day".to_string());
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::{GradeBand, Weekday};
    use crate::config::schema::{
        BasePointsConfig, BonusConfig, EliminationConfig, GradingConfig, ScoringConfig,
    };

    fn empty_config() -> PolicyConfig {
        PolicyConfig {
            scoring: None,
            grading: None,
            elimination: None,
        }
    }

    fn sample_bonus(name: &str) -> BonusConfig {
        BonusConfig {
            name: name.to_string(),
            days: vec![Weekday::Wednesday],
            threshold: 10,
            points: 10,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&PolicyConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_config() {
        assert!(validate_config(&empty_config()).is_ok());
    }

    #[test]
    fn test_negative_base_points() {
        let config = PolicyConfig {
            scoring: Some(ScoringConfig {
                base_points: Some(BasePointsConfig {
                    tuesday: Some(-1),
                    ..BasePointsConfig::default()
                }),
                bonuses: None,
            }),
            ..empty_config()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.base_points.tuesday"));
    }

    #[test]
    fn test_invalid_bonus() {
        let mut bad = sample_bonus("wednesday");
        bad.days.clear();
        bad.threshold = 0;
        let config = PolicyConfig {
            scoring: Some(ScoringConfig {
                base_points: None,
                bonuses: Some(vec![sample_bonus("wednesday"), bad, sample_bonus(" ")]),
            }),
            ..empty_config()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("scoring.bonuses[1].name: duplicate")));
        assert!(errors.iter().any(|e| e.contains("scoring.bonuses[1].days")));
        assert!(errors.iter().any(|e| e.contains("scoring.bonuses[1].threshold")));
        assert!(errors.iter().any(|e| e.contains("scoring.bonuses[2].name: must not be empty")));
    }

    #[test]
    fn test_point_values_are_bounded() {
        let mut huge = sample_bonus("huge");
        huge.points = i64::MAX;
        let config = PolicyConfig {
            scoring: Some(ScoringConfig {
                base_points: Some(BasePointsConfig {
                    monday: Some(MAX_POINTS + 1),
                    friday: Some(MAX_POINTS),
                    ..BasePointsConfig::default()
                }),
                bonuses: Some(vec![huge, sample_bonus("wednesday")]),
            }),
            ..empty_config()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("scoring.base_points.monday: must be at most"));
        assert!(errors[1].contains("scoring.bonuses[0].points"));
    }

    #[test]
    fn test_bands_must_descend() {
        let config = PolicyConfig {
            grading: Some(GradingConfig {
                bands: vec![GradeBand::new("NORMAL", 0), GradeBand::new("GOLD", 50)],
            }),
            ..empty_config()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("grading.bands[1].min_score"));
    }

    #[test]
    fn test_duplicate_band_grade() {
        let config = PolicyConfig {
            grading: Some(GradingConfig {
                bands: vec![GradeBand::new("GOLD", 50), GradeBand::new("GOLD", 10)],
            }),
            ..empty_config()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("grading.bands[1].grade"));
    }

    #[test]
    fn test_empty_bands_are_allowed() {
        let config = PolicyConfig {
            grading: Some(GradingConfig { bands: vec![] }),
            ..empty_config()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_elimination_grade_must_exist() {
        let config = PolicyConfig {
            elimination: Some(EliminationConfig {
                grade: Some("BRONZE".to_string()),
                absent_days: None,
            }),
            ..empty_config()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("elimination.grade"));
    }

    #[test]
    fn test_empty_absent_days() {
        let config = PolicyConfig {
            elimination: Some(EliminationConfig {
                grade: None,
                absent_days: Some(vec![]),
            }),
            ..empty_config()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("elimination.absent_days"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = PolicyConfig {
            grading: Some(GradingConfig {
                bands: vec![GradeBand::new("", 0)],
            }),
            elimination: Some(EliminationConfig {
                grade: Some(String::new()),
                absent_days: Some(vec![]),
            }),
            ..empty_config()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
