//! Validation for level definitions before they reach the registry.

use super::data::LevelDef;
use crate::swing::SwingTuning;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelValidationError {
    pub source_type: &'static str,
    pub index: Option<usize>,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for LevelValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(index) => write!(
                f,
                "{} #{} field '{}': {}",
                self.source_type, index, self.field, self.message
            ),
            None => write!(f, "{} field '{}': {}", self.source_type, self.field, self.message),
        }
    }
}

/// Helper macro for recording a failed check
macro_rules! check {
    ($errors:expr, $cond:expr, $source_type:expr, $index:expr, $field:expr, $message:expr) => {
        if !$cond {
            $errors.push(LevelValidationError {
                source_type: $source_type,
                index: $index,
                field: $field,
                message: $message.to_string(),
            });
        }
    };
}

/// Validate a level definition.
/// Returns a list of validation errors, empty if the level is usable.
pub fn validate_level(level: &LevelDef) -> Vec<LevelValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        !level.anchors.is_empty(),
        "Level",
        None,
        "anchors",
        "at least one anchor is required"
    );

    for (i, anchor) in level.anchors.iter().enumerate() {
        check!(
            errors,
            anchor.pivot().is_finite(),
            "Anchor",
            Some(i),
            "pivot",
            "pivot must be finite"
        );
        check!(
            errors,
            anchor.detection_radius > 0.0,
            "Anchor",
            Some(i),
            "detection_radius",
            format!("must be positive, got {}", anchor.detection_radius)
        );
    }

    for (i, hazard) in level.hazards.iter().enumerate() {
        check!(
            errors,
            hazard.center().is_finite(),
            "Hazard",
            Some(i),
            "center",
            "center must be finite"
        );
        check!(
            errors,
            hazard.half_extents.0 > 0.0 && hazard.half_extents.1 > 0.0,
            "Hazard",
            Some(i),
            "half_extents",
            "extents must be positive"
        );
    }

    if let Some(tuning) = &level.tuning {
        validate_tuning(tuning, &mut errors);
    }

    errors
}

fn validate_tuning(tuning: &SwingTuning, errors: &mut Vec<LevelValidationError>) {
    check!(
        errors,
        tuning.base_speed <= tuning.max_speed,
        "Tuning",
        None,
        "base_speed",
        format!(
            "base_speed {} exceeds max_speed {}",
            tuning.base_speed, tuning.max_speed
        )
    );
    check!(
        errors,
        tuning.radius > 0.0,
        "Tuning",
        None,
        "radius",
        format!("must be positive, got {}", tuning.radius)
    );
    check!(
        errors,
        (0.0..=1.0).contains(&tuning.apex_normal),
        "Tuning",
        None,
        "apex_normal",
        format!("must be within [0, 1], got {}", tuning.apex_normal)
    );
    check!(
        errors,
        tuning.increment_rate >= 0.0,
        "Tuning",
        None,
        "increment_rate",
        "must not be negative"
    );
}
