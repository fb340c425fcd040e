//! Level domain: tests for the anchor registry, level parsing, validation,
//! and contact classification.

use bevy::prelude::Vec3;

use super::components::Anchor;
use super::data::{AnchorDef, CueSoundsDef, HazardDef, LevelDef};
use super::events::OverlapKind;
use super::loader::parse_level;
use super::registry::{AnchorConfigError, AnchorRegistry};
use super::spawn::build_level;
use super::systems::{ContactSide, classify_contact};
use super::validation::validate_level;
use crate::swing::SwingTuning;

fn three_anchors() -> AnchorRegistry {
    AnchorRegistry::new([
        Vec3::new(0.0, 10.0, 0.0),
        Vec3::new(5.0, 10.0, 0.0),
        Vec3::new(10.0, 10.0, 0.0),
    ])
    .unwrap()
}

fn level_with(anchors: Vec<AnchorDef>) -> LevelDef {
    LevelDef {
        schema_version: 1,
        anchors,
        hazards: Vec::new(),
        tuning: None,
        cues: CueSoundsDef::default(),
    }
}

fn anchor(x: f32, y: f32) -> AnchorDef {
    AnchorDef {
        pivot: (x, y, 0.0),
        detection_radius: 0.6,
    }
}

// -----------------------------------------------------------------------------
// AnchorRegistry tests
// -----------------------------------------------------------------------------

#[test]
fn test_registry_assigns_indices_in_order() {
    let registry = three_anchors();
    assert_eq!(registry.count(), 3);
    for (i, anchor) in registry.iter().enumerate() {
        assert_eq!(anchor.index, i);
        assert!(anchor.active);
    }
    assert_eq!(registry.at(1).unwrap().pivot, Vec3::new(5.0, 10.0, 0.0));
    assert!(registry.at(3).is_none());
}

#[test]
fn test_registry_rejects_empty_list() {
    let result = AnchorRegistry::new(std::iter::empty());
    assert_eq!(result.unwrap_err(), AnchorConfigError::Empty);
}

#[test]
fn test_registry_rejects_non_finite_pivot() {
    let result = AnchorRegistry::new([Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0)]);
    assert_eq!(
        result.unwrap_err(),
        AnchorConfigError::MalformedPivot { index: 1 }
    );
}

#[test]
fn test_registry_goal_is_last_anchor() {
    let registry = three_anchors();
    assert_eq!(registry.goal_index(), 2);
    assert!(registry.is_goal(2));
    assert!(!registry.is_goal(0));
    assert_eq!(registry.home_pivot(), Vec3::new(0.0, 10.0, 0.0));
}

#[test]
fn test_single_anchor_is_both_home_and_goal() {
    let registry = AnchorRegistry::new([Vec3::new(1.0, 2.0, 0.0)]).unwrap();
    assert_eq!(registry.goal_index(), 0);
    assert!(registry.is_goal(0));
}

#[test]
fn test_grab_deactivates_until_reset() {
    let mut registry = three_anchors();

    let pivot = registry.grab(1);
    assert_eq!(pivot, Some(Vec3::new(5.0, 10.0, 0.0)));
    assert!(!registry.at(1).unwrap().active);
    // Repeated queries do not bring it back
    assert!(!registry.at(1).unwrap().active);
    assert!(registry.at(0).unwrap().active);
    assert!(registry.at(2).unwrap().active);

    registry.reset_all();
    assert!(registry.iter().all(|a| a.active));
}

#[test]
fn test_grab_out_of_range_returns_none() {
    let mut registry = three_anchors();
    assert_eq!(registry.grab(7), None);
    assert!(registry.iter().all(|a| a.active));
}

#[test]
fn test_reset_all_is_idempotent() {
    let mut registry = three_anchors();
    registry.grab(0);
    registry.grab(2);
    registry.reset_all();
    registry.reset_all();
    assert!(registry.iter().all(|a| a.active));
}

#[test]
fn test_anchor_config_error_display() {
    assert_eq!(AnchorConfigError::Empty.to_string(), "anchor list is empty");
    assert_eq!(
        AnchorConfigError::MalformedPivot { index: 4 }.to_string(),
        "anchor 4 has a non-finite pivot"
    );
}

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_minimal_level() {
    let source = r#"(
        schema_version: 1,
        anchors: [
            (pivot: (0.0, 10.0, 0.0), detection_radius: 0.6),
            (pivot: (5.0, 11.0, 0.0), detection_radius: 0.8),
        ],
    )"#;

    let level = parse_level("inline", source).unwrap();
    assert_eq!(level.anchors.len(), 2);
    assert_eq!(level.anchors[1].pivot(), Vec3::new(5.0, 11.0, 0.0));
    assert!(level.hazards.is_empty());
    assert!(level.tuning.is_none());
    assert!(level.cues.jump.is_none());
}

#[test]
fn test_parse_implicit_some_tuning_and_cues() {
    let source = r#"(
        schema_version: 1,
        anchors: [(pivot: (0.0, 10.0, 0.0), detection_radius: 0.6)],
        hazards: [(center: (0.0, -2.0), half_extents: (20.0, 1.0))],
        tuning: (base_speed: 700.0, radius: 3.0),
        cues: (jump: "audio/jump.ogg"),
    )"#;

    let level = parse_level("inline", source).unwrap();
    let tuning = level.tuning.unwrap();
    assert_eq!(tuning.base_speed, 700.0);
    assert_eq!(tuning.radius, 3.0);
    // Unspecified fields fall back to defaults
    assert_eq!(tuning.max_speed, SwingTuning::default().max_speed);
    assert_eq!(level.cues.jump.as_deref(), Some("audio/jump.ogg"));
    assert!(level.cues.goal.is_none());
    assert_eq!(level.hazards[0].size().x, 40.0);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_level("broken.ron", "(schema_version: 1, anchors: [").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_shipped_level_parses_and_validates() {
    let source = include_str!("../../assets/data/level.ron");
    let level = parse_level("level.ron", source).unwrap();
    assert!(validate_level(&level).is_empty());
    assert!(level.anchors.len() >= 2);
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_validate_accepts_good_level() {
    let level = level_with(vec![anchor(0.0, 10.0), anchor(5.0, 10.0)]);
    assert!(validate_level(&level).is_empty());
}

#[test]
fn test_validate_rejects_empty_anchor_list() {
    let errors = validate_level(&level_with(Vec::new()));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "anchors");
    assert_eq!(errors[0].index, None);
}

#[test]
fn test_validate_rejects_bad_anchor_fields() {
    let mut bad = anchor(f32::INFINITY, 0.0);
    bad.detection_radius = 0.0;
    let errors = validate_level(&level_with(vec![anchor(0.0, 0.0), bad]));

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.index == Some(1)));
    assert!(errors.iter().any(|e| e.field == "pivot"));
    assert!(errors.iter().any(|e| e.field == "detection_radius"));
}

#[test]
fn test_validate_rejects_flat_hazard() {
    let mut level = level_with(vec![anchor(0.0, 10.0)]);
    level.hazards.push(HazardDef {
        center: (0.0, 0.0),
        half_extents: (10.0, 0.0),
    });

    let errors = validate_level(&level);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source_type, "Hazard");
    assert_eq!(errors[0].field, "half_extents");
}

#[test]
fn test_validate_rejects_bad_tuning() {
    let mut level = level_with(vec![anchor(0.0, 10.0)]);
    level.tuning = Some(SwingTuning {
        base_speed: 1000.0,
        max_speed: 10.0,
        radius: -1.0,
        apex_normal: 1.5,
        ..Default::default()
    });

    let errors = validate_level(&level);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["base_speed", "radius", "apex_normal"]);
}

#[test]
fn test_validation_error_display() {
    let errors = validate_level(&level_with(Vec::new()));
    assert_eq!(
        errors[0].to_string(),
        "Level field 'anchors': at least one anchor is required"
    );
}

// -----------------------------------------------------------------------------
// build_level tests
// -----------------------------------------------------------------------------

#[test]
fn test_build_level_uses_default_tuning() {
    let (registry, tuning) = build_level(level_with(vec![anchor(0.0, 10.0), anchor(4.0, 10.0)]))
        .unwrap();
    assert_eq!(registry.count(), 2);
    assert_eq!(tuning.base_speed, SwingTuning::default().base_speed);
}

#[test]
fn test_build_level_reports_every_problem() {
    let mut bad = anchor(0.0, 0.0);
    bad.detection_radius = -1.0;
    let errors = build_level(level_with(vec![bad])).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("detection_radius"));
}

// -----------------------------------------------------------------------------
// Contact classification tests
// -----------------------------------------------------------------------------

#[test]
fn test_body_contacts_are_tagged_by_what_they_touch() {
    let anchor = Anchor { index: 3 };
    assert_eq!(
        classify_contact(ContactSide::Body, Some(&anchor), false),
        Some(OverlapKind::GrabAnchor(3))
    );
    assert_eq!(
        classify_contact(ContactSide::Body, None, true),
        Some(OverlapKind::HazardZone)
    );
    assert_eq!(
        classify_contact(ContactSide::Body, None, false),
        Some(OverlapKind::Other)
    );
}

#[test]
fn test_arm_contact_with_anchor_is_a_grab() {
    let anchor = Anchor { index: 1 };
    assert_eq!(
        classify_contact(ContactSide::Arm, Some(&anchor), false),
        Some(OverlapKind::GrabAnchor(1))
    );
}

#[test]
fn test_arm_ignores_everything_but_anchors() {
    assert_eq!(classify_contact(ContactSide::Arm, None, true), None);
    assert_eq!(classify_contact(ContactSide::Arm, None, false), None);
}
