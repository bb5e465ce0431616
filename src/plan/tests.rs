//! Tests for plan loading and validation.

use super::model::{Category, CleanupPlan, CleanupTarget};
use super::types::TargetKind;

fn plan_with_target(pattern: &str, kind: TargetKind) -> CleanupPlan {
    CleanupPlan {
        categories: vec![Category {
            name: "Test category".to_string(),
            targets: vec![CleanupTarget {
                pattern: pattern.to_string(),
                kind,
            }],
        }],
        retained: Vec::new(),
    }
}

#[test]
fn default_plan_is_valid() {
    let plan = CleanupPlan::default();
    plan.validate().unwrap();
}

#[test]
fn default_plan_matches_the_deletion_list() {
    let plan = CleanupPlan::default();

    let names: Vec<&str> = plan.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Original source tree",
            "Redundant server variants",
            "Development test files",
            "Duplicate configuration files",
            "Analysis/planning documents",
            "Consolidated extras",
            "Miscellaneous",
        ]
    );

    // One directory in the first category, one oddly-named file in the last.
    assert_eq!(plan.categories[0].targets.len(), 1);
    assert_eq!(plan.categories[0].targets[0].kind, TargetKind::Directory);
    assert_eq!(plan.categories[6].targets[0].pattern, "=1.2.0");

    assert!(!plan.retained.is_empty());
}

#[test]
fn empty_plan_has_no_targets() {
    let plan = CleanupPlan::empty();
    assert_eq!(plan.target_count(), 0);
    plan.validate().unwrap();
}

#[test]
fn target_count_sums_across_categories() {
    let plan = CleanupPlan::default();
    let by_hand: usize = plan.categories.iter().map(|c| c.targets.len()).sum();
    assert_eq!(plan.target_count(), by_hand);
    assert!(plan.target_count() > 10);
}

#[test]
fn yaml_roundtrip_preserves_the_plan() {
    let plan = CleanupPlan::default();
    let yaml = plan.to_yaml().unwrap();
    let reloaded = CleanupPlan::from_yaml(&yaml).unwrap();

    assert_eq!(reloaded.categories.len(), plan.categories.len());
    assert_eq!(reloaded.retained, plan.retained);
    for (a, b) in plan.categories.iter().zip(reloaded.categories.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.targets.len(), b.targets.len());
    }
}

#[test]
fn from_yaml_parses_kinds_and_defaults() {
    let yaml = r#"
categories:
  - name: "Stale outputs"
    targets:
      - pattern: "build"
        kind: directory
      - pattern: "*.log"
        kind: glob
      - pattern: "notes.txt"
retained:
  - "README.md"
"#;

    let plan = CleanupPlan::from_yaml(yaml).unwrap();
    assert_eq!(plan.categories.len(), 1);

    let targets = &plan.categories[0].targets;
    assert_eq!(targets[0].kind, TargetKind::Directory);
    assert_eq!(targets[1].kind, TargetKind::Glob);
    // kind defaults to file when omitted
    assert_eq!(targets[2].kind, TargetKind::File);

    assert_eq!(plan.retained, vec!["README.md".to_string()]);
}

#[test]
fn from_yaml_ignores_unknown_fields() {
    let yaml = r#"
categories:
  - name: "Misc"
    targets:
      - pattern: "junk.txt"
retained: []
future_option: true
"#;

    let plan = CleanupPlan::from_yaml(yaml).unwrap();
    assert_eq!(plan.categories.len(), 1);
}

#[test]
fn from_yaml_rejects_malformed_input() {
    let result = CleanupPlan::from_yaml("categories: \"not a list\"");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("parse"));
}

#[test]
fn validate_rejects_empty_category_name() {
    let mut plan = plan_with_target("junk.txt", TargetKind::File);
    plan.categories[0].name = "  ".to_string();

    let err = plan.validate().unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn validate_rejects_empty_pattern() {
    let plan = plan_with_target("", TargetKind::File);
    let err = plan.validate().unwrap_err();
    assert!(err.to_string().contains("empty pattern"));
}

#[test]
fn validate_rejects_absolute_pattern() {
    let plan = plan_with_target("/etc/passwd", TargetKind::File);
    let err = plan.validate().unwrap_err();
    assert!(err.to_string().contains("absolute"));
}

#[test]
fn validate_rejects_traversal() {
    let plan = plan_with_target("../sibling/file.txt", TargetKind::File);
    let err = plan.validate().unwrap_err();
    assert!(err.to_string().contains("escapes"));
}

#[test]
fn validate_rejects_bad_glob() {
    let plan = plan_with_target("a{b", TargetKind::Glob);
    let err = plan.validate().unwrap_err();
    assert!(err.to_string().contains("bad glob pattern"));
}

#[test]
fn validate_accepts_traversal_free_literal_braces_as_file() {
    // A file-kind pattern is never compiled as a glob, so glob syntax in a
    // literal filename is allowed.
    let plan = plan_with_target("weird{name", TargetKind::File);
    plan.validate().unwrap();
}

#[test]
fn target_kind_from_str() {
    assert_eq!(TargetKind::from_str("file"), Some(TargetKind::File));
    assert_eq!(TargetKind::from_str("directory"), Some(TargetKind::Directory));
    assert_eq!(TargetKind::from_str("glob"), Some(TargetKind::Glob));
    assert_eq!(TargetKind::from_str("folder"), None);
}

#[test]
fn target_kind_display() {
    assert_eq!(TargetKind::File.to_string(), "file");
    assert_eq!(TargetKind::Directory.to_string(), "directory");
    assert_eq!(TargetKind::Glob.to_string(), "glob");
}

#[test]
fn load_reads_a_plan_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("plan.yaml");
    std::fs::write(
        &path,
        "categories:\n  - name: Misc\n    targets:\n      - pattern: junk.txt\n",
    )
    .unwrap();

    let plan = CleanupPlan::load(&path).unwrap();
    assert_eq!(plan.categories[0].targets[0].pattern, "junk.txt");
}

#[test]
fn load_missing_file_is_a_user_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let result = CleanupPlan::load(temp.path().join("missing.yaml"));
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("failed to read plan file")
    );
}
