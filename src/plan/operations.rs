//! Plan loading, validation, and serialization.

use super::model::CleanupPlan;
use super::types::TargetKind;
use crate::error::{Result, ScourError};
use crate::fs::path_contains_traversal;
use std::path::Path;

impl CleanupPlan {
    /// Load a plan from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScourError::UserError(format!(
                "failed to read plan file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a plan from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let plan: CleanupPlan = serde_yaml::from_str(yaml)
            .map_err(|e| ScourError::PlanError(format!("failed to parse plan YAML: {}", e)))?;

        plan.validate()?;
        Ok(plan)
    }

    /// Serialize the plan to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ScourError::PlanError(format!("failed to serialize plan to YAML: {}", e)))
    }

    /// Validate plan contents and return an error on the first violation.
    ///
    /// Validation rules:
    /// - category names must be non-empty
    /// - patterns must be non-empty, relative, and free of `..` components
    /// - glob patterns must compile
    pub fn validate(&self) -> Result<()> {
        for category in &self.categories {
            if category.name.trim().is_empty() {
                return Err(ScourError::PlanError(
                    "category names must be non-empty".to_string(),
                ));
            }

            for target in &category.targets {
                if target.pattern.is_empty() {
                    return Err(ScourError::PlanError(format!(
                        "empty pattern in category '{}'",
                        category.name
                    )));
                }

                let path = Path::new(&target.pattern);
                if path.is_absolute() {
                    return Err(ScourError::PlanError(format!(
                        "absolute pattern '{}' in category '{}'; patterns are relative to the working directory",
                        target.pattern, category.name
                    )));
                }
                if path_contains_traversal(path) {
                    return Err(ScourError::PlanError(format!(
                        "pattern '{}' in category '{}' escapes the working directory",
                        target.pattern, category.name
                    )));
                }

                if target.kind == TargetKind::Glob {
                    crate::fs::build_matcher(&target.pattern)?;
                }
            }
        }

        Ok(())
    }
}
