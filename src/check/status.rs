//! Check result types.

use crate::config::{RequirementKind, RequirementSpec};

/// Outcome of evaluating a single requirement.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Label of the requirement (variable name or file path).
    pub label: String,
    pub kind: RequirementKind,
    pub satisfied: bool,
}

impl CheckResult {
    pub fn new(spec: &RequirementSpec, satisfied: bool) -> Self {
        Self {
            label: spec.target.clone(),
            kind: spec.kind,
            satisfied,
        }
    }
}

/// Outcome of one evaluation pass over all requirements.
///
/// Ephemeral; produced per check pass and discarded afterwards.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    /// True iff every requirement is satisfied.
    pub fn all_satisfied(&self) -> bool {
        self.results.iter().all(|r| r.satisfied)
    }

    /// Number of unmet requirements.
    pub fn unmet_count(&self) -> usize {
        self.results.iter().filter(|r| !r.satisfied).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(label: &str, satisfied: bool) -> CheckResult {
        CheckResult {
            label: label.into(),
            kind: RequirementKind::Env,
            satisfied,
        }
    }

    #[test]
    fn empty_report_is_satisfied() {
        let report = CheckReport::default();
        assert!(report.all_satisfied());
        assert_eq!(report.unmet_count(), 0);
    }

    #[test]
    fn single_failure_fails_the_report() {
        let report = CheckReport {
            results: vec![result("A", true), result("B", false), result("C", true)],
        };
        assert!(!report.all_satisfied());
        assert_eq!(report.unmet_count(), 1);
    }

    #[test]
    fn all_passing_report_is_satisfied() {
        let report = CheckReport {
            results: vec![result("A", true), result("B", true)],
        };
        assert!(report.all_satisfied());
    }
}
