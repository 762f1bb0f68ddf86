//! # Validation Rules
//!
//! A rule is a pure predicate over a [`Student`]. Rules never log and never touch the student;
//! the [`RegistrationService`](crate::RegistrationService) reports their verdicts to its observer.
//!
//! Downstream crates add new checks by implementing [`ValidationRule`]; existing rules stay
//! untouched.

mod credit_limit;
mod prerequisite;

pub use credit_limit::CreditLimitRule;
pub use prerequisite::PrerequisiteRule;

use campus_domain::config::{EnrollmentConfig, RuleKind};
use campus_domain::student::Student;
use std::fmt::Debug;

/// A single registration check.
pub trait ValidationRule: Debug + Send + Sync {
    /// Stable identifier used in outcomes and diagnostics.
    fn name(&self) -> &'static str;

    /// Returns `true` when the student satisfies this rule.
    fn validate(&self, student: &Student) -> bool;

    /// Human-readable verdict for observers.
    fn diagnostic(&self, student: &Student, passed: bool) -> String {
        let verdict = if passed { "passed" } else { "failed" };
        format!("{} {verdict} for {}", self.name(), student.name())
    }
}

/// Instantiates the built-in rule for `kind` using the limits from `config`.
#[must_use]
pub fn rule_for(kind: RuleKind, config: &EnrollmentConfig) -> Box<dyn ValidationRule> {
    match kind {
        RuleKind::CreditLimit => Box::new(CreditLimitRule::new(config.max_credit_load)),
        RuleKind::Prerequisite => Box::new(PrerequisiteRule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct AlwaysPass;

    impl ValidationRule for AlwaysPass {
        fn name(&self) -> &'static str {
            "always_pass"
        }

        fn validate(&self, _student: &Student) -> bool {
            true
        }
    }

    #[test]
    fn default_diagnostic_names_rule_and_student() {
        let student = Student::new("Andi", 20, true);
        assert_eq!(AlwaysPass.diagnostic(&student, true), "always_pass passed for Andi");
        assert_eq!(AlwaysPass.diagnostic(&student, false), "always_pass failed for Andi");
    }

    #[test]
    fn rule_for_uses_configured_ceiling() {
        let config = EnrollmentConfig { max_credit_load: 18, ..EnrollmentConfig::default() };

        let rule = rule_for(RuleKind::CreditLimit, &config);
        assert_eq!(rule.name(), RuleKind::CreditLimit.as_str());
        assert!(rule.validate(&Student::new("Andi", 18, true)));
        assert!(!rule.validate(&Student::new("Andi", 19, true)));

        let rule = rule_for(RuleKind::Prerequisite, &config);
        assert_eq!(rule.name(), RuleKind::Prerequisite.as_str());
    }
}
