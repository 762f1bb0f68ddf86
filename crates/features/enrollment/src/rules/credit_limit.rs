use super::ValidationRule;
use campus_domain::constants::{CREDIT_LIMIT, MAX_CREDIT_LOAD};
use campus_domain::student::Student;

/// Rejects students whose requested credit load is above the ceiling.
///
/// The ceiling itself is allowed: with the default of 24, a load of 24 passes and 25 fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditLimitRule {
    max: u32,
}

impl CreditLimitRule {
    #[must_use]
    pub const fn new(max: u32) -> Self {
        Self { max }
    }

    /// The highest credit load that still passes.
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }
}

impl Default for CreditLimitRule {
    fn default() -> Self {
        Self::new(MAX_CREDIT_LOAD)
    }
}

impl ValidationRule for CreditLimitRule {
    fn name(&self) -> &'static str {
        CREDIT_LIMIT
    }

    fn validate(&self, student: &Student) -> bool {
        student.credit_load() <= self.max
    }

    fn diagnostic(&self, student: &Student, passed: bool) -> String {
        if passed {
            format!(
                "Credit load check passed for {} ({} credits)",
                student.name(),
                student.credit_load()
            )
        } else {
            format!(
                "Credit load check failed: {} requested {} credits, above the limit of {}",
                student.name(),
                student.credit_load(),
                self.max
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_inclusive() {
        let rule = CreditLimitRule::default();
        assert_eq!(rule.max(), 24);
        assert!(rule.validate(&Student::new("Cici", 24, false)));
        assert!(!rule.validate(&Student::new("Budi", 25, true)));
    }

    #[test]
    fn zero_load_passes() {
        assert!(CreditLimitRule::default().validate(&Student::new("Dedi", 0, true)));
    }

    #[test]
    fn prerequisite_flag_is_ignored() {
        let rule = CreditLimitRule::new(12);
        assert!(rule.validate(&Student::new("Andi", 12, false)));
        assert!(!rule.validate(&Student::new("Andi", 13, true)));
    }

    #[test]
    fn failure_diagnostic_mentions_limit() {
        let message = CreditLimitRule::default().diagnostic(&Student::new("Budi", 26, false), false);
        assert!(message.contains("Budi"));
        assert!(message.contains("26"));
        assert!(message.contains("24"));
    }
}
