use super::ValidationRule;
use campus_domain::constants::PREREQUISITE;
use campus_domain::student::Student;

/// Rejects students who have not completed the prerequisite coursework.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PrerequisiteRule;

impl ValidationRule for PrerequisiteRule {
    fn name(&self) -> &'static str {
        PREREQUISITE
    }

    fn validate(&self, student: &Student) -> bool {
        student.has_prerequisite()
    }

    fn diagnostic(&self, student: &Student, passed: bool) -> String {
        if passed {
            format!("Prerequisite check passed for {}", student.name())
        } else {
            format!("Prerequisite check failed: {} has not completed the prerequisites", student.name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_prerequisite_flag() {
        assert!(PrerequisiteRule.validate(&Student::new("Andi", 20, true)));
        assert!(!PrerequisiteRule.validate(&Student::new("Cici", 24, false)));
    }

    #[test]
    fn credit_load_is_ignored() {
        assert!(PrerequisiteRule.validate(&Student::new("Budi", 99, true)));
    }
}
