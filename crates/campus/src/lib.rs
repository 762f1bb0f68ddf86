//! Facade crate for the campus registration workspace.
//! Re-exports the domain models and the enrollment feature, and assembles the standard service.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Depend on `campus` and call [`init`] with an [`EnrollmentConfig`] (or its default).
//! - Reach individual pieces through [`domain`], [`enrollment`] or the [`prelude`].

pub use campus_domain as domain;
use campus_domain::config::EnrollmentConfig;
pub use campus_enrollment as enrollment;
use campus_enrollment::{RegistrationError, RegistrationService};

/// Commonly used types in one import.
pub mod prelude {
    pub use campus_domain::config::{EnrollmentConfig, RuleKind};
    pub use campus_domain::student::Student;
    pub use campus_enrollment::{
        CreditLimitRule, NoopObserver, PrerequisiteRule, RegistrationError, RegistrationObserver,
        RegistrationOutcome, RegistrationService, TracingObserver, ValidationRule,
    };
}

/// Builds the registration service described by `config`.
///
/// # Errors
/// Returns [`RegistrationError::InvalidConfiguration`] if the configuration is not usable.
pub fn init(config: &EnrollmentConfig) -> Result<RegistrationService, RegistrationError> {
    RegistrationService::from_config(config)
}
