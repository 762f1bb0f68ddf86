use crate::error::RegistrationError;
use crate::observer::{RegistrationObserver, TracingObserver};
use crate::rules::{ValidationRule, rule_for};
use campus_domain::config::EnrollmentConfig;
use campus_domain::student::Student;
use fxhash::FxHashSet;

/// Result of a single registration pass.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Every rule passed.
    Accepted,
    /// Evaluation stopped at the first failing rule; later rules were not run.
    Rejected {
        /// Name of the failing rule.
        rule: &'static str,
        /// Zero-based index of the failing rule in the pipeline.
        position: usize,
    },
}

impl RegistrationOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Name of the rule that rejected the registration, if any.
    #[must_use]
    pub const fn failed_rule(&self) -> Option<&'static str> {
        match self {
            Self::Accepted => None,
            Self::Rejected { rule, .. } => Some(*rule),
        }
    }
}

/// Runs an ordered, immutable list of rules against registration requests.
///
/// Rules are evaluated in construction order and evaluation stops at the first failure.
/// The service holds no mutable state, so a single instance can be shared across threads.
///
/// # Example
///
/// ```rust
/// use campus_domain::student::Student;
/// use campus_enrollment::{CreditLimitRule, PrerequisiteRule, RegistrationService};
///
/// let service = RegistrationService::builder()
///     .rule(CreditLimitRule::default())
///     .rule(PrerequisiteRule)
///     .build();
///
/// assert!(service.register(&Student::new("Andi", 20, true)));
/// assert!(!service.register(&Student::new("Budi", 26, false)));
/// ```
#[derive(Debug)]
pub struct RegistrationService<O: RegistrationObserver = TracingObserver> {
    rules: Vec<Box<dyn ValidationRule>>,
    observer: O,
}

impl RegistrationService {
    /// Creates a service that reports through [`TracingObserver`].
    ///
    /// An empty rule list is allowed and accepts every student.
    #[must_use]
    pub fn new(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { rules, observer: TracingObserver }
    }

    /// Returns a new [`RegistrationServiceBuilder`] with no rules and a [`TracingObserver`].
    #[must_use = "The builder must be configured before it can be used to build the service."]
    pub fn builder() -> RegistrationServiceBuilder {
        RegistrationServiceBuilder { rules: Vec::new(), observer: TracingObserver }
    }

    /// Builds the rule pipeline described by an [`EnrollmentConfig`].
    ///
    /// # Errors
    /// Returns [`RegistrationError::InvalidConfiguration`] if the configuration is rejected by
    /// [`RegistrationServiceBuilder::config`].
    pub fn from_config(config: &EnrollmentConfig) -> Result<Self, RegistrationError> {
        Ok(Self::builder().config(config)?.build())
    }
}

impl<O: RegistrationObserver> RegistrationService<O> {
    /// Creates a service with an explicit observer.
    #[must_use]
    pub fn with_observer(rules: Vec<Box<dyn ValidationRule>>, observer: O) -> Self {
        Self { rules, observer }
    }

    /// Returns `true` when every rule accepts the student.
    pub fn register(&self, student: &Student) -> bool {
        self.evaluate(student).is_accepted()
    }

    /// Evaluates the rules in order, stopping at the first one that fails.
    pub fn evaluate(&self, student: &Student) -> RegistrationOutcome {
        self.observer.registration_started(student);

        for (position, rule) in self.rules.iter().enumerate() {
            let rule: &dyn ValidationRule = &**rule;
            if !rule.validate(student) {
                self.observer.rule_failed(rule, student);
                self.observer.registration_rejected(student, rule);
                return RegistrationOutcome::Rejected { rule: rule.name(), position };
            }
            self.observer.rule_passed(rule, student);
        }

        self.observer.registration_accepted(student);
        RegistrationOutcome::Accepted
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }
}

/// A builder for assembling a [`RegistrationService`].
#[derive(Debug)]
pub struct RegistrationServiceBuilder<O: RegistrationObserver = TracingObserver> {
    rules: Vec<Box<dyn ValidationRule>>,
    observer: O,
}

impl<O: RegistrationObserver> RegistrationServiceBuilder<O> {
    /// Appends a rule to the end of the pipeline.
    #[must_use = "The builder must be consumed by `build` to produce a service."]
    pub fn rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends already boxed rules, preserving their order.
    #[must_use = "The builder must be consumed by `build` to produce a service."]
    pub fn rules(mut self, rules: impl IntoIterator<Item = Box<dyn ValidationRule>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Replaces the observer.
    pub fn observer<P: RegistrationObserver>(self, observer: P) -> RegistrationServiceBuilder<P> {
        RegistrationServiceBuilder { rules: self.rules, observer }
    }

    /// Appends the built-in rules listed in `config`, in the listed order.
    ///
    /// # Errors
    /// Returns [`RegistrationError::InvalidConfiguration`] when the credit ceiling is zero,
    /// the rule list is empty, or a rule is listed twice.
    pub fn config(mut self, config: &EnrollmentConfig) -> Result<Self, RegistrationError> {
        validate_config(config)?;
        self.rules.extend(config.rules.iter().map(|kind| rule_for(*kind, config)));
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> RegistrationService<O> {
        RegistrationService { rules: self.rules, observer: self.observer }
    }
}

fn validate_config(config: &EnrollmentConfig) -> Result<(), RegistrationError> {
    if config.max_credit_load == 0 {
        return Err(RegistrationError::InvalidConfiguration {
            message: "max_credit_load must be greater than zero".into(),
            context: None,
        });
    }

    if config.rules.is_empty() {
        return Err(RegistrationError::InvalidConfiguration {
            message: "At least one rule must be configured".into(),
            context: None,
        });
    }

    let mut seen = FxHashSet::default();
    if let Some(duplicate) = config.rules.iter().find(|kind| !seen.insert(**kind)) {
        return Err(RegistrationError::InvalidConfiguration {
            message: format!("Rule '{duplicate}' is listed more than once").into(),
            context: None,
        });
    }

    Ok(())
}
