//! # Registration Observers
//!
//! Diagnostics are a side channel: the service reports every step of an evaluation to a
//! [`RegistrationObserver`], and the outcome never depends on what the observer does.
//!
//! * [`TracingObserver`] (the default) emits `tracing` events. Installing a subscriber is
//!   left to the application.
//! * [`NoopObserver`] discards everything.

use crate::rules::ValidationRule;
use campus_domain::student::Student;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{info, warn};

/// Receives the progress of each registration pass.
///
/// All hooks default to doing nothing, so implementors override only what they need.
pub trait RegistrationObserver: Debug + Send + Sync {
    fn registration_started(&self, _student: &Student) {}

    fn rule_passed(&self, _rule: &dyn ValidationRule, _student: &Student) {}

    fn rule_failed(&self, _rule: &dyn ValidationRule, _student: &Student) {}

    fn registration_accepted(&self, _student: &Student) {}

    /// Called once, after [`RegistrationObserver::rule_failed`], with the rule that stopped
    /// evaluation.
    fn registration_rejected(&self, _student: &Student, _rule: &dyn ValidationRule) {}
}

impl<O: RegistrationObserver + ?Sized> RegistrationObserver for Arc<O> {
    fn registration_started(&self, student: &Student) {
        (**self).registration_started(student);
    }

    fn rule_passed(&self, rule: &dyn ValidationRule, student: &Student) {
        (**self).rule_passed(rule, student);
    }

    fn rule_failed(&self, rule: &dyn ValidationRule, student: &Student) {
        (**self).rule_failed(rule, student);
    }

    fn registration_accepted(&self, student: &Student) {
        (**self).registration_accepted(student);
    }

    fn registration_rejected(&self, student: &Student, rule: &dyn ValidationRule) {
        (**self).registration_rejected(student, rule);
    }
}

/// Emits one `tracing` event per hook: `INFO` for progress, `WARN` for failures.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RegistrationObserver for TracingObserver {
    fn registration_started(&self, student: &Student) {
        info!(student = student.name(), credit_load = student.credit_load(), "Registration started");
    }

    fn rule_passed(&self, rule: &dyn ValidationRule, student: &Student) {
        info!(student = student.name(), rule = rule.name(), "{}", rule.diagnostic(student, true));
    }

    fn rule_failed(&self, rule: &dyn ValidationRule, student: &Student) {
        warn!(student = student.name(), rule = rule.name(), "{}", rule.diagnostic(student, false));
    }

    fn registration_accepted(&self, student: &Student) {
        info!(student = student.name(), "Registration accepted");
    }

    fn registration_rejected(&self, student: &Student, rule: &dyn ValidationRule) {
        warn!(student = student.name(), rule = rule.name(), "Registration rejected");
    }
}

/// Silent observer for callers that only need the outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RegistrationObserver for NoopObserver {}
