//! # Enrollment
//!
//! Validates course-registration requests against an ordered set of business rules.
//!
//! ## Architecture
//!
//! 1.  **Rules ([`rules`]):** Pure predicates over a [`Student`](campus_domain::student::Student).
//!     Built-in: [`CreditLimitRule`] and [`PrerequisiteRule`].
//! 2.  **Service ([`RegistrationService`]):** Owns the rules, runs them in order and stops at
//!     the first failure.
//! 3.  **Observers ([`observer`]):** Receive every step of an evaluation. The default
//!     [`TracingObserver`] turns them into `tracing` events.
//!
//! A rejected registration is an ordinary outcome, not an error. [`RegistrationError`] only
//! covers building a service from an invalid
//! [`EnrollmentConfig`](campus_domain::config::EnrollmentConfig).

mod error;
pub mod observer;
pub mod rules;
mod service;

pub use crate::error::{RegistrationError, RegistrationErrorExt};
pub use crate::observer::{NoopObserver, RegistrationObserver, TracingObserver};
pub use crate::rules::{CreditLimitRule, PrerequisiteRule, ValidationRule};
pub use crate::service::{RegistrationOutcome, RegistrationService, RegistrationServiceBuilder};
