use crate::constants::{CREDIT_LIMIT, MAX_CREDIT_LOAD, PREREQUISITE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registration policy: the credit ceiling and the ordered rule pipeline.
///
/// Every field has a default, so an empty document yields the standard policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollmentConfig {
    pub max_credit_load: u32,
    pub rules: Vec<RuleKind>,
}

/// Built-in rule variants, in the order they should be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    CreditLimit,
    Prerequisite,
}

impl RuleKind {
    /// Stable identifier, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreditLimit => CREDIT_LIMIT,
            Self::Prerequisite => PREREQUISITE,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Default ---

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            max_credit_load: MAX_CREDIT_LOAD,
            rules: vec![RuleKind::CreditLimit, RuleKind::Prerequisite],
        }
    }
}
