/// Upper bound on credit units a student may register for in one term.
pub const MAX_CREDIT_LOAD: u32 = 24;

/// Stable rule identifiers shared by configuration and observability.
pub const CREDIT_LIMIT: &str = "credit_limit";
pub const PREREQUISITE: &str = "prerequisite";
