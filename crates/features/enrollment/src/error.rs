use std::borrow::Cow;

/// A specialized [`RegistrationError`] enum of this crate.
///
/// Rejected registrations are never errors; these only describe a service that could not be built.
#[campus_derive::campus_error]
pub enum RegistrationError {
    /// The enrollment policy cannot produce a usable rule pipeline.
    #[error("Invalid registration configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
