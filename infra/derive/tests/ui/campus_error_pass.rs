use campus_derive::campus_error;
use std::borrow::Cow;

#[campus_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err::<(), _>(std::io::Error::other("disk")).context("Reading roster")?;
    Ok(())
}

fn fail() -> Result<(), DemoError> {
    Err("plain message".into())
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading roster): disk");

    let err = fail().context("Loading policy").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (Loading policy): plain message");
}
