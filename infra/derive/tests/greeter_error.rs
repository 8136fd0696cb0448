use greeter_derive::greeter_error;
use std::borrow::Cow;

#[greeter_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid input{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn missing_file() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn run() -> Result<(), DemoError> {
        missing_file()?;
        Ok(())
    }

    let err = run().expect_err("io error expected");
    assert!(matches!(err, DemoError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO error: gone");
}

#[test]
fn context_on_source_result_wraps_and_annotates() {
    let err = missing_file().context("Reading profile").expect_err("io error expected");
    assert_eq!(err.to_string(), "IO error (Reading profile): gone");
}

#[test]
fn context_on_own_result_replaces_context() {
    let result: Result<(), DemoError> =
        Err(DemoError::Invalid { message: "bad name".into(), context: None });

    let err = result.context("Parsing profile").expect_err("invalid expected");
    assert_eq!(err.to_string(), "Invalid input (Parsing profile): bad name");
}

#[test]
fn strings_convert_into_internal() {
    let from_static: DemoError = "boom".into();
    let from_owned: DemoError = String::from("bang").into();

    assert!(matches!(from_static, DemoError::Internal { .. }));
    assert_eq!(from_owned.to_string(), "Internal error: bang");
}
