//! Steps building a failure and raising it as a single error.

use std::error::Error as _;

use crate::fixtures::RaiseContext;
use anyhow::{Result, anyhow, ensure};
use operation_result::{Detailed, ErrorKind, MESSAGE_SEPARATOR, OperationResultError, failed};
use rstest_bdd_macros::{given, then, when};
use test_helpers::{
    errors::numbered,
    text::{split_list, unquote},
};

#[given("a failure with messages {messages}")]
fn failure_with_messages(raise_context: &RaiseContext, messages: String) -> Result<()> {
    ensure!(raise_context.failure.is_empty(), "failure already initialised");
    let failure = failed().with_messages(split_list(&messages))?;
    raise_context.failure.set(failure);
    Ok(())
}

#[given("the failure carries {count:usize} errors")]
fn failure_with_errors(raise_context: &RaiseContext, count: usize) -> Result<()> {
    let failure = raise_context
        .failure
        .take()
        .ok_or_else(|| anyhow!("failure missing"))?
        .with_errors(numbered(count))?;
    raise_context.failure.set(failure);
    Ok(())
}

#[when("the failure is raised")]
fn raise_failure(raise_context: &RaiseContext) -> Result<()> {
    let failure = raise_context
        .failure
        .take()
        .ok_or_else(|| anyhow!("failure missing"))?;
    raise_context.raised.set(failure.into_error());
    Ok(())
}

#[when("the code {code} is applied")]
fn apply_code(raise_context: &RaiseContext, code: String) -> Result<()> {
    let mut failure = raise_context
        .failure
        .take()
        .ok_or_else(|| anyhow!("failure missing"))?;
    if let Err(err) = failure.details_mut().set_code(unquote(&code)) {
        raise_context.rejection.set(err);
    }
    raise_context.failure.set(failure);
    Ok(())
}

#[then("the raised message joins {messages}")]
fn assert_raised_message(raise_context: &RaiseContext, messages: String) -> Result<()> {
    let text = raise_context
        .raised
        .with_ref(ToString::to_string)
        .ok_or_else(|| anyhow!("failure was not raised"))?;
    let expected = split_list(&messages).join(MESSAGE_SEPARATOR);
    ensure!(text == expected, "unexpected message {text:?}");
    Ok(())
}

#[then("the raised error lists {count:usize} inner errors")]
fn assert_inner_errors(raise_context: &RaiseContext, count: usize) -> Result<()> {
    let (len, source) = raise_context
        .raised
        .with_ref(|raised| (raised.errors().len(), raised.source().map(ToString::to_string)))
        .ok_or_else(|| anyhow!("failure was not raised"))?;
    ensure!(len == count, "expected {count} inner errors, found {len}");
    let source = source.ok_or_else(|| anyhow!("raised error has no source"))?;
    ensure!(
        source.contains(&format!("{count}: error-{count}")),
        "source does not number the last error: {source}"
    );
    Ok(())
}

#[then("the failure is rejected as an invalid argument")]
fn assert_rejected(raise_context: &RaiseContext) -> Result<()> {
    let err = raise_context
        .rejection
        .take()
        .ok_or_else(|| anyhow!("code was accepted"))?;
    ensure!(
        err == OperationResultError::BlankArgument { parameter: "code" },
        "unexpected rejection {err:?}"
    );
    ensure!(
        err.kind() == ErrorKind::InvalidArgument,
        "unexpected classification for {err}"
    );
    Ok(())
}

#[then("the failure still carries the messages {messages}")]
fn assert_failure_kept(raise_context: &RaiseContext, messages: String) -> Result<()> {
    let (code, kept) = raise_context
        .failure
        .with_ref(|failure| (failure.code().map(str::to_owned), failure.messages().to_vec()))
        .ok_or_else(|| anyhow!("failure was dropped"))?;
    ensure!(code.is_none(), "blank code was stored: {code:?}");
    ensure!(kept == split_list(&messages), "unexpected messages {kept:?}");
    Ok(())
}
