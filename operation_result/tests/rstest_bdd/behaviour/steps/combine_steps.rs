//! Steps combining a base result with another result.

use crate::fixtures::CombineContext;
use anyhow::{Result, anyhow, ensure};
use operation_result::{Detailed, OperationResult, OperationResultError, failed, succeeded};
use rstest_bdd::Slot;
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{normalize_scalar, split_list};

fn store(slot: &Slot<OperationResult>, result: OperationResult) -> Result<()> {
    ensure!(slot.is_empty(), "result already initialised");
    slot.set(result);
    Ok(())
}

fn coded_failure(code: &str, message: &str) -> Result<OperationResult> {
    let failure = failed()
        .with_code(normalize_scalar(code))?
        .with_message(normalize_scalar(message))?
        .with_error(format!("{} caused", normalize_scalar(code)));
    Ok(failure.into())
}

fn keyed_failure(key: &str) -> Result<OperationResult> {
    Ok(failed().with_argument(normalize_scalar(key), true)?.into())
}

fn combined(combine_context: &CombineContext) -> Result<OperationResult> {
    combine_context
        .outcome
        .with_ref(Clone::clone)
        .ok_or_else(|| anyhow!("results were not combined"))?
        .map_err(|err| anyhow!("combination failed: {err}"))
}

#[given("a base success")]
fn base_success(combine_context: &CombineContext) -> Result<()> {
    store(&combine_context.base, succeeded().into())
}

#[given("another success")]
fn other_success(combine_context: &CombineContext) -> Result<()> {
    store(&combine_context.other, succeeded().into())
}

#[given("a base failure with code {code} and message {message}")]
fn base_failure(combine_context: &CombineContext, code: String, message: String) -> Result<()> {
    store(&combine_context.base, coded_failure(&code, &message)?)
}

#[given("another failure with code {code} and message {message}")]
fn other_failure(combine_context: &CombineContext, code: String, message: String) -> Result<()> {
    store(&combine_context.other, coded_failure(&code, &message)?)
}

#[given("a base failure with argument {key}")]
fn base_keyed_failure(combine_context: &CombineContext, key: String) -> Result<()> {
    store(&combine_context.base, keyed_failure(&key)?)
}

#[given("another failure with argument {key}")]
fn other_keyed_failure(combine_context: &CombineContext, key: String) -> Result<()> {
    store(&combine_context.other, keyed_failure(&key)?)
}

#[when("the results are combined")]
fn combine_results(combine_context: &CombineContext) -> Result<()> {
    let base = combine_context
        .base
        .take()
        .ok_or_else(|| anyhow!("base result missing"))?;
    let other = combine_context
        .other
        .take()
        .ok_or_else(|| anyhow!("other result missing"))?;
    combine_context.outcome.set(base.combine(other));
    Ok(())
}

#[then("the combined result has succeeded")]
fn assert_succeeded(combine_context: &CombineContext) -> Result<()> {
    let result = combined(combine_context)?;
    ensure!(result.has_succeeded(), "expected success, got {result:?}");
    Ok(())
}

#[then("the combined result has failed")]
fn assert_failed(combine_context: &CombineContext) -> Result<()> {
    let result = combined(combine_context)?;
    ensure!(result.has_failed(), "expected failure, got {result:?}");
    Ok(())
}

#[then("the combined code is {code}")]
fn assert_code(combine_context: &CombineContext, code: String) -> Result<()> {
    let result = combined(combine_context)?;
    let expected = normalize_scalar(&code);
    ensure!(
        result.code() == Some(expected.as_str()),
        "unexpected code {:?}, expected {expected}",
        result.code()
    );
    Ok(())
}

#[then("the combined messages are {messages}")]
fn assert_messages(combine_context: &CombineContext, messages: String) -> Result<()> {
    let result = combined(combine_context)?;
    let expected = split_list(&messages);
    ensure!(
        result.messages() == expected.as_slice(),
        "unexpected messages {:?}",
        result.messages()
    );
    Ok(())
}

#[then("the combined result carries {count:usize} errors")]
fn assert_error_count(combine_context: &CombineContext, count: usize) -> Result<()> {
    let result = combined(combine_context)?;
    ensure!(
        result.errors().len() == count,
        "expected {count} errors, found {}",
        result.errors().len()
    );
    Ok(())
}

#[then("combining fails with a duplicate key {key}")]
fn assert_duplicate(combine_context: &CombineContext, key: String) -> Result<()> {
    let err = combine_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("results were not combined"))?
        .err()
        .ok_or_else(|| anyhow!("expected combination to fail"))?;
    let key = normalize_scalar(&key);
    ensure!(
        err == OperationResultError::DuplicateArgumentKey { key },
        "unexpected error: {err:?}"
    );
    Ok(())
}
