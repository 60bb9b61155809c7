//! Fields shared by every result variant and the validation guarding them.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    ArgumentValue, Arguments, OperationResultError, ResultInfo, diagnostics::rejected,
};

/// Code, messages, and arguments carried by a result.
///
/// Every mutation validates its whole input before touching `self`, so a
/// rejected call leaves the details exactly as they were.
///
/// Serializes as an object with `code` (omitted when unset), `messages`, and
/// `arguments` in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResultDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    messages: Vec<String>,
    arguments: Arguments,
}

impl ResultDetails {
    /// Create empty details.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build details from a seeding [`ResultInfo`].
    ///
    /// An empty code and empty collections are skipped; everything else goes
    /// through the same appliers used after construction.
    ///
    /// # Errors
    ///
    /// Returns the first [`OperationResultError`] raised by those appliers.
    pub fn from_info(info: ResultInfo) -> Result<Self, OperationResultError> {
        let ResultInfo {
            code,
            messages,
            arguments,
        } = info;
        let mut details = Self::new();
        if let Some(code) = code.filter(|c| !c.is_empty()) {
            details.set_code(code)?;
        }
        if !messages.is_empty() {
            details.add_messages(messages)?;
        }
        if !arguments.is_empty() {
            details.add_arguments(arguments)?;
        }
        Ok(details)
    }

    /// Caller-defined classification code.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Messages in the order they were added.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Structured metadata.
    #[must_use]
    pub const fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Set the code, replacing any previous one.
    ///
    /// # Errors
    ///
    /// [`OperationResultError::BlankArgument`] when `code` is empty or
    /// whitespace-only.
    pub fn set_code(&mut self, code: impl Into<String>) -> Result<(), OperationResultError> {
        let code = code.into();
        ensure_not_blank("code", &code)?;
        self.code = Some(code);
        Ok(())
    }

    /// Append `messages` in order.
    ///
    /// # Errors
    ///
    /// [`OperationResultError::BlankArgument`] when any message is empty or
    /// whitespace-only; nothing is appended in that case.
    pub fn add_messages<I, S>(&mut self, messages: I) -> Result<(), OperationResultError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let batch: Vec<String> = messages.into_iter().map(Into::into).collect();
        for message in &batch {
            ensure_not_blank("message", message)?;
        }
        self.messages.extend(batch);
        Ok(())
    }

    /// Insert every pair of `arguments`.
    ///
    /// # Errors
    ///
    /// - [`OperationResultError::EmptyCollection`] when `arguments` is empty.
    /// - [`OperationResultError::DuplicateArgumentKey`] when a key is already
    ///   present or repeats within the batch.
    ///
    /// Nothing is inserted when an error is returned.
    pub fn add_arguments<I, K, V>(&mut self, arguments: I) -> Result<(), OperationResultError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ArgumentValue>,
    {
        let batch: Vec<(String, ArgumentValue)> = arguments
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        if batch.is_empty() {
            return Err(rejected("arguments", OperationResultError::empty("arguments")));
        }
        let mut seen = HashSet::with_capacity(batch.len());
        for (key, _) in &batch {
            if self.arguments.contains_key(key) || !seen.insert(key.as_str()) {
                return Err(rejected("arguments", OperationResultError::duplicate(key)));
            }
        }
        for (key, value) in batch {
            self.arguments.insert_unchecked(key, value);
        }
        Ok(())
    }

    /// Fold `other` into `self` as the later of two failures.
    ///
    /// The code of `self` is kept; messages and arguments of `other` follow
    /// those of `self`.
    ///
    /// # Errors
    ///
    /// [`OperationResultError::DuplicateArgumentKey`] when both sides carry
    /// the same argument key. `self` is unchanged in that case.
    pub(crate) fn absorb(&mut self, other: Self) -> Result<(), OperationResultError> {
        let Self {
            code: _,
            messages,
            arguments,
        } = other;
        if let Some(key) = arguments.keys().find(|k| self.arguments.contains_key(k)) {
            return Err(rejected("arguments", OperationResultError::duplicate(key)));
        }
        for (key, value) in arguments {
            self.arguments.insert_unchecked(key, value);
        }
        self.messages.extend(messages);
        Ok(())
    }
}

fn ensure_not_blank(field: &'static str, value: &str) -> Result<(), OperationResultError> {
    if value.trim().is_empty() {
        return Err(rejected(field, OperationResultError::blank(field)));
    }
    Ok(())
}
