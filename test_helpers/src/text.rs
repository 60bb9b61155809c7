//! Text normalisation for behavioural step arguments.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Normalizes a scalar placeholder by trimming and unquoting one outer layer.
#[must_use]
pub fn normalize_scalar(value: &str) -> String {
    unquote(value).trim().to_owned()
}

/// Splits a comma-separated step argument into normalised entries.
///
/// Empty entries are dropped, so `""` yields an empty list.
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    unquote(value)
        .split(',')
        .map(normalize_scalar)
        .filter(|entry| !entry.is_empty())
        .collect()
}
