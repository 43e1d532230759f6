//! Utility functions and types.

use std::fmt::Debug;

/// Redact hides secrets like consumer secrets and token secrets in `Debug` output.
///
/// - Empty values print as `EMPTY` so a missing token is still visible.
/// - Values shorter than 12 bytes are fully masked.
/// - Longer values keep their first and last three characters so different
///   keys stay distinguishable in logs.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.0;
        if value.is_empty() {
            return f.write_str("EMPTY");
        }
        if value.len() < 12 {
            return f.write_str("***");
        }

        // Only cut on char boundaries, secrets are not always ascii.
        let head = value.char_indices().nth(3).map_or(value.len(), |(i, _)| i);
        let tail = value
            .char_indices()
            .rev()
            .nth(2)
            .map_or(0, |(i, _)| i)
            .max(head);
        write!(f, "{}***{}", &value[..head], &value[tail..])
    }
}
