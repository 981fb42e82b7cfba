//! Structured comparison results for composite checks.
//!
//! Composite reads (cart line item, order summary) compare several fields at
//! once. Instead of collapsing into a single boolean, each comparison keeps
//! the list of field-level mismatches so a failure names exactly which
//! sub-field diverged.

use std::fmt;

use crate::result::{E2eError, E2eResult};

/// One field whose actual value diverged from the expected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMismatch {
    /// Field name ("name", "price", "quantity", ...)
    pub field: &'static str,
    /// Caller-supplied expected value
    pub expected: String,
    /// Value read from the page
    pub actual: String,
}

impl fmt::Display for FieldMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {:?}, got {:?}",
            self.field, self.expected, self.actual
        )
    }
}

/// Outcome of a composite check: empty means every field matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    mismatches: Vec<FieldMismatch>,
}

impl CheckOutcome {
    /// Start an empty (passing) outcome
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare a field for exact equality
    pub fn field(mut self, field: &'static str, expected: &str, actual: &str) -> Self {
        if expected != actual {
            self.mismatches.push(FieldMismatch {
                field,
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        self
    }

    /// Compare a field for substring containment (actual must contain expected)
    pub fn field_contains(mut self, field: &'static str, expected: &str, actual: &str) -> Self {
        if !actual.contains(expected) {
            self.mismatches.push(FieldMismatch {
                field,
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        self
    }

    /// Whether every compared field matched
    pub fn is_match(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// The fields that diverged, in comparison order
    pub fn mismatches(&self) -> &[FieldMismatch] {
        &self.mismatches
    }

    /// Convert to a result, failing with the fixed step message followed by
    /// the per-field detail.
    pub fn require(self, message: &str) -> E2eResult<()> {
        if self.is_match() {
            Ok(())
        } else {
            let detail: Vec<String> = self.mismatches.iter().map(ToString::to_string).collect();
            Err(E2eError::assertion(format!(
                "{message} ({})",
                detail.join("; ")
            )))
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_match() {
            write!(f, "all fields match")
        } else {
            let detail: Vec<String> = self.mismatches.iter().map(ToString::to_string).collect();
            write!(f, "{}", detail.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matching_fields_pass() {
        let outcome = CheckOutcome::new()
            .field("name", "Sauce Labs Bolt T-Shirt", "Sauce Labs Bolt T-Shirt")
            .field("price", "$15.99", "$15.99")
            .field("quantity", "1", "1");
        assert!(outcome.is_match());
        assert!(outcome.require("cart details").is_ok());
    }

    #[test]
    fn each_mismatch_is_reported() {
        let outcome = CheckOutcome::new()
            .field("name", "Sauce Labs Bolt T-Shirt", "Sauce Labs Bolt T-Shirt")
            .field("price", "$15.99", "$9.99")
            .field("quantity", "1", "2");
        assert!(!outcome.is_match());
        let fields: Vec<&str> = outcome.mismatches().iter().map(|m| m.field).collect();
        assert_eq!(fields, vec!["price", "quantity"]);
    }

    #[test]
    fn contains_check_matches_substring() {
        let outcome = CheckOutcome::new().field_contains("total", "$17.27", "Total: $17.27");
        assert!(outcome.is_match());
    }

    #[test]
    fn require_carries_step_message_and_detail() {
        let err = CheckOutcome::new()
            .field("price", "$15.99", "$9.99")
            .require("The T-shirt details in the cart do not match the expected values.")
            .unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("The T-shirt details in the cart do not match"));
        assert!(rendered.contains("price: expected \"$15.99\", got \"$9.99\""));
    }
}
