//! The module contains the representation of a cash flow record.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ResultEngine, validator::{FieldValue, Validator}};

/// A single ledger entry.
///
/// The `label` field encodes a set of tags as a comma-separated string.
/// There is no delimiter escaping, ordering guarantee or deduplication.
///
/// `created_at` is set once at creation and never changes; `updated_at` is
/// set at creation and refreshed on every successful update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub source: String,
    pub label: String,
    pub amount: f64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CashFlow {
    /// Tags carried by `label`: split on `,`, trimmed, empty tokens dropped.
    pub fn labels(&self) -> Vec<String> {
        self.label
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Candidate field values for creating or updating a cash flow.
///
/// Every field is optional so the validator can report all missing or
/// invalid fields at once. An absent field and a blank string are treated
/// identically by the `required` rule.
#[derive(Clone, Debug, Default)]
pub struct CashFlowDraft {
    pub kind: Option<String>,
    pub source: Option<String>,
    pub label: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
}

impl CashFlowDraft {
    pub(crate) fn validate(&self) -> ResultEngine<()> {
        let mut validator = Validator::new();
        validator.required("type", FieldValue::Text(self.kind.as_deref()), "Is required");
        validator.required(
            "source",
            FieldValue::Text(self.source.as_deref()),
            "Is required",
        );
        validator.required(
            "label",
            FieldValue::Text(self.label.as_deref()),
            "Is required",
        );
        validator.required("amount", FieldValue::Number(self.amount), "Is required");
        validator.required(
            "description",
            FieldValue::Text(self.description.as_deref()),
            "Is required",
        );
        validator.min("amount", FieldValue::Number(self.amount), 0.0, "Must be > 0");
        validator.finish()
    }

    /// Build the stored record. Only called after `validate` passed, so the
    /// defaults are never observable.
    pub(crate) fn into_record(
        self,
        id: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> CashFlow {
        CashFlow {
            id,
            kind: self.kind.unwrap_or_default(),
            source: self.source.unwrap_or_default(),
            label: self.label.unwrap_or_default(),
            amount: self.amount.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_label(label: &str) -> CashFlow {
        CashFlow {
            id: "1".to_string(),
            kind: "income".to_string(),
            source: "bank".to_string(),
            label: label.to_string(),
            amount: 10.0,
            description: "note".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn labels_split_and_trim() {
        let record = record_with_label("food, rent ,  travel");
        assert_eq!(record.labels(), vec!["food", "rent", "travel"]);
    }

    #[test]
    fn labels_drop_empty_tokens() {
        let record = record_with_label("food,, ,rent");
        assert_eq!(record.labels(), vec!["food", "rent"]);
    }

    #[test]
    fn labels_empty_field_has_no_tags() {
        let record = record_with_label("");
        assert!(record.labels().is_empty());
    }

    #[test]
    fn serde_uses_wire_field_names() {
        let record = record_with_label("food");
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("type").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("kind").is_none());
    }
}
