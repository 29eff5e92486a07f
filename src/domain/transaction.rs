//! Domain types for income and expense transactions.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, EntryKind, Identifiable};
use crate::domain::month;

/// A single income or expense movement recorded by a user.
///
/// `date` stays a raw string on purpose: the remote store accepts anything,
/// and one malformed record must not fail a whole fetched batch. Aggregation
/// parses leniently and excludes what it cannot read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub description: String,
    pub date: String,
    pub created_at: String,
}

impl Transaction {
    /// Builds a fresh record from a draft, minting id and timestamp.
    pub fn from_draft(user_id: impl Into<String>, draft: &TransactionDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            category_id: draft.category_id.clone(),
            amount: draft.amount,
            kind: draft.kind,
            description: draft.description.clone(),
            date: draft.date.clone(),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// The transaction date, when it parses as one.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        month::parse_date(&self.date)
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} {:.2} on {}", self.kind, self.amount, self.date)
    }
}

/// Fields collected by the add-transaction form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub category_id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub description: String,
    pub date: String,
}

/// Partial transaction update; unset fields are left untouched by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntryKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
