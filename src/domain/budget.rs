//! Domain types for monthly category budgets.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};
use crate::domain::month::MonthKey;

/// A spending ceiling for one category in one calendar month.
///
/// At most one record exists per (user, category, month); creation upserts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: f64,
    pub month: MonthKey,
    pub created_at: String,
}

impl Budget {
    /// Builds a fresh record from a draft, minting id and timestamp.
    pub fn from_draft(user_id: impl Into<String>, draft: &BudgetDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            category_id: draft.category_id.clone(),
            amount: draft.amount,
            month: draft.month,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

impl Identifiable for Budget {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Budget {
    fn display_label(&self) -> String {
        format!("{:.2} for category {} in {}", self.amount, self.category_id, self.month)
    }
}

/// Fields collected by the set-budget form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDraft {
    pub category_id: String,
    pub amount: f64,
    pub month: MonthKey,
}

/// Partial budget update; unset fields are left untouched by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthKey>,
}

impl BudgetPatch {
    /// Patch that only replaces the configured amount.
    pub fn amount(amount: f64) -> Self {
        Self {
            amount: Some(amount),
            ..Self::default()
        }
    }
}
