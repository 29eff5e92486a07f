//! Tagged form payloads.
//!
//! Every form in the application submits one of these variants, so each
//! entity's fields are checked at compile time instead of travelling as a
//! dynamic map.

use serde::{Deserialize, Serialize};

use crate::domain::budget::{Budget, BudgetDraft};
use crate::domain::transaction::{Transaction, TransactionDraft};
use crate::domain::user::{ProfilePatch, User};

/// A completed form, tagged by the entity it targets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "entity", content = "fields", rename_all = "camelCase")]
pub enum EntityDraft {
    Transaction(TransactionDraft),
    Budget(BudgetDraft),
    Profile(ProfilePatch),
}

/// The stored record produced by submitting an [`EntityDraft`].
#[derive(Debug, Clone, PartialEq)]
pub enum DraftOutcome {
    Transaction(Transaction),
    Budget(Budget),
    User(User),
}
