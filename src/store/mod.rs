//! Remote collection store.
//!
//! The backend is a generic collection-per-entity REST service: every entity
//! lives under one path, lists accept equality filters and `_sort`/`_order`
//! query parameters, and single records live at `/{collection}/{id}`.

pub mod query;
pub mod rest;

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::common::Identifiable;
use crate::domain::{Budget, Category, Transaction, User};

pub use query::{Query, SortOrder};
pub use rest::RestStore;

/// Binds an entity to the remote collection holding it.
pub trait Resource: Identifiable + Serialize + DeserializeOwned {
    const COLLECTION: &'static str;
}

impl Resource for User {
    const COLLECTION: &'static str = "users";
}

impl Resource for Category {
    const COLLECTION: &'static str = "categories";
}

impl Resource for Transaction {
    const COLLECTION: &'static str = "transactions";
}

impl Resource for Budget {
    const COLLECTION: &'static str = "budgets";
}
