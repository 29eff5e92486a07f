//! Domain types for user accounts and authentication payloads.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// An account record as stored by the remote collection.
///
/// The password travels and is compared in plaintext; the remote store keeps
/// it that way and login is an exact-match lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub created_at: String,
}

impl User {
    /// Builds a fresh record from a registration, minting id and timestamp.
    pub fn from_registration(registration: &Registration) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: registration.email.clone(),
            password: registration.password.clone(),
            name: registration.name.clone(),
            avatar: String::new(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

impl Identifiable for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for User {
    fn display_label(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

/// Exact-match login credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Fields collected by the registration form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Partial profile update; unset fields are left untouched by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
