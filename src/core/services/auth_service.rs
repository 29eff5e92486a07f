//! Authentication and session lifecycle.

use tracing::info;

use crate::context::AppContext;
use crate::domain::common::Displayable;
use crate::domain::{Credentials, ProfilePatch, Registration, User};
use crate::errors::CoreError;
use crate::store::Query;

use super::{ServiceError, ServiceResult};

pub struct AuthService;

impl AuthService {
    /// Logs in by exact-match lookup and persists the matching user as the
    /// active session.
    pub async fn login(ctx: &AppContext, credentials: &Credentials) -> ServiceResult<User> {
        let query = Query::new()
            .eq("email", &credentials.email)
            .eq("password", &credentials.password);
        let matches: Vec<User> = ctx.store.list(&query).await?;
        let user = matches
            .into_iter()
            .next()
            .ok_or(CoreError::InvalidCredentials)?;
        ctx.session.save(&user)?;
        info!("logged in as {}", user.display_label());
        Ok(user)
    }

    /// Registers a new account, failing when the email is already taken, and
    /// persists the created user as the active session.
    pub async fn register(ctx: &AppContext, registration: &Registration) -> ServiceResult<User> {
        Self::validate_registration(registration)?;
        let existing: Vec<User> = ctx
            .store
            .list(&Query::new().eq("email", &registration.email))
            .await?;
        if !existing.is_empty() {
            return Err(CoreError::EmailTaken(registration.email.clone()).into());
        }
        let stored = ctx
            .store
            .create(&User::from_registration(registration))
            .await?;
        ctx.session.save(&stored)?;
        info!("registered {}", stored.display_label());
        Ok(stored)
    }

    /// Applies a profile patch and refreshes the persisted session when it
    /// belongs to the active user.
    pub async fn update_profile(
        ctx: &AppContext,
        id: &str,
        patch: &ProfilePatch,
    ) -> ServiceResult<User> {
        let updated: User = ctx.store.patch(id, patch).await?;
        if let Some(active) = ctx.session.load()? {
            if active.id == updated.id {
                ctx.session.save(&updated)?;
            }
        }
        Ok(updated)
    }

    pub async fn user_by_id(ctx: &AppContext, id: &str) -> ServiceResult<User> {
        Ok(ctx.store.get(id).await?)
    }

    /// The persisted session, if any; restored at application start.
    pub fn current_user(ctx: &AppContext) -> ServiceResult<Option<User>> {
        Ok(ctx.session.load()?)
    }

    /// Forgets the active session.
    pub fn logout(ctx: &AppContext) -> ServiceResult<()> {
        ctx.session.clear()?;
        info!("logged out");
        Ok(())
    }

    fn validate_registration(registration: &Registration) -> ServiceResult<()> {
        if registration.email.trim().is_empty() || !registration.email.contains('@') {
            return Err(ServiceError::Invalid(
                "A valid email address is required".into(),
            ));
        }
        if registration.password.is_empty() {
            return Err(ServiceError::Invalid("A password is required".into()));
        }
        if registration.name.trim().is_empty() {
            return Err(ServiceError::Invalid("A display name is required".into()));
        }
        Ok(())
    }
}
